use super::*;
use serde_json::json;

// =============================================================
// Request bodies
// =============================================================

#[test]
fn signup_request_serializes_documented_shape() {
    let req = SignupRequest::from_input("a@b.com", "A", "Str0ngPass!");
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        json!({ "email": "a@b.com", "name": "A", "password": "Str0ngPass!" })
    );
}

#[test]
fn signin_request_serializes_documented_shape() {
    let req = SigninRequest::from_input("a@b.com", "secret");
    assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "email": "a@b.com", "password": "secret" }));
}

#[test]
fn from_input_trims_identity_fields_but_not_password() {
    let req = SignupRequest::from_input("  a@b.com ", " Ada  ", " pass word ");
    assert_eq!(req.email, "a@b.com");
    assert_eq!(req.name, "Ada");
    assert_eq!(req.password, " pass word ");

    let req = SigninRequest::from_input(" a@b.com", " x ");
    assert_eq!(req.email, "a@b.com");
    assert_eq!(req.password, " x ");
}

// =============================================================
// AuthResponse
// =============================================================

#[test]
fn auth_response_keeps_unknown_fields() {
    let body = json!({
        "id": "u-1",
        "name": "A",
        "email": "a@b.com",
        "roles": ["admin"],
    });
    let resp: AuthResponse = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(resp.name, "A");
    assert_eq!(resp.email, "a@b.com");
    assert_eq!(resp.extra.get("id"), Some(&json!("u-1")));
    assert_eq!(serde_json::to_value(&resp).unwrap(), body);
}

#[test]
fn auth_response_requires_name_and_email() {
    assert!(serde_json::from_value::<AuthResponse>(json!({ "name": "A" })).is_err());
    assert!(serde_json::from_value::<AuthResponse>(json!({ "email": "a@b.com" })).is_err());
}

#[test]
fn auth_response_new_has_no_extra_fields() {
    let resp = AuthResponse::new("A", "a@b.com");
    assert_eq!(serde_json::to_value(&resp).unwrap(), json!({ "name": "A", "email": "a@b.com" }));
}
