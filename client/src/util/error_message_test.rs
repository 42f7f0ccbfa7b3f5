use super::*;
use serde_json::json;

const FALLBACK: &str = "Failed to create account";

#[test]
fn string_error_is_used_directly() {
    let value = json!({ "response": { "data": { "error": "X" } } });
    assert_eq!(normalize_error(&value, FALLBACK), "X");
}

#[test]
fn object_error_uses_message_field() {
    let value = json!({ "response": { "data": { "error": { "message": "Y" } } } });
    assert_eq!(normalize_error(&value, FALLBACK), "Y");
}

#[test]
fn malformed_envelopes_fall_back() {
    let shapes = [
        json!(null),
        json!({}),
        json!([]),
        json!("error"),
        json!(17),
        json!({ "response": null }),
        json!({ "response": { "data": null } }),
        json!({ "response": { "data": { "error": null } } }),
        json!({ "response": { "data": { "error": 404 } } }),
        json!({ "response": { "data": { "error": ["a", "b"] } } }),
        json!({ "response": { "data": { "error": { "message": 5 } } } }),
        json!({ "response": { "data": { "error": { "detail": "nope" } } } }),
        json!({ "response": { "data": { "error": "" } } }),
        json!({ "response": { "data": { "error": { "message": "   " } } } }),
    ];
    for shape in shapes {
        assert_eq!(normalize_error(&shape, FALLBACK), FALLBACK, "shape: {shape}");
    }
}

#[test]
fn fallback_is_caller_supplied() {
    assert_eq!(normalize_error(&json!({}), "Failed to sign in"), "Failed to sign in");
}

#[test]
fn request_error_status_body_is_normalized() {
    let err = RequestError::Status { status: 401, data: json!({ "error": "Invalid credentials" }) };
    assert_eq!(request_error_message(&err, FALLBACK), "Invalid credentials");
}

#[test]
fn request_error_without_response_falls_back() {
    let err = RequestError::Decode("missing field `name`".to_owned());
    assert_eq!(request_error_message(&err, FALLBACK), FALLBACK);
}

#[test]
fn message_is_trimmed() {
    let value = json!({ "response": { "data": { "error": "  Email taken \n" } } });
    assert_eq!(normalize_error(&value, FALLBACK), "Email taken");
}
