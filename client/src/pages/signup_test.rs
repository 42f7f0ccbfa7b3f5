use super::*;

#[test]
fn validate_signup_input_accepts_strong_credentials() {
    let request = validate_signup_input(" a@b.com ", " A ", "Str0ngPass!").unwrap();
    assert_eq!(request, SignupRequest::from_input("a@b.com", "A", "Str0ngPass!"));
    assert_eq!(request.name, "A");
}

#[test]
fn validate_signup_input_rejects_weak_password() {
    let errors = validate_signup_input("a@b.com", "A", "a").unwrap_err();
    assert_eq!(errors.get("password"), Some("Password must be at least 8 characters"));
    assert_eq!(errors.get("email"), None);
    assert_eq!(errors.get("name"), None);
}

#[test]
fn validate_signup_input_rejects_password_without_digit() {
    let errors = validate_signup_input("a@b.com", "A", "NoDigitsHere").unwrap_err();
    assert_eq!(
        errors.get("password"),
        Some("Password must include an uppercase letter, a lowercase letter and a number")
    );
}

#[test]
fn validate_signup_input_requires_name() {
    let errors = validate_signup_input("a@b.com", "   ", "Str0ngPass!").unwrap_err();
    assert_eq!(errors.get("name"), Some("Name is required"));
}

#[test]
fn submit_label_tracks_pending() {
    assert_eq!(submit_label(false), "Create Account");
    assert_eq!(submit_label(true), "Creating account...");
}
