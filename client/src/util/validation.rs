//! Form validation rules for the auth pages.
//!
//! DESIGN
//! ======
//! Sign-up is strict (name length, password length and complexity); sign-in
//! only checks that a password is present. An account created under older
//! password rules must still be able to sign in, so the server stays the
//! judge of existing passwords.
//!
//! Rules are attached to the request types with `validator`; this module holds
//! the constants, the custom rule functions, and the mapping of
//! `ValidationErrors` into one message per form field.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::{Validate, ValidationError, ValidationErrors};

pub const NAME_MAX_LEN: usize = 50;
pub const PASSWORD_MIN_LEN: usize = 8;

const REQUIRED: &str = "required";

/// Name must be present and at most `NAME_MAX_LEN` characters.
///
/// # Errors
///
/// Returns a `required` or `name_length` error.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(rule_error(REQUIRED, "Name is required"));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(rule_error("name_length", "Name must be 50 characters or fewer"));
    }
    Ok(())
}

/// Sign-up password: at least `PASSWORD_MIN_LEN` characters with a lowercase
/// letter, an uppercase letter and a digit.
///
/// # Errors
///
/// Returns the first rule the password breaks.
pub fn validate_signup_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(rule_error(REQUIRED, "Password is required"));
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(rule_error("password_length", "Password must be at least 8 characters"));
    }
    let has_lower = password.chars().any(char::is_lowercase);
    let has_upper = password.chars().any(char::is_uppercase);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(has_lower && has_upper && has_digit) {
        return Err(rule_error(
            "password_strength",
            "Password must include an uppercase letter, a lowercase letter and a number",
        ));
    }
    Ok(())
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// One display message per invalid field, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Forget the error for `field`, typically once the user edits it.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            let chosen = errs.iter().find(|e| e.code == REQUIRED).or_else(|| errs.first());
            if let Some(err) = chosen {
                out.insert(field.to_string(), describe(err));
            }
        }
        Self(out)
    }
}

fn describe(err: &ValidationError) -> String {
    match &err.message {
        Some(message) => message.to_string(),
        None => format!("Invalid value ({})", err.code),
    }
}

/// Run a request's rules and collapse failures into per-field messages.
///
/// # Errors
///
/// Returns the field messages when any rule fails.
pub fn check<T: Validate>(request: &T) -> Result<(), FieldErrors> {
    request.validate().map_err(|errors| FieldErrors::from(&errors))
}
