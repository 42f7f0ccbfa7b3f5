//! Request/response DTOs for the authentication API.
//!
//! DESIGN
//! ======
//! Request types carry their own `validator` rules (see
//! `util::validation`) so the form boundary and the wire schema stay in one
//! place. `AuthResponse` keeps unknown fields so the identity the server sent
//! is held exactly as received.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::util::validation::{validate_name, validate_signup_password};

/// Body of `POST /auth/sign-up`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(
        length(min = 1, code = "required", message = "Email is required"),
        email(message = "Enter a valid email address")
    )]
    pub email: String,
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(custom(function = "validate_signup_password"))]
    pub password: String,
}

impl SignupRequest {
    /// Build a request from raw form input. Email and name are trimmed; the
    /// password is taken verbatim.
    pub fn from_input(email: &str, name: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_owned(),
            name: name.trim().to_owned(),
            password: password.to_owned(),
        }
    }
}

/// Body of `POST /auth/sign-in`.
///
/// The password is only checked for presence; the server decides whether it
/// is correct.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(
        length(min = 1, code = "required", message = "Email is required"),
        email(message = "Enter a valid email address")
    )]
    pub email: String,
    #[validate(length(min = 1, code = "required", message = "Password is required"))]
    pub password: String,
}

impl SigninRequest {
    pub fn from_input(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_owned(),
            password: password.to_owned(),
        }
    }
}

/// Identity returned by a successful sign-up, sign-in or profile fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Any further server-defined fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuthResponse {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), extra: Map::new() }
    }
}
