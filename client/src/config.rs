//! Client configuration resolved at build time.
//!
//! The WASM bundle has no process environment, so values are read with
//! `option_env!` when the crate is compiled:
//!
//! - `AUTH_API_BASE_URL`: base URL of the authentication API (default
//!   `http://localhost:8080`)
//! - `AUTH_SIGNOUT_PATH`: when set, sign-out also posts to this path so the
//!   server can drop its session (default: local sign-out only)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::auth::AuthAction;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_SIGNUP_ERROR: &str = "Failed to create account";
pub const DEFAULT_SIGNIN_ERROR: &str = "Failed to sign in";
pub const DEFAULT_PROFILE_ERROR: &str = "Failed to load profile";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub signout_path: Option<String>,
    pub signup_error: String,
    pub signin_error: String,
    pub profile_error: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            signout_path: None,
            signup_error: DEFAULT_SIGNUP_ERROR.to_owned(),
            signin_error: DEFAULT_SIGNIN_ERROR.to_owned(),
            profile_error: DEFAULT_PROFILE_ERROR.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from the variables captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("AUTH_API_BASE_URL"), option_env!("AUTH_SIGNOUT_PATH"))
    }

    fn from_values(api_base_url: Option<&str>, signout_path: Option<&str>) -> Self {
        let api_base_url = non_blank(api_base_url)
            .map_or(DEFAULT_API_BASE_URL, |url| url.trim_end_matches('/'))
            .to_owned();
        let signout_path = non_blank(signout_path).map(normalize_path);
        Self { api_base_url, signout_path, ..Self::default() }
    }

    /// Message shown when a failed `action` carries no usable server message.
    pub fn error_fallback(&self, action: AuthAction) -> &str {
        match action {
            AuthAction::SignIn => &self.signin_error,
            AuthAction::SignUp => &self.signup_error,
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}
