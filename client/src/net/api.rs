//! REST calls against the authentication API.
//!
//! Each call is a single best-effort request: no validation, no retries, no
//! timeout handling. Failures are returned as-is for the caller to interpret.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `RequestError::Status` with the body untouched so
//! the controller can normalize whatever the server put in it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::RequestError;
use super::http::{HttpClient, HttpResponse};
use super::types::{AuthResponse, SigninRequest, SignupRequest};

pub const SIGN_UP_PATH: &str = "/auth/sign-up";
pub const SIGN_IN_PATH: &str = "/auth/sign-in";
pub const CURRENT_USER_PATH: &str = "/users/me";

/// Create an account via `POST /auth/sign-up`.
///
/// # Errors
///
/// Returns the transport, status or decode failure unchanged.
pub async fn signup_user<C: HttpClient>(client: &C, data: &SignupRequest) -> Result<AuthResponse, RequestError> {
    post_json(client, SIGN_UP_PATH, data).await
}

/// Authenticate via `POST /auth/sign-in`.
///
/// # Errors
///
/// Returns the transport, status or decode failure unchanged.
pub async fn signin_user<C: HttpClient>(client: &C, data: &SigninRequest) -> Result<AuthResponse, RequestError> {
    post_json(client, SIGN_IN_PATH, data).await
}

/// Load the identity behind the current server session via `GET /users/me`.
///
/// # Errors
///
/// Returns the transport, status or decode failure unchanged.
pub async fn fetch_current_user<C: HttpClient>(client: &C) -> Result<AuthResponse, RequestError> {
    let resp = client.get(CURRENT_USER_PATH).await?;
    decode(resp)
}

/// Ask the server to drop its session by posting an empty object to `path`.
///
/// # Errors
///
/// Returns a transport failure or the non-2xx status; the body is ignored.
pub async fn sign_out<C: HttpClient>(client: &C, path: &str) -> Result<(), RequestError> {
    let resp = client.post(path, &Value::Object(serde_json::Map::new())).await?;
    if resp.is_success() {
        Ok(())
    } else {
        Err(status_error(resp))
    }
}

async fn post_json<C, B, T>(client: &C, path: &str, body: &B) -> Result<T, RequestError>
where
    C: HttpClient,
    B: Serialize,
    T: DeserializeOwned,
{
    let body = serde_json::to_value(body).map_err(|e| RequestError::Encode(e.to_string()))?;
    let resp = client.post(path, &body).await?;
    decode(resp)
}

fn decode<T: DeserializeOwned>(resp: HttpResponse) -> Result<T, RequestError> {
    if !resp.is_success() {
        return Err(status_error(resp));
    }
    serde_json::from_value(resp.body).map_err(|e| RequestError::Decode(e.to_string()))
}

fn status_error(resp: HttpResponse) -> RequestError {
    RequestError::Status { status: resp.status, data: resp.body }
}
