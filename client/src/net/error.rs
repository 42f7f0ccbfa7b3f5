//! Failed auth calls and the error envelope servers send back.
//!
//! DESIGN
//! ======
//! Servers report failures as `{ "error": "text" }` or
//! `{ "error": { "message": "text" } }`. That union is decoded into
//! `ErrorPayload` once, here, where the response is first seen; everything
//! downstream works with an `ErrorEnvelope` and never inspects raw JSON.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;
use serde_json::{Value, json};

use super::http::TransportError;

/// Why an auth call failed. Carries the raw server body untouched.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("server responded with status {status}")]
    Status { status: u16, data: Value },
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl RequestError {
    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Typed view of the failure, shaped like `{ response: { status, data } }`.
    pub fn envelope(&self) -> ErrorEnvelope {
        match self {
            Self::Status { status, data } => ErrorEnvelope {
                status: Some(*status),
                payload: data.get("error").and_then(ErrorPayload::from_value),
            },
            _ => ErrorEnvelope::default(),
        }
    }

    /// The raw `{ response: { status, data } }` value, or `{}` when no response exists.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Status { status, data } => json!({ "response": { "status": status, "data": data } }),
            _ => json!({}),
        }
    }
}

/// The two shapes servers use for `response.data.error`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    Text(String),
    Detail { message: String },
}

impl ErrorPayload {
    /// Decode either shape; anything else is not a payload.
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Detail { message } => message,
        }
    }
}

/// Resolved view of a failed call: what the server said, if anything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub status: Option<u16>,
    pub payload: Option<ErrorPayload>,
}

impl ErrorEnvelope {
    /// Read `response.status` and `response.data.error` from an arbitrary value.
    /// Missing or mistyped parts are left empty.
    pub fn from_value(value: &Value) -> Self {
        let status = value
            .pointer("/response/status")
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok());
        let payload = value
            .pointer("/response/data/error")
            .and_then(ErrorPayload::from_value);
        Self { status, payload }
    }
}
