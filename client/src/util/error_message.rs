//! Turn failed requests into one human-readable line.
//!
//! Every input resolves to a string: an unrecognized or empty payload falls
//! back to the caller-supplied message.

#[cfg(test)]
#[path = "error_message_test.rs"]
mod error_message_test;

use serde_json::Value;

use crate::net::error::{ErrorEnvelope, RequestError};

/// Message carried by `envelope`, or `fallback` when there is none.
pub fn error_message(envelope: &ErrorEnvelope, fallback: &str) -> String {
    envelope
        .payload
        .as_ref()
        .map(|payload| payload.message().trim())
        .filter(|message| !message.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

/// Same as [`error_message`] for a raw `{ response: { data: { error } } }` value.
pub fn normalize_error(value: &Value, fallback: &str) -> String {
    error_message(&ErrorEnvelope::from_value(value), fallback)
}

/// Display line for a failed auth call.
pub fn request_error_message(err: &RequestError, fallback: &str) -> String {
    error_message(&err.envelope(), fallback)
}
