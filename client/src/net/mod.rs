//! Networking modules for the authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` defines the transport seam and its browser implementation, `api`
//! issues the auth calls over it, `types` defines the request/response wire
//! schema, and `error` models failed calls.

pub mod api;
pub mod error;
pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;
