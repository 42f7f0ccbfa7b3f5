//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, per-action `mutation` lifecycle,
//! `toast` notifications) and composed by the `auth` controller, so pages
//! depend only on the small models they render.

pub mod auth;
pub mod mutation;
pub mod session;
pub mod toast;
