//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep validation, error wording and effect plumbing out of
//! page components so they can be unit-tested without a browser.

pub mod auth;
pub mod error_message;
pub mod validation;
