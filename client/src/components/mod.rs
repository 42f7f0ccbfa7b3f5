//! Shared UI components used by the route-level pages.

pub mod text_field;
pub mod toast_host;
