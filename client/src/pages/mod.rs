//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (context lookup, redirects,
//! dispatching to the auth controller) and delegates rendering details to
//! `components`.

pub mod dashboard;
pub mod not_found;
pub mod signin;
pub mod signup;
