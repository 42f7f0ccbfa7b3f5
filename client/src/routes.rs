//! Named application routes.
//!
//! Navigation side effects produced by the auth controller refer to these
//! variants instead of raw strings so the router table and the controller
//! cannot drift apart.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// A route the app can navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Signin,
    Signup,
    Dashboard,
}

impl AppRoute {
    /// Path segment registered with the router (no leading slash).
    pub fn segment(self) -> &'static str {
        match self {
            Self::Signin => "signin",
            Self::Signup => "signup",
            Self::Dashboard => "dashboard",
        }
    }

    /// Absolute path used for navigation and links.
    pub fn path(self) -> &'static str {
        match self {
            Self::Signin => "/signin",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
        }
    }
}
