//! Session identity for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single owner of "who is signed in". Written by the auth controller on a
//! successful sign-in/sign-up, on a profile refresh, and by sign-out; read by
//! the dashboard and the route guards.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::AuthResponse;

/// Either no identity or exactly the identity the server returned.
///
/// `generation` changes whenever the identity is set or dropped, so work
/// started for one session can tell whether that session is still current.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    user: Option<AuthResponse>,
    generation: u64,
}

impl SessionState {
    pub fn get(&self) -> Option<&AuthResponse> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the identity wholesale.
    pub fn set(&mut self, user: AuthResponse) {
        self.user = Some(user);
        self.generation += 1;
    }

    /// Replace the identity of the session captured at `generation` with a
    /// fresher copy. Returns `false` and changes nothing if that session has
    /// since ended or been replaced.
    pub fn refresh(&mut self, generation: u64, user: AuthResponse) -> bool {
        if !self.is_signed_in() || self.generation != generation {
            return false;
        }
        self.user = Some(user);
        true
    }

    /// Drop the identity. Safe to call when already signed out.
    pub fn clear(&mut self) {
        if self.user.take().is_some() {
            self.generation += 1;
        }
    }
}
