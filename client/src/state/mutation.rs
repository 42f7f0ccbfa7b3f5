//! Lifecycle of a single auth mutation (one sign-in or sign-up attempt).
//!
//! DESIGN
//! ======
//! `Idle → Pending → Success | Error`. Terminal states stay put until the UI
//! starts a fresh attempt with `begin`; nothing resets automatically. A
//! completion that arrives while not `Pending` is stale and ignored.

#[cfg(test)]
#[path = "mutation_test.rs"]
mod mutation_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MutationStatus {
    #[default]
    Idle,
    Pending,
    Success,
    /// Failed with the normalized message shown to the user.
    Error(String),
}

impl MutationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Start a new attempt. Returns `false` if one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    /// Mark the in-flight attempt successful. Returns `false` if none was in flight.
    pub fn succeed(&mut self) -> bool {
        if !self.is_pending() {
            return false;
        }
        *self = Self::Success;
        true
    }

    /// Mark the in-flight attempt failed. Returns `false` if none was in flight.
    pub fn fail(&mut self, message: String) -> bool {
        if !self.is_pending() {
            return false;
        }
        *self = Self::Error(message);
        true
    }
}
