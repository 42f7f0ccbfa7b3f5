//! Transient notifications (toasts).
//!
//! Request failures end up here; the `ToastHost` component renders the list
//! and removes entries when dismissed or expired.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays up before it is dismissed automatically.
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue an error toast and return its id.
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, message: message.into() });
        id
    }

    /// Remove the toast with `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}
