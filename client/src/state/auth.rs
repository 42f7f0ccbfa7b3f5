//! Auth controller: mutation lifecycle and session side effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `submit_sign_in` / `submit_sign_up` after their form passes
//! validation, and `sign_out` from the dashboard. The returned `AuthEffect`
//! tells the page where to navigate or what to show; applying it is the
//! page's job (see `util::auth`).
//!
//! DESIGN
//! ======
//! `AuthState` is plain data with synchronous transitions. The async
//! functions only sequence `begin → request → complete` and never hold the
//! state across the request, so the double-submit guard is what keeps a second
//! submission from issuing a request while the first is pending.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::future::Future;

use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::net::error::RequestError;
use crate::net::http::HttpClient;
use crate::net::types::{AuthResponse, SigninRequest, SignupRequest};
use crate::routes::AppRoute;
use crate::state::mutation::MutationStatus;
use crate::state::session::SessionState;
use crate::util::error_message::request_error_message;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    SignIn,
    SignUp,
}

impl AuthAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::SignIn => "sign-in",
            Self::SignUp => "sign-up",
        }
    }
}

/// Side effect the UI must perform after an auth transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEffect {
    Navigate(AppRoute),
    /// Show the message as an error notification.
    Notify(String),
}

/// Session identity plus the lifecycle of each auth mutation.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: SessionState,
    pub sign_in: MutationStatus,
    pub sign_up: MutationStatus,
}

impl AuthState {
    pub fn mutation(&self, action: AuthAction) -> &MutationStatus {
        match action {
            AuthAction::SignIn => &self.sign_in,
            AuthAction::SignUp => &self.sign_up,
        }
    }

    fn mutation_mut(&mut self, action: AuthAction) -> &mut MutationStatus {
        match action {
            AuthAction::SignIn => &mut self.sign_in,
            AuthAction::SignUp => &mut self.sign_up,
        }
    }

    /// True while any auth request is in flight.
    pub fn is_busy(&self) -> bool {
        self.sign_in.is_pending() || self.sign_up.is_pending()
    }

    /// Start an attempt for `action`. Refused while any auth request is pending.
    pub fn begin(&mut self, action: AuthAction) -> bool {
        if self.is_busy() {
            return false;
        }
        self.mutation_mut(action).begin()
    }

    /// Apply the outcome of the in-flight attempt for `action`.
    ///
    /// Success stores the identity and navigates to the dashboard. Failure
    /// leaves any existing session alone and yields the normalized message.
    /// Returns `None` when no attempt for `action` was pending.
    pub fn complete(
        &mut self,
        action: AuthAction,
        result: Result<AuthResponse, RequestError>,
        fallback: &str,
    ) -> Option<AuthEffect> {
        match result {
            Ok(user) => {
                if !self.mutation_mut(action).succeed() {
                    return None;
                }
                self.session.set(user);
                Some(AuthEffect::Navigate(AppRoute::Dashboard))
            }
            Err(err) => {
                let message = request_error_message(&err, fallback);
                if !self.mutation_mut(action).fail(message.clone()) {
                    return None;
                }
                Some(AuthEffect::Notify(message))
            }
        }
    }

    /// Forget the identity and send the user to the sign-in view.
    pub fn sign_out(&mut self) -> AuthEffect {
        self.session.clear();
        AuthEffect::Navigate(AppRoute::Signin)
    }
}

/// Shared, mutable home of an `AuthState`.
///
/// A `RwSignal` in the app, a `RefCell` in tests. Returns `None` if the
/// state is gone (e.g. a disposed signal).
pub trait AuthCell {
    fn with_auth<R>(&self, f: impl FnOnce(&mut AuthState) -> R) -> Option<R>;
}

impl AuthCell for RefCell<AuthState> {
    fn with_auth<R>(&self, f: impl FnOnce(&mut AuthState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl AuthCell for RwSignal<AuthState> {
    fn with_auth<R>(&self, f: impl FnOnce(&mut AuthState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Submit an already-validated sign-in.
///
/// Returns `None` without issuing a request if an auth request is pending.
pub async fn submit_sign_in<C, S>(client: &C, cell: &S, request: &SigninRequest, fallback: &str) -> Option<AuthEffect>
where
    C: HttpClient,
    S: AuthCell,
{
    run(cell, AuthAction::SignIn, fallback, || api::signin_user(client, request)).await
}

/// Submit an already-validated sign-up.
///
/// Returns `None` without issuing a request if an auth request is pending.
pub async fn submit_sign_up<C, S>(client: &C, cell: &S, request: &SignupRequest, fallback: &str) -> Option<AuthEffect>
where
    C: HttpClient,
    S: AuthCell,
{
    run(cell, AuthAction::SignUp, fallback, || api::signup_user(client, request)).await
}

/// Clear the session. Same outcome whether or not anyone was signed in.
pub fn sign_out<S: AuthCell>(cell: &S) -> AuthEffect {
    leptos::logging::log!("signing out");
    cell.with_auth(AuthState::sign_out)
        .unwrap_or(AuthEffect::Navigate(AppRoute::Signin))
}

/// Re-read the signed-in identity from `GET /users/me`.
///
/// The fresh identity is applied only to the session that was current when
/// the request went out; if that user signed out, or someone else signed in,
/// meanwhile, the response is dropped. Nothing is requested when no one is
/// signed in.
///
/// # Errors
///
/// Returns the normalized message when the profile cannot be loaded; the
/// stored identity is left as it was.
pub async fn refresh_profile<C, S>(client: &C, cell: &S, fallback: &str) -> Result<(), String>
where
    C: HttpClient,
    S: AuthCell,
{
    let current = cell.with_auth(|state| {
        state
            .session
            .is_signed_in()
            .then(|| state.session.generation())
    });
    let Some(generation) = current.flatten() else {
        return Ok(());
    };
    match api::fetch_current_user(client).await {
        Ok(user) => {
            let applied = cell.with_auth(|state| state.session.refresh(generation, user));
            if applied != Some(true) {
                leptos::logging::log!("profile refresh dropped: session changed while loading");
            }
            Ok(())
        }
        Err(err) => {
            leptos::logging::warn!("profile refresh failed: {err}");
            Err(request_error_message(&err, fallback))
        }
    }
}

async fn run<S, F, Fut>(cell: &S, action: AuthAction, fallback: &str, call: F) -> Option<AuthEffect>
where
    S: AuthCell,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<AuthResponse, RequestError>>,
{
    if !cell.with_auth(|state| state.begin(action)).unwrap_or(false) {
        leptos::logging::log!("{} ignored: auth request already in flight", action.label());
        return None;
    }
    let result = call().await;
    if let Err(err) = &result {
        leptos::logging::warn!("{} failed: {err}", action.label());
    }
    cell.with_auth(|state| state.complete(action, result, fallback))
        .flatten()
}
