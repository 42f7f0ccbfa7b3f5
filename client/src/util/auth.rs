//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in, sign-up and dashboard pages apply controller effects and route
//! guards identically.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::AppRoute;
use crate::state::auth::{AuthEffect, AuthState};
use crate::state::toast::ToastState;

/// True when a view that needs an identity has none to show.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.session.is_signed_in()
}

/// Redirect to the sign-in view whenever no session identity is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(AppRoute::Signin.path(), NavigateOptions::default());
        }
    });
}

/// Route a signed-in user should be sent to from the sign-in/sign-up pages.
pub fn signed_in_redirect(state: &AuthState) -> Option<AppRoute> {
    state.session.is_signed_in().then_some(AppRoute::Dashboard)
}

/// Redirect to the dashboard whenever a session identity is present.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(route) = auth.with(signed_in_redirect) {
            navigate(route.path(), NavigateOptions::default());
        }
    });
}

/// Effect an auth page still has to apply once its signed-in redirect is
/// installed. The redirect already reacts to the new session by going to the
/// dashboard, so that navigation is dropped here instead of happening twice.
pub fn unless_redirected(effect: AuthEffect) -> Option<AuthEffect> {
    match effect {
        AuthEffect::Navigate(AppRoute::Dashboard) => None,
        other => Some(other),
    }
}

/// Carry out a controller effect: navigation or an error toast.
pub fn apply_effect<F>(effect: AuthEffect, navigate: &F, toasts: RwSignal<ToastState>)
where
    F: Fn(&str, NavigateOptions),
{
    match effect {
        AuthEffect::Navigate(route) => navigate(route.path(), NavigateOptions::default()),
        AuthEffect::Notify(message) => notify_error(toasts, message),
    }
}

/// Queue an error toast that dismisses itself after `TOAST_TTL_MS`.
pub fn notify_error(toasts: RwSignal<ToastState>, message: String) {
    let queued = toasts.try_update(|t| t.error(message));
    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = queued {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_TTL_MS).await;
                toasts.try_update(|t| t.dismiss(id));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = queued;
}
