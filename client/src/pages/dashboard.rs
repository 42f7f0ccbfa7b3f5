//! Dashboard page showing the signed-in identity with a sign-out action.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The identity shown is whatever
//! the last successful sign-in or sign-up stored in the session; on mount the
//! page re-reads it from the server so profile edits made elsewhere show up.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::types::AuthResponse;
use crate::state::auth::{AuthState, sign_out};
use crate::state::toast::ToastState;
use crate::util::auth::{apply_effect, install_unauth_redirect};

const DEFAULT_DISPLAY_NAME: &str = "User";

/// Name used in the greeting; blank or missing names read as "User".
pub fn display_name(user: Option<&AuthResponse>) -> &str {
    user.map(|u| u.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_DISPLAY_NAME)
}

pub fn welcome_message(user: Option<&AuthResponse>) -> String {
    format!("Welcome back, {}!", display_name(user))
}

/// Up to two uppercase initials for the avatar badge.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() { "?".to_owned() } else { letters }
}

/// Dashboard page. Redirects to the sign-in view when no one is signed in.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    let profile_error = RwSignal::new(None::<String>);
    if auth.with_untracked(|s| s.session.is_signed_in()) {
        refresh(auth, profile_error, &config);
    }

    let user = move || auth.with(|s| s.session.get().cloned());

    let signout_config = config.clone();
    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        notify_server_sign_out(&signout_config);
        let effect = sign_out(&auth);
        apply_effect(effect, &navigate, toasts);
    };
    let on_sign_out_retry = on_sign_out.clone();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1 class="dashboard-header__title">"Dashboard"</h1>
                <div class="dashboard-header__user">
                    <span class="dashboard-avatar">
                        {move || initials(display_name(user().as_ref()))}
                    </span>
                    <div class="dashboard-header__identity">
                        <span class="dashboard-header__name">{move || display_name(user().as_ref()).to_owned()}</span>
                        <span class="dashboard-header__email">
                            {move || user().map(|u| u.email).unwrap_or_default()}
                        </span>
                    </div>
                    <button class="auth-button auth-button--secondary" type="button" on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </div>
            </header>
            <main class="dashboard-main">
                <div class="dashboard-error" role="alert" hidden=move || profile_error.with(Option::is_none)>
                    <p>"Error loading user data"</p>
                    <p class="dashboard-error__detail">{move || profile_error.get().unwrap_or_default()}</p>
                    <button class="auth-button auth-button--secondary" type="button" on:click=on_sign_out_retry>
                        "Sign Out"
                    </button>
                </div>
                <section class="dashboard-welcome">
                    <h2>{move || welcome_message(user().as_ref())}</h2>
                    <p>"You are signed in."</p>
                </section>
                <section class="dashboard-profile">
                    <h3>"Profile"</h3>
                    <dl>
                        <dt>"Name"</dt>
                        <dd>{move || user().map(|u| u.name).unwrap_or_default()}</dd>
                        <dt>"Email"</dt>
                        <dd>{move || user().map(|u| u.email).unwrap_or_default()}</dd>
                    </dl>
                </section>
            </main>
        </div>
    }
}

fn refresh(auth: RwSignal<AuthState>, profile_error: RwSignal<Option<String>>, config: &ClientConfig) {
    #[cfg(feature = "hydrate")]
    {
        let client = crate::net::http::BrowserClient::new(config.api_base_url.clone());
        let fallback = config.profile_error.clone();
        leptos::task::spawn_local(async move {
            let result = crate::state::auth::refresh_profile(&client, &auth, &fallback).await;
            profile_error.try_set(result.err());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, profile_error, config);
    }
}

/// Best-effort server sign-out when a sign-out path is configured.
///
/// The local session is cleared regardless of how this request ends.
fn notify_server_sign_out(config: &ClientConfig) {
    let Some(path) = config.signout_path.clone() else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        let client = crate::net::http::BrowserClient::new(config.api_base_url.clone());
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::sign_out(&client, &path).await {
                leptos::logging::warn!("server sign-out failed: {e}");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
