//! Sign-in page: email + password form.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
use crate::config::ClientConfig;
use crate::net::types::SigninRequest;
use crate::routes::AppRoute;
use crate::state::auth::{AuthAction, AuthState};
use crate::state::toast::ToastState;
use crate::util::auth::install_signed_in_redirect;
use crate::util::validation::{FieldErrors, check};

const FORM: &str = "signin";

/// Build the request from raw input and run the sign-in rules on it.
///
/// # Errors
///
/// Returns per-field messages when the input is not submittable.
pub fn validate_signin_input(email: &str, password: &str) -> Result<SigninRequest, FieldErrors> {
    let request = SigninRequest::from_input(email, password);
    check(&request)?;
    Ok(request)
}

pub fn submit_label(pending: bool) -> &'static str {
    if pending { "Signing in..." } else { "Sign In" }
}

#[component]
pub fn SigninPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    install_signed_in_redirect(auth, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let pending = move || auth.with(|s| s.mutation(AuthAction::SignIn).is_pending());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(AuthState::is_busy) {
            return;
        }
        match validate_signin_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => {
                errors.set(FieldErrors::default());
                dispatch(request, auth, toasts, &config, navigate.clone());
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <TextField
                        form=FORM
                        name="email"
                        label="Email address"
                        input_type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        value=email
                        errors=errors
                    />
                    <TextField
                        form=FORM
                        name="password"
                        label="Password"
                        input_type="password"
                        autocomplete="current-password"
                        value=password
                        errors=errors
                    />
                    <button class="auth-button" type="submit" disabled=pending>
                        {move || submit_label(pending())}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href=AppRoute::Signup.path()>"Create one"</a>
                </p>
            </div>
        </div>
    }
}

fn dispatch<F>(
    request: SigninRequest,
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    config: &ClientConfig,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let client = crate::net::http::BrowserClient::new(config.api_base_url.clone());
        let fallback = config.error_fallback(AuthAction::SignIn).to_owned();
        leptos::task::spawn_local(async move {
            let effect = crate::state::auth::submit_sign_in(&client, &auth, &request, &fallback).await;
            if let Some(effect) = effect.and_then(crate::util::auth::unless_redirected) {
                crate::util::auth::apply_effect(effect, &navigate, toasts);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, auth, toasts, config, navigate);
    }
}
