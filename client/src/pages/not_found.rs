//! Fallback page for unknown routes.

#[cfg(test)]
#[path = "not_found_test.rs"]
mod not_found_test;

use leptos::prelude::*;

use crate::routes::AppRoute;

/// Browser actions offered next to the link back to sign-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotFoundAction {
    Refresh,
    GoBack,
}

impl NotFoundAction {
    pub const ALL: [Self; 2] = [Self::Refresh, Self::GoBack];

    pub fn label(self) -> &'static str {
        match self {
            Self::Refresh => "Refresh",
            Self::GoBack => "Go Back",
        }
    }

    fn run(self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let result = match self {
                Self::Refresh => window.location().reload(),
                Self::GoBack => window.history().and_then(|h| h.back()),
            };
            if let Err(e) = result {
                leptos::logging::warn!("{} failed: {e:?}", self.label());
            }
        }
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let buttons = NotFoundAction::ALL
        .into_iter()
        .map(|action| {
            view! {
                <button
                    class="auth-button auth-button--secondary"
                    type="button"
                    on:click=move |_| action.run()
                >
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="auth-page">
            <div class="auth-card not-found">
                <h1 class="not-found__code">"404"</h1>
                <p class="auth-card__subtitle">"The page you are looking for does not exist."</p>
                <div class="not-found__actions">
                    {buttons}
                    <a class="auth-button" href=AppRoute::Signin.path()>"Go to Sign In"</a>
                </div>
            </div>
        </div>
    }
}
