//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::config::ClientConfig;
use crate::pages::{dashboard::DashboardPage, not_found::NotFoundPage, signin::SigninPage, signup::SignupPage};
use crate::routes::AppRoute;
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, toast and config contexts and sets up routing.
/// The session starts empty on every load.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(AuthState::default()));
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(ClientConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/authdash.css"/>
        <Title text="Authdash"/>

        <Router>
            <main class="app">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=SigninPage/>
                    <Route path=StaticSegment(AppRoute::Signin.segment()) view=SigninPage/>
                    <Route path=StaticSegment(AppRoute::Signup.segment()) view=SignupPage/>
                    <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=DashboardPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
