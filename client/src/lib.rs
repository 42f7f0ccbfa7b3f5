//! # client
//!
//! Leptos + WASM frontend for account sign-up, sign-in and the post-login
//! dashboard.
//!
//! The crate holds the wire types and request layer (`net`), the auth state
//! machine and session store (`state`), validation and error helpers (`util`),
//! and the route-level pages and shared components that render them. All
//! non-view logic compiles without the `hydrate`/`ssr` features so it can be
//! unit-tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
