//! # portal-client
//!
//! Leptos + WASM frontend for the olympiad evaluation portal. The crate is
//! organized around the session and access-control core: a persisted
//! credential store, an HTTP pipeline that attaches the bearer token and
//! reacts to authentication failures, a session state machine, role-aware
//! route guards, and the role → landing-path resolver. Pages and components
//! are thin consumers of that core.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the browser build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
