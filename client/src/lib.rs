//! # client
//!
//! Leptos + WASM frontend for Garlip account authentication: login, signup,
//! account settings and password update pages.
//!
//! Pages keep form state locally and talk to the backend through the
//! gateway's `/api` proxy. Request/response handling lives in `util` and
//! `state` as plain Rust so it can be unit-tested without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
