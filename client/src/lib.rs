//! # portal-client
//!
//! Leptos single-page client for registering, signing in, and editing a
//! profile against a cookie-session backend.
//!
//! The session itself (state, ordering, error mapping) lives in
//! `portal-session`; this crate supplies the browser gateway, the
//! signal-backed store the views observe, and the views themselves.
//! Browser-only code is gated behind the `csr` feature so the pure view
//! helpers build and test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
