//! # rustle-client
//!
//! Leptos + WASM frontend that tracks the visitor's backend session, gates
//! routes on it, and funnels every backend call through one dispatcher.
//!
//! This crate contains the session store, the route guards, the REST
//! dispatcher and its transport seam, plus the small set of pages that drive
//! the login and logout flows.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// Browser entry point: hydrates the server-rendered [`app::App`].
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
