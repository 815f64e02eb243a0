//! # vortex-client
//!
//! Leptos + WASM frontend for the Vortex marketing site and dashboard shell.
//!
//! This crate contains pages, components, the credential submission flow, the
//! cookie-backed session store and the dashboard route guard. The server
//! crate renders it with the `ssr` feature; the browser bundle is built with
//! `hydrate`.

// The dashboard view type nests deeper than the default limit under `hydrate`.
#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: attach the client app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
