//! # reckon-client
//!
//! Leptos + WASM frontend shell for the Reckon application: the route table,
//! the authentication-aware navigation bar, and the page components behind
//! each route.
//!
//! This crate contains pages, components, application state, the network
//! types, and the REST helpers for the `/api/v1` backend. Session state is
//! provided once via context at the root and read reactively everywhere else.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach to the server-rendered DOM and start reacting.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating reckon-client");

    leptos::mount::hydrate_body(App);
}
