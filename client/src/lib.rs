//! # client
//!
//! Leptos + WASM frontend for the flat rental application.
//!
//! This crate contains pages, components, application state, the REST
//! helpers with their tag-invalidated query cache, and the form validation
//! layer. It renders on the server with the `ssr` feature and hydrates in
//! the browser with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
