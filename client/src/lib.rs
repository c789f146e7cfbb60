#![recursion_limit = "256"]
//! # client
//!
//! Leptos + WASM frontend for the recipe-sharing application.
//!
//! This crate contains pages, components, application state, the REST API
//! client, and browser utilities. All persistent data lives behind the
//! external `/api` backend; the only browser-side storage is the cached
//! session user and the theme preference. It integrates with the `cropper`
//! crate for the avatar crop-and-upload flow on the account page.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed; nothing else to do.
    }
    leptos::mount::hydrate_body(app::App);
}
