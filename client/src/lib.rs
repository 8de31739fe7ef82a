//! # client
//!
//! Leptos frontend for the ThermoVision AI site: the marketing pages, the
//! contact and demo forms, and the thermal image analyzer. Rendered on the
//! server through `leptos_axum` and hydrated in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point; hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    let _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
