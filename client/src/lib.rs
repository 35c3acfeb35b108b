//! # client
//!
//! Leptos + WASM frontend for the askwall social Q&A application.
//!
//! This crate contains pages, components, application state, and the REST
//! API layer. It builds natively without the `csr` feature (network calls
//! become stubs) so shared logic like the reaction state machine stays
//! testable off-browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mount the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
