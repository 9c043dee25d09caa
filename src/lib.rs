//! # docpilot-ui
//!
//! Leptos + WASM front-end for the Docpilot document Q&A service. Replaces
//! the service's hand-written JavaScript page with a Rust-native UI layer.
//!
//! This crate contains the page, panel components, application state, the
//! wire types, and the HTTP API client. Pure state and parsing logic
//! compiles and tests natively; browser integration (requests, localStorage,
//! mounting) sits behind the `web` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// mount the application onto `<body>`.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
