//! # synthiot-client
//!
//! Leptos + WASM frontend for the SynthIoT synthetic-sensor-data service.
//! Provides email/password authentication against the identity provider,
//! a project list with creation, and a prompt-driven CSV generation view
//! that downloads the generated artifact from the backend.
//!
//! This crate contains pages, components, application state, the session
//! manager, and the REST/identity network layers. Browser-only IO is gated
//! behind the `hydrate` feature with SSR stubs.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook, wire up console logging, and
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
