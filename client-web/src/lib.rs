//! # client-web
//!
//! Leptos + WASM frontend for the classroom seating-chart tool.
//! Replaces the vanilla-JS `classroom.js` layer with a Rust-native UI.
//!
//! This crate contains pages, components, application state, and the REST
//! helpers that talk to the seating server. All seat-grid logic — selection,
//! the drag session, batch-move planning, preview feedback — lives in the
//! `chart` crate; components here only wire DOM events into
//! `chart::engine::ChartCore` and submit the resulting actions.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
