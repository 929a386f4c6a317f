//! # client
//!
//! Leptos + WASM frontend for nearU, a campus events and places map with an
//! XP leaderboard.
//!
//! This crate contains pages, components, the embedded dataset, application
//! state, and browser utilities. State holders are plain Rust and tested
//! natively; browser glue (Leaflet, localStorage, timers) is gated behind the
//! `hydrate` feature.

pub mod app;
pub mod components;
pub mod consts;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
