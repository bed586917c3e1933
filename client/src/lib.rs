//! # coursehub-client
//!
//! Leptos + WASM frontend for the CourseHub learning site: public marketing
//! pages plus course content gated behind a hosted identity provider.
//!
//! This crate contains pages, components, application state, field
//! validators, the identity provider adapter, and the course API client. It is
//! built with `hydrate` for the browser bundle and with `ssr` when linked into
//! the host server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
