//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health probe, the compiled WASM/CSS bundle under `/pkg`, and the
//! Leptos SSR routes under a single Axum router. Every rendered page embeds
//! the public client configuration so the browser picks up runtime endpoints.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use coursehub_client::app::{App, shell};
use coursehub_client::config::ClientConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Health probe routes; no state and no Leptos configuration required.
pub fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router: health probe, static bundle, and SSR pages.
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] if the Leptos configuration cannot be loaded
/// (missing or malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(client_config: &ClientConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let render_shell = {
        let opts = leptos_options.clone();
        let client = client_config.clone();
        move || shell(opts.clone(), client.clone())
    };

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, render_shell)
        .with_state(leptos_options.clone());

    // Compiled WASM, JS glue, and CSS live under the site root's /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(health_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
