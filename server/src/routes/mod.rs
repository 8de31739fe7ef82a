//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the analysis API and stitches it with Leptos SSR
//! rendering under a single Axum router. Every page route, including the
//! dashboard at `/analyze` and `/analyze/:id`, is rendered by the client
//! crate; only `POST` requests on `/analyze` reach the upload handler.

pub mod analyze;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Multipart framing allowance on top of the file size limit.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

fn upload_body_limit() -> usize {
    usize::try_from(vision::MAX_UPLOAD_BYTES).unwrap_or(usize::MAX) + MULTIPART_OVERHEAD_BYTES
}

/// API routes: upload handlers, report lookup and health check.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/analyze", post(analyze::analyze_form))
        .route("/api/analyze", post(analyze::analyze_json))
        .route("/api/analyses/{id}", get(analyze::get_report))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(upload_body_limit()))
        .layer(cors)
        .with_state(state)
}

/// API routes merged with the Leptos SSR site and its static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS bundles from the site root.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let site = api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));
    Ok(site_layers(site))
}

/// Gzip for clients that accept it, plus request tracing.
fn site_layers(router: Router) -> Router {
    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
