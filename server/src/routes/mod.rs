//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the host endpoints (backend proxy, image upload relay,
//! session cookie) and stitches them with Leptos SSR rendering under a single
//! Axum router. WASM and CSS bundles are served from `/pkg`.

pub mod auth;
pub mod proxy;
pub mod upload;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Host API routes shared by the SSR app and the hydrated client.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .route("/upload/image", upload::route())
        .route("/auth/token", post(auth::set_token))
        .route("/auth/logout", post(auth::logout))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application router. Falls back to the API routes alone when the
/// Leptos configuration cannot be loaded.
pub fn app(state: AppState) -> Router {
    let router = match leptos_app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "leptos app unavailable; serving API routes only");
            api_routes(state)
        }
    };
    router.layer(CompressionLayer::new()).layer(TraceLayer::new_for_http())
}

/// API routes + Leptos SSR + `/pkg` static assets.
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

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
