//! Top-level router combining the API, fixed pages, and the redirect.
//!
//! # Route Structure
//!
//! - `/api/links/*`     - REST API
//! - `GET /healthz`     - Liveness check
//! - `GET /`            - Dashboard page
//! - `GET /code/{code}` - Stats page for one link
//! - `/assets/*`        - Static assets (JS/CSS)
//! - `GET /{code}`      - Short link redirect (catch-all single segment)
//!
//! A short code is syntactically indistinguishable from any other single
//! path segment, so every fixed first segment is listed in
//! [`crate::utils::reserved::RESERVED_SEGMENTS`] and refused by redirect
//! resolution. The router matches literal segments ahead of the `{code}`
//! capture regardless of registration order; the reserved-word check
//! makes that precedence an explicit rule instead of a routing accident.

use axum::{Router, routing::get};
use tower::Layer as _;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/healthz", get(health_handler))
        .nest("/api/links", api::routes::link_routes())
        .route_service("/", ServeFile::new("public/index.html"))
        .route_service("/code/{code}", ServeFile::new("public/stats.html"))
        .nest_service("/assets", ServeDir::new("public/assets"))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
