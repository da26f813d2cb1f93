//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports service liveness and the running version.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// Always answers 200; a process that can serve this route is considered
/// alive. Store connectivity problems surface on the data routes instead.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
