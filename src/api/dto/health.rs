//! DTO for the health check endpoint.

use serde::Serialize;

/// Liveness response carrying the running crate version.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: String,
}
