//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Matches any single path segment not claimed by a literal route. The
/// service refuses reserved segments before touching the store, so the
/// route cannot leak lookups for `/api`, `/healthz`, and friends even if
/// route registration order changes.
///
/// On success the visit is counted (clicks + 1, `last_clicked = now()`)
/// and a `302 Found` is returned with the target in the `Location`
/// header.
///
/// # Errors
///
/// Returns 404 for unknown codes and reserved segments.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.link_service.resolve_and_count(&code).await?;

    debug!(code, target = %url, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
}
