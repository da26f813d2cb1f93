//! Handlers for link management endpoints (create, list, stats, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::link::{CreateLinkRequest, Deleted, LinkCreated, LinkDto};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "code": "mycode1" }
/// ```
///
/// `code` is optional; when omitted (or blank) a 6-character code is
/// generated.
///
/// # Errors
///
/// Returns 400 for a missing/invalid URL or malformed custom code, and
/// 409 when the code is already taken.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkCreated>), AppError> {
    let link = state
        .link_service
        .create_link(payload.url, payload.code)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LinkCreated {
            code: link.code,
            url: link.url,
        }),
    ))
}

/// Lists all links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkDto>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkDto::from).collect()))
}

/// Returns a single link with its click stats.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 if the code is unknown.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkDto>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(LinkDto::from(link)))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Errors
///
/// Returns 404 if the code is unknown.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Deleted>, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(Json(Deleted { ok: true }))
}
