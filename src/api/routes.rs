//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes nested under `/api/links`.
///
/// # Endpoints
///
/// - `POST   /`        - Create a short link (custom or generated code)
/// - `GET    /`        - List all links, newest first
/// - `GET    /{code}`  - Stats for a single link
/// - `DELETE /{code}`  - Delete a link
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_links_handler).post(create_link_handler))
        .route("/{code}", get(get_link_handler).delete(delete_link_handler))
}
