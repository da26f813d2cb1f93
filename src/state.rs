//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Handle bundle constructed once at startup in [`crate::server::run`]
/// and cloned into each request. The store connection pool lives inside
/// the service's repository; nothing is re-acquired per request.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}
