//! Link lifecycle orchestration: creation, listing, deletion, redirect.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{
    GENERATED_CODE_LEN, fallback_code, generate_code, validate_custom_code,
};
use crate::utils::reserved::is_reserved_segment;
use crate::utils::url_check::validate_target_url;

/// Random draws before falling back to a time-derived code.
const MAX_GENERATION_ATTEMPTS: usize = 8;

/// Service for the full short link lifecycle.
///
/// Validates input, allocates collision-free codes, and orchestrates the
/// redirect-with-count operation. All persistence goes through the
/// injected [`LinkRepository`]; the service holds no link state between
/// calls, so there is nothing to invalidate.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// A custom code is trimmed and validated, then checked for
    /// availability before the insert; a blank custom code counts as
    /// absent. Without one, a fresh 6-character code is allocated.
    ///
    /// The availability pre-check only exists to give a clean conflict
    /// message. The primary-key constraint is the authoritative guard: an
    /// insert that loses the check-then-act race still comes back as
    /// [`AppError::Conflict`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is missing or not an
    /// absolute http(s) URL, or if the custom code is malformed.
    /// Returns [`AppError::Conflict`] if the code is already taken.
    pub async fn create_link(
        &self,
        url: Option<String>,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        let url = match url {
            Some(u) if !u.trim().is_empty() => u,
            _ => return Err(AppError::bad_request("url is required", json!({}))),
        };
        validate_target_url(&url)?;

        let custom = custom_code
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let code = if let Some(custom) = custom {
            validate_custom_code(&custom)?;

            if self.link_repository.find_by_code(&custom).await?.is_some() {
                return Err(AppError::conflict(
                    "code already exists",
                    json!({ "code": custom }),
                ));
            }

            custom
        } else {
            self.allocate_unique_code().await?
        };

        self.link_repository.insert(NewLink { code, url }).await
    }

    /// Lists every link, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Fetches a single link by code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("not found", json!({ "code": code })))
    }

    /// Deletes a link by code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row was affected.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if !self.link_repository.delete(code).await? {
            return Err(AppError::not_found("not found", json!({ "code": code })));
        }

        Ok(())
    }

    /// Resolves a short code to its target URL and records the visit.
    ///
    /// Reserved route segments are refused before the store is consulted.
    /// The URL read and the click update are two independent statements;
    /// the update is a relative increment keyed by code, so concurrent
    /// redirects cannot lose counts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ReservedPath`] for reserved segments (surfaced
    /// to clients as 404) and [`AppError::NotFound`] for unknown codes.
    pub async fn resolve_and_count(&self, code: &str) -> Result<String, AppError> {
        if is_reserved_segment(code) {
            return Err(AppError::reserved_path(
                "path is reserved",
                json!({ "code": code }),
            ));
        }

        let url = self
            .link_repository
            .resolve_url(code)
            .await?
            .ok_or_else(|| AppError::not_found("not found", json!({ "code": code })))?;

        self.link_repository.record_click(code).await?;

        Ok(url)
    }

    /// Allocates a code that is not currently in use.
    ///
    /// Draws random 6-character codes and checks each against the store.
    /// If every attempt collides (vanishingly unlikely in a 62^6 space),
    /// derives a code from the current time, which is re-checked against
    /// the store as well before giving up.
    async fn allocate_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code(GENERATED_CODE_LEN);

            if self.link_repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        let code = fallback_code(Utc::now().timestamp_millis());
        if self.link_repository.find_by_code(&code).await?.is_none() {
            return Ok(code);
        }

        Err(AppError::internal(
            "failed to allocate a unique code",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS + 1 }),
        ))
    }
}
