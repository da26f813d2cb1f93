//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// The store exclusively owns persisted rows; callers never hold a cached
/// copy. Every method is a single short statement with no transaction
/// spanning calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken (the
    /// primary-key constraint is the authoritative uniqueness guard) and
    /// [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links, newest first. Unbounded.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Deletes a link. Returns `true` if a row was removed.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Looks up only the target URL for a code.
    async fn resolve_url(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Applies one visit: `clicks = clicks + 1`, `last_clicked = now()`.
    ///
    /// The increment is relative, so concurrent visits to the same code
    /// never lose counts.
    async fn record_click(&self, code: &str) -> Result<(), AppError>;
}
