//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A short link row as stored in the `links` table.
///
/// `code` is the primary key and immutable after creation, as is `url`.
/// `clicks` only ever grows, and only as a side effect of a successful
/// redirect resolution.
#[derive(Debug, Clone, FromRow)]
pub struct Link {
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked: Option<DateTime<Utc>>,
}

impl Link {
    /// Returns true if the link has been visited at least once.
    pub fn has_been_clicked(&self) -> bool {
        self.last_clicked.is_some()
    }
}

/// Input data for creating a new link.
///
/// The store assigns `clicks = 0`, `created_at = now()` and a null
/// `last_clicked` on insertion.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub url: String,
}
