//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request body for creating a short link.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    /// Target URL. Required; must be an absolute http(s) URL.
    pub url: Option<String>,
    /// Optional custom short code. Blank counts as absent.
    pub code: Option<String>,
}

/// Response body returned after a successful creation.
#[derive(Debug, Serialize)]
pub struct LinkCreated {
    pub code: String,
    pub url: String,
}

/// Full link representation for listing and stats endpoints.
#[derive(Debug, Serialize)]
pub struct LinkDto {
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked: Option<DateTime<Utc>>,
}

impl From<Link> for LinkDto {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            url: link.url,
            clicks: link.clicks,
            created_at: link.created_at,
            last_clicked: link.last_clicked,
        }
    }
}

/// Response body for deletions.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub ok: bool,
}
