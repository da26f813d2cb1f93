#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tinylink::domain::entities::{Link, NewLink};
use tinylink::domain::repositories::LinkRepository;
use tinylink::error::AppError;
use tinylink::prelude::LinkService;
use tinylink::state::AppState;

/// In-memory [`LinkRepository`] backing handler tests.
///
/// Mirrors the store semantics the service relies on: uniqueness on
/// `code`, newest-first listing, and relative click increments. Handler
/// tests run against the real service stack without a database.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    rows: Mutex<Vec<Link>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a row directly, bypassing service validation.
    pub fn seed(&self, code: &str, url: &str) {
        self.rows.lock().unwrap().push(Link {
            code: code.to_string(),
            url: url.to_string(),
            clicks: 0,
            created_at: Utc::now(),
            last_clicked: None,
        });
    }

    pub fn get(&self, code: &str) -> Option<Link> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.code == code)
            .cloned()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|l| l.code == new_link.code) {
            return Err(AppError::conflict(
                "code already exists",
                json!({ "code": new_link.code }),
            ));
        }

        let link = Link {
            code: new_link.code,
            url: new_link.url,
            clicks: 0,
            created_at: Utc::now(),
            last_clicked: None,
        };
        rows.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.get(code))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let rows = self.rows.lock().unwrap();

        // Insertion order stands in for created_at; reversed gives
        // newest first.
        Ok(rows.iter().rev().cloned().collect())
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|l| l.code != code);

        Ok(rows.len() < before)
    }

    async fn resolve_url(&self, code: &str) -> Result<Option<String>, AppError> {
        Ok(self.get(code).map(|l| l.url))
    }

    async fn record_click(&self, code: &str) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();

        if let Some(link) = rows.iter_mut().find(|l| l.code == code) {
            link.clicks += 1;
            link.last_clicked = Some(Utc::now());
        }

        Ok(())
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let service = Arc::new(LinkService::new(repo.clone()));

    (AppState::new(service), repo)
}
