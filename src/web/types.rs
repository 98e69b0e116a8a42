// src/web/types.rs
use crate::analysis::KeywordCatalog;
use chrono::{DateTime, Utc};
use rocket::serde::Serialize;
use std::sync::Arc;

/// Shared read-only server state: the catalog never changes after startup,
/// so concurrent requests need no coordination
pub struct AppState {
    pub catalog: Arc<KeywordCatalog>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(catalog: KeywordCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            started_at: Utc::now(),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl ErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            success: false,
            error,
            error_code,
            suggestions,
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: i64,
    pub catalog_entries: usize,
}
