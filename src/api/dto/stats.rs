//! DTOs for stats and recent-links endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;
use crate::state::AppState;

/// Snapshot of a link record, including the constructed short URL.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
    pub short_url: String,
}

impl StatsResponse {
    pub fn from_link(link: Link, state: &AppState) -> Self {
        let short_url = state.short_url(&link.short_code);
        Self {
            original_url: link.original_url,
            short_code: link.short_code,
            created_at: link.created_at,
            click_count: link.click_count,
            short_url,
        }
    }
}
