//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL mapping with its usage counter.
///
/// Records are created exactly once per normalized URL and are never deleted;
/// the only mutation after insertion is the `click_count` increment performed
/// by the resolve operation.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        click_count: i64,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            created_at,
            click_count,
        }
    }
}

/// Input data for creating a new link.
///
/// `original_url` must already be normalized; the repository trusts its input.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
}
