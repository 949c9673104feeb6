use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    /// Base address prepended to short codes when building full short URLs.
    pub base_url: String,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<SqliteLinkRepository>>, base_url: String) -> Self {
        Self {
            link_service,
            base_url,
        }
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
