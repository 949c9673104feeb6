//! Link creation, resolution, and statistics service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::{UrlValidationError, normalize_url};
use serde_json::json;

/// Maximum code generation attempts before giving up.
///
/// At a 62^6 keyspace a single retry is already rare; exhausting the budget
/// means the table is pathologically full or the store is misbehaving.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Default number of records returned by [`LinkService::recent`].
pub const DEFAULT_RECENT_LIMIT: i64 = 10;

/// Service for creating, resolving, and inspecting shortened links.
///
/// Handles URL normalization, collision-free code generation, and
/// deduplication. All persistent state lives behind the injected
/// [`LinkRepository`]; the service itself is stateless.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Shortens a URL, creating a record on first submission.
    ///
    /// # Idempotence
    ///
    /// If the normalized URL has been shortened before, the existing record
    /// is returned unchanged; no new record is created and no counter moves.
    ///
    /// # Code Generation
    ///
    /// Draws random 6-character alphanumeric codes and inserts, retrying on
    /// short-code collision up to [`MAX_CODE_ATTEMPTS`] times. When a
    /// concurrent request wins the race for the same URL, the winning record
    /// is re-read and returned; neither conflict kind surfaces to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the input is empty or does not
    /// normalize into a scheme plus host.
    /// Returns [`AppError::Internal`] on database errors or attempt exhaustion.
    pub async fn shorten(&self, raw_url: &str) -> Result<Link, AppError> {
        let normalized_url = normalize_url(raw_url).map_err(|e| {
            let field = match e {
                UrlValidationError::Empty => json!({ "field": "url" }),
                UrlValidationError::InvalidFormat => json!({ "field": "url", "value": raw_url }),
            };
            AppError::bad_request(e.to_string(), field)
        })?;

        if let Some(existing_link) = self.repository.find_by_original_url(&normalized_url).await? {
            return Ok(existing_link);
        }

        for attempt in 0..MAX_CODE_ATTEMPTS {
            let new_link = NewLink {
                short_code: generate_code(),
                original_url: normalized_url.clone(),
            };

            match self.repository.insert(new_link).await? {
                InsertOutcome::Created(link) => return Ok(link),
                InsertOutcome::CodeExists => {
                    tracing::warn!(attempt, "short code collision, retrying");
                    continue;
                }
                InsertOutcome::UrlExists => {
                    // A concurrent shorten of the same URL committed first;
                    // return its record.
                    if let Some(link) =
                        self.repository.find_by_original_url(&normalized_url).await?
                    {
                        return Ok(link);
                    }
                    continue;
                }
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Resolves a short code to its record, counting the visit.
    ///
    /// The counter increment and the URL read are one atomic operation
    /// against the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .record_visit(code)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown code", json!({ "code": code })))
    }

    /// Returns a read-only snapshot of a link's record.
    ///
    /// Does not mutate the click counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn stats(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown code", json!({ "code": code })))
    }

    /// Lists the most recently created links, newest first, capped at `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn recent(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        self.repository.list_recent(limit).await
    }

    /// Checks that the underlying store is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.ping().await.is_ok()
    }
}
