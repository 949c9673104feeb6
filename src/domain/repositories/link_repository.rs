//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an insert attempt.
///
/// Unique-constraint violations are part of the normal control flow of link
/// creation (code collisions and concurrent shortens of the same URL), so the
/// repository reports them as data rather than errors. The service decides
/// whether to retry with a fresh code or to re-read the winning record.
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// The record was committed.
    Created(Link),
    /// Another record already holds this short code.
    CodeExists,
    /// Another record already holds this original URL.
    UrlExists,
}

/// Repository interface for the link store.
///
/// Owns all persistent state: the mapping from short code to original URL
/// and the per-link click counter.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link record.
    ///
    /// Unique-constraint violations on `short_code` or `original_url` are
    /// reported via [`InsertOutcome`], not as errors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<InsertOutcome, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its original URL (exact match on the normalized form).
    ///
    /// Used to deduplicate repeated shortens of the same URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError>;

    /// Increments the click counter for a code and returns the updated record.
    ///
    /// The increment is a single atomic read-modify-write against the store,
    /// so concurrent resolutions of the same code never lose updates.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` with the post-increment record
    /// - `Ok(None)` if the code does not exist (no state change)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_visit(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists the most recently created links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
