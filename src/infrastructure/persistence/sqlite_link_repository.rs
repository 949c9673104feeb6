//! SQLite implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::{AppError, map_sqlx_error};
use crate::utils::db_error::{is_unique_violation_on_code, is_unique_violation_on_url};

/// SQLite repository for link storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. Uniqueness of
/// `short_code` and `original_url` is enforced by unique indexes, so a
/// check-then-insert race can never commit duplicates; the losing insert
/// surfaces as an [`InsertOutcome`] variant instead.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    short_code: String,
    original_url: String,
    created_at: DateTime<Utc>,
    click_count: i64,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.short_code,
            row.original_url,
            row.created_at,
            row.click_count,
        )
    }
}

const LINK_COLUMNS: &str = "id, short_code, original_url, created_at, click_count";

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let result = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (short_code, original_url, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, short_code, original_url, created_at, click_count
            "#,
        )
        .bind(&new_link.short_code)
        .bind(&new_link.original_url)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(InsertOutcome::Created(row.into())),
            Err(e) if is_unique_violation_on_code(&e) => Ok(InsertOutcome::CodeExists),
            Err(e) if is_unique_violation_on_url(&e) => Ok(InsertOutcome::UrlExists),
            Err(e) => Err(map_sqlx_error(e)),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE short_code = ?1"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE original_url = ?1"
        ))
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn record_visit(&self, code: &str) -> Result<Option<Link>, AppError> {
        // Single read-modify-write statement; concurrent visits to the same
        // code are serialized by the database and never lose increments.
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE links
            SET click_count = click_count + 1
            WHERE short_code = ?1
            RETURNING id, short_code, original_url, created_at, click_count
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        // id tiebreak keeps the ordering strict for records created within
        // the same timestamp granule.
        let rows = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links ORDER BY created_at DESC, id DESC LIMIT ?1"
        ))
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
