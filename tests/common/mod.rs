#![allow(dead_code)]

use chrono::Utc;
use linkcut::application::services::LinkService;
use linkcut::infrastructure::persistence::SqliteLinkRepository;
use linkcut::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

pub fn create_test_service(pool: SqlitePool) -> Arc<LinkService<SqliteLinkRepository>> {
    let repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    Arc::new(LinkService::new(repository))
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(create_test_service(pool), TEST_BASE_URL.to_string())
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (short_code, original_url, created_at) VALUES (?1, ?2, ?3)")
        .bind(code)
        .bind(url)
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn click_count(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM links WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
