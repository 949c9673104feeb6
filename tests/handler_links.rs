mod common;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use axum_test::TestServer;
use linkcut::api::handlers::{redirect_handler, shorten_handler};
use serde_json::json;
use sqlx::SqlitePool;

fn test_app(state: linkcut::AppState) -> Router {
    Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_shorten_success(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["original_url"], "https://example.com/page");
    let code = body["short_code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert_eq!(
        body["short_url"],
        format!("{}/{}", common::TEST_BASE_URL, code)
    );
}

#[sqlx::test]
async fn test_shorten_normalizes_input(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "example.com/x" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["original_url"], "https://example.com/x");
}

#[sqlx::test]
async fn test_shorten_is_idempotent(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["short_code"], second["short_code"]);
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_empty_url(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.post("/api/shorten").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "URL is required");
}

#[sqlx::test]
async fn test_shorten_malformed_url(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "Invalid URL format");
}

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    common::create_test_link(&pool, "abc123", "https://example.com/target").await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "https://example.com/target"
    );

    assert_eq!(common::click_count(&pool, "abc123").await, 1);
}

#[sqlx::test]
async fn test_redirect_counts_every_visit(pool: SqlitePool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    for _ in 0..3 {
        server.get("/abc123").await;
    }

    assert_eq!(common::click_count(&pool, "abc123").await, 3);
}

#[sqlx::test]
async fn test_redirect_unknown_code(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.get("/zzzzzz").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}
