mod common;

use linkcut::error::AppError;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_shorten_is_idempotent(pool: SqlitePool) {
    let service = common::create_test_service(pool.clone());

    let first = service.shorten("https://example.com/page").await.unwrap();
    let second = service.shorten("https://example.com/page").await.unwrap();

    assert_eq!(first.short_code, second.short_code);
    assert_eq!(first.id, second.id);
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_resolve_round_trip(pool: SqlitePool) {
    let service = common::create_test_service(pool);

    let link = service.shorten("https://example.com/a?b=c").await.unwrap();
    let resolved = service.resolve(&link.short_code).await.unwrap();

    assert_eq!(resolved.original_url, "https://example.com/a?b=c");
}

#[sqlx::test]
async fn test_shorten_normalizes_scheme(pool: SqlitePool) {
    let service = common::create_test_service(pool);

    let link = service.shorten("example.com/x").await.unwrap();
    assert_eq!(link.original_url, "https://example.com/x");

    let resolved = service.resolve(&link.short_code).await.unwrap();
    assert_eq!(resolved.original_url, "https://example.com/x");
}

#[sqlx::test]
async fn test_shorten_generates_six_char_codes(pool: SqlitePool) {
    let service = common::create_test_service(pool);

    let link = service.shorten("https://example.com").await.unwrap();

    assert_eq!(link.short_code.len(), 6);
    assert!(link.short_code.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[sqlx::test]
async fn test_click_counter_is_monotonic(pool: SqlitePool) {
    let service = common::create_test_service(pool.clone());

    let a = service.shorten("https://a.example.com").await.unwrap();
    let b = service.shorten("https://b.example.com").await.unwrap();

    // Interleave resolutions of two codes; each counter only reflects its own.
    for _ in 0..5 {
        service.resolve(&a.short_code).await.unwrap();
        service.resolve(&b.short_code).await.unwrap();
    }
    service.resolve(&a.short_code).await.unwrap();

    assert_eq!(common::click_count(&pool, &a.short_code).await, 6);
    assert_eq!(common::click_count(&pool, &b.short_code).await, 5);

    let stats = service.stats(&a.short_code).await.unwrap();
    assert_eq!(stats.click_count, 6);
}

#[sqlx::test]
async fn test_stats_does_not_mutate_counter(pool: SqlitePool) {
    let service = common::create_test_service(pool.clone());

    let link = service.shorten("https://example.com").await.unwrap();

    service.stats(&link.short_code).await.unwrap();
    service.stats(&link.short_code).await.unwrap();

    assert_eq!(common::click_count(&pool, &link.short_code).await, 0);
}

#[sqlx::test]
async fn test_shorten_rejects_empty_input(pool: SqlitePool) {
    let service = common::create_test_service(pool.clone());

    let result = service.shorten("").await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::Validation { .. }
    ));
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_rejects_malformed_input(pool: SqlitePool) {
    let service = common::create_test_service(pool.clone());

    let result = service.shorten("not a url").await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::Validation { .. }
    ));
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_resolve_unknown_code(pool: SqlitePool) {
    let service = common::create_test_service(pool);

    let result = service.resolve("zzzzzz").await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_stats_unknown_code(pool: SqlitePool) {
    let service = common::create_test_service(pool);

    let result = service.stats("zzzzzz").await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_recent_returns_newest_first(pool: SqlitePool) {
    let service = common::create_test_service(pool);

    let mut codes = Vec::new();
    for i in 1..=5 {
        let link = service
            .shorten(&format!("https://example.com/{i}"))
            .await
            .unwrap();
        codes.push(link.short_code);
    }

    let recent = service.recent(3).await.unwrap();

    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].short_code, codes[4]);
    assert_eq!(recent[1].short_code, codes[3]);
    assert_eq!(recent[2].short_code, codes[2]);
}

#[sqlx::test]
async fn test_concurrent_shortens_of_same_url(pool: SqlitePool) {
    let service = common::create_test_service(pool.clone());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.shorten("https://example.com/contested").await
        }));
    }

    let mut codes = Vec::new();
    for handle in handles {
        let link = handle.await.unwrap().unwrap();
        codes.push(link.short_code);
    }

    // Exactly one record; every caller observed the same code.
    assert_eq!(common::count_links(&pool).await, 1);
    assert!(codes.iter().all(|c| c == &codes[0]));
}
