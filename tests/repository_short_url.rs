mod common;

use chrono::{Duration, Utc};
use std::sync::Arc;
use short_url::domain::entities::NewShortUrl;
use short_url::domain::repositories::{ShortUrlRepository, StoreError};
use short_url::infrastructure::persistence::SqliteShortUrlRepository;

#[tokio::test]
async fn test_save_assigns_id_and_timestamp() {
    let repo = common::create_test_repository(common::test_pool().await).await;

    let before = Utc::now();
    let saved = repo
        .save(NewShortUrl::new("https://example.com", "abcD1234"))
        .await
        .unwrap();
    let after = Utc::now();

    assert!(saved.id > 0);
    assert_eq!(saved.original_url, "https://example.com");
    assert_eq!(saved.short_code, "abcD1234");
    let tolerance = Duration::seconds(1);
    assert!(saved.created_at >= before - tolerance);
    assert!(saved.created_at <= after + tolerance);
}

#[tokio::test]
async fn test_save_ids_increase() {
    let repo = common::create_test_repository(common::test_pool().await).await;

    let first = repo
        .save(NewShortUrl::new("https://example.com/1", "code0001"))
        .await
        .unwrap();
    let second = repo
        .save(NewShortUrl::new("https://example.com/2", "code0002"))
        .await
        .unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_save_same_url_twice_gives_two_records() {
    let repo = common::create_test_repository(common::test_pool().await).await;

    let first = repo
        .save(NewShortUrl::new("https://example.com", "code0001"))
        .await
        .unwrap();
    let second = repo
        .save(NewShortUrl::new("https://example.com", "code0002"))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_save_duplicate_code() {
    let repo = common::create_test_repository(common::test_pool().await).await;

    repo.save(NewShortUrl::new("https://example.com/a", "taken123"))
        .await
        .unwrap();

    let result = repo
        .save(NewShortUrl::new("https://example.com/b", "taken123"))
        .await;

    match result {
        Err(StoreError::DuplicateCode { code }) => assert_eq!(code, "taken123"),
        other => panic!("expected DuplicateCode, got {other:?}"),
    }

    let kept = repo.find_by_code("taken123").await.unwrap();
    assert_eq!(kept.original_url, "https://example.com/a");
}

#[tokio::test]
async fn test_find_by_code() {
    let pool = common::test_pool().await;
    let repo = common::create_test_repository(pool.clone()).await;
    common::insert_short_url(&pool, "abc12345", "https://example.com/target").await;

    let found = repo.find_by_code("abc12345").await.unwrap();

    assert_eq!(found.short_code, "abc12345");
    assert_eq!(found.original_url, "https://example.com/target");
}

#[tokio::test]
async fn test_find_by_code_is_case_sensitive() {
    let pool = common::test_pool().await;
    let repo = common::create_test_repository(pool.clone()).await;
    common::insert_short_url(&pool, "AbCdEfGh", "https://example.com").await;

    let result = repo.find_by_code("abcdefgh").await;

    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}

#[tokio::test]
async fn test_find_by_code_not_found() {
    let repo = common::create_test_repository(common::test_pool().await).await;

    let result = repo.find_by_code("notfound").await;

    match result {
        Err(StoreError::NotFound { code }) => assert_eq!(code, "notfound"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_operations_fail_when_store_closed() {
    let pool = common::test_pool().await;
    let repo = common::create_test_repository(pool.clone()).await;
    pool.close().await;

    let find = repo.find_by_code("abc12345").await;
    assert!(matches!(find, Err(StoreError::Unavailable(_))));

    let save = repo
        .save(NewShortUrl::new("https://example.com", "abc12345"))
        .await;
    assert!(matches!(save, Err(StoreError::Unavailable(_))));

    assert!(repo.ping().await.is_err());
}

#[tokio::test]
async fn test_init_is_idempotent_and_keeps_data() {
    let pool = common::test_pool().await;
    let repo = common::create_test_repository(pool.clone()).await;
    repo.save(NewShortUrl::new("https://example.com", "keep1234"))
        .await
        .unwrap();

    let reopened = SqliteShortUrlRepository::init(Arc::clone(&pool))
        .await
        .unwrap();

    let found = reopened.find_by_code("keep1234").await.unwrap();
    assert_eq!(found.original_url, "https://example.com");
}

#[tokio::test]
async fn test_init_fails_on_closed_pool() {
    let pool = common::test_pool().await;
    pool.close().await;

    let result = SqliteShortUrlRepository::init(pool).await;

    assert!(matches!(result, Err(StoreError::Unavailable(_))));
}

#[tokio::test]
async fn test_ping() {
    let repo = common::create_test_repository(common::test_pool().await).await;
    assert!(repo.ping().await.is_ok());
}
