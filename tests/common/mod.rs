#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use sqlx::SqlitePool;
use std::sync::Arc;
use short_url::application::services::ShorteningService;
use short_url::infrastructure::persistence::{SqliteShortUrlRepository, sqlite};
use short_url::routes::router;
use short_url::state::AppState;
use short_url::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

pub const BASE_URL: &str = "http://localhost:8080";

/// Always returns the same code, for provoking collisions.
pub struct FixedCodeGenerator(pub &'static str);

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

pub async fn test_pool() -> Arc<SqlitePool> {
    Arc::new(sqlite::connect_in_memory().await.unwrap())
}

pub async fn create_test_repository(pool: Arc<SqlitePool>) -> SqliteShortUrlRepository {
    SqliteShortUrlRepository::init(pool).await.unwrap()
}

pub async fn insert_short_url(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (original_url, short_code, created_at) VALUES (?, ?, ?)")
        .bind(url)
        .bind(code)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_service_with_generator(
    pool: Arc<SqlitePool>,
    generator: Arc<dyn CodeGenerator>,
) -> ShorteningService<SqliteShortUrlRepository> {
    let repository = create_test_repository(pool).await;
    ShorteningService::new(Arc::new(repository), generator, BASE_URL)
}

pub async fn create_test_service(pool: Arc<SqlitePool>) -> ShorteningService<SqliteShortUrlRepository> {
    create_test_service_with_generator(pool, Arc::new(RandomCodeGenerator::new())).await
}

pub async fn create_test_state_with_generator(
    pool: Arc<SqlitePool>,
    generator: Arc<dyn CodeGenerator>,
) -> AppState {
    let service = create_test_service_with_generator(pool, generator).await;
    AppState::new(Arc::new(service))
}

pub async fn create_test_state(pool: Arc<SqlitePool>) -> AppState {
    create_test_state_with_generator(pool, Arc::new(RandomCodeGenerator::new())).await
}

pub fn test_server(state: AppState) -> TestServer {
    let app: Router = router(state);
    TestServer::new(app).unwrap()
}
