//! SQLite implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::sqlite;
use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::{ShortUrlRepository, StoreError};
use crate::utils::db_error::is_unique_violation_on_code;

#[derive(sqlx::FromRow)]
struct ShortUrlRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(row: ShortUrlRow) -> Self {
        ShortUrl::new(row.id, row.original_url, row.short_code, row.created_at)
    }
}

/// SQLite repository for short URL storage and retrieval.
///
/// All statements use bound parameters.
pub struct SqliteShortUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteShortUrlRepository {
    /// Creates a new repository over an existing pool.
    ///
    /// Does not touch the database; see [`Self::init`].
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Creates a repository that is ready to serve requests.
    ///
    /// Verifies connectivity and ensures the `urls` table exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the probe or the schema
    /// statement fails.
    pub async fn init(pool: Arc<SqlitePool>) -> Result<Self, StoreError> {
        info!("Initializing SQLite repository");

        sqlite::ping(&pool).await.map_err(StoreError::Unavailable)?;
        sqlite::ensure_schema(&pool)
            .await
            .map_err(StoreError::Unavailable)?;

        info!("SQLite repository initialized");
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl ShortUrlRepository for SqliteShortUrlRepository {
    async fn save(&self, new_url: NewShortUrl) -> Result<ShortUrl, StoreError> {
        debug!(
            code = %new_url.short_code,
            original_url = %new_url.original_url,
            "Saving short URL"
        );

        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            INSERT INTO urls (original_url, short_code, created_at)
            VALUES (?, ?, ?)
            RETURNING id, original_url, short_code, created_at
            "#,
        )
        .bind(&new_url.original_url)
        .bind(&new_url.short_code)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                error!(code = %new_url.short_code, "Short code already exists");
                StoreError::DuplicateCode {
                    code: new_url.short_code.clone(),
                }
            } else {
                error!(code = %new_url.short_code, error = %e, "Failed to save short URL");
                StoreError::Unavailable(e)
            }
        })?;

        debug!(id = row.id, code = %row.short_code, "Short URL saved");
        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<ShortUrl, StoreError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, original_url, short_code, created_at
            FROM urls
            WHERE short_code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| {
            error!(code, error = %e, "Failed to find short URL");
            StoreError::Unavailable(e)
        })?;

        match row {
            Some(row) => Ok(row.into()),
            None => {
                debug!(code, "Short URL not found");
                Err(StoreError::NotFound {
                    code: code.to_string(),
                })
            }
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlite::ping(&self.pool)
            .await
            .map_err(StoreError::Unavailable)
    }
}
