//! Repository trait for short URL storage.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a [`ShortUrlRepository`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record matches the requested short code.
    #[error("short URL not found for code '{code}'")]
    NotFound { code: String },

    /// The short code is already taken by another record.
    #[error("short code '{code}' already exists")]
    DuplicateCode { code: String },

    /// Connectivity, I/O or query failure.
    #[error("store operation failed: {0}")]
    Unavailable(#[source] sqlx::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Storage contract for short URLs.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteShortUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_short_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Inserts a new record. The store assigns `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCode`] if the short code already exists.
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn save(&self, new_url: NewShortUrl) -> Result<ShortUrl, StoreError>;

    /// Finds a record by exact short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record matches.
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<ShortUrl, StoreError>;

    /// Verifies the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
