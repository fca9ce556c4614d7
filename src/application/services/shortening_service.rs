//! Short URL creation and resolution service.

use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::{ShortUrlRepository, StoreError};
use crate::utils::code_generator::CodeGenerator;

/// Failures of the shortening service.
///
/// Each variant carries the underlying [`StoreError`] unchanged so callers
/// can still tell "not found" apart from store failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("could not save short URL for '{original_url}'")]
    Create {
        original_url: String,
        #[source]
        source: StoreError,
    },

    #[error("could not resolve short code '{code}'")]
    Resolve {
        code: String,
        #[source]
        source: StoreError,
    },
}

impl ServiceError {
    /// Returns the store failure behind this error.
    pub fn store_error(&self) -> &StoreError {
        match self {
            Self::Create { source, .. } | Self::Resolve { source, .. } => source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.store_error().is_not_found()
    }
}

/// Service for creating and resolving short URLs.
///
/// Mints one code per create call and hands the record to the repository.
/// There is no URL validation and no retry when the generated code collides
/// with an existing one; the collision surfaces as an error.
pub struct ShorteningService<R: ShortUrlRepository> {
    repository: Arc<R>,
    generator: Arc<dyn CodeGenerator>,
    base_url: String,
}

impl<R: ShortUrlRepository> ShorteningService<R> {
    /// Creates a new shortening service.
    ///
    /// `base_url` is the public address that short codes are appended to.
    pub fn new(
        repository: Arc<R>,
        generator: Arc<dyn CodeGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            generator,
            base_url: base_url.into(),
        }
    }

    /// Creates and stores a short URL for `original_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Create`] wrapping the store failure, including
    /// [`StoreError::DuplicateCode`] when the generated code is taken.
    pub async fn create_short_url(&self, original_url: String) -> Result<ShortUrl, ServiceError> {
        let short_code = self.generator.generate();
        let new_url = NewShortUrl::new(original_url.clone(), short_code);

        let short_url = self.repository.save(new_url).await.map_err(|source| {
            error!(original_url = %original_url, error = %source, "Failed to create short URL");
            ServiceError::Create {
                original_url,
                source,
            }
        })?;

        info!(id = short_url.id, code = %short_url.short_code, "Short URL created");
        Ok(short_url)
    }

    /// Looks up the short URL stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Resolve`] wrapping [`StoreError::NotFound`] if
    /// the code is unknown, or the store failure otherwise.
    pub async fn get_original_url(&self, code: &str) -> Result<ShortUrl, ServiceError> {
        self.repository
            .find_by_code(code)
            .await
            .map_err(|source| ServiceError::Resolve {
                code: code.to_string(),
                source,
            })
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Verifies the underlying store is reachable.
    pub async fn check_store(&self) -> Result<(), StoreError> {
        self.repository.ping().await
    }
}
