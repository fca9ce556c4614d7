//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShorteningService;
use crate::infrastructure::persistence::SqliteShortUrlRepository;

/// State shared by all request handlers.
///
/// Cloned per request; the service and its connection pool are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub shortening_service: Arc<ShorteningService<SqliteShortUrlRepository>>,
}

impl AppState {
    pub fn new(shortening_service: Arc<ShorteningService<SqliteShortUrlRepository>>) -> Self {
        Self { shortening_service }
    }
}
