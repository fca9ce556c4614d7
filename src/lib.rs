//! # Short URL
//!
//! A small URL shortening service built with Axum and SQLite. Clients POST a
//! long URL and get back a short link; requesting the short link redirects
//! to the original URL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `ShortUrl` entity and the repository trait
//! - **Application Layer** ([`application`]) - Code minting and orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! Layers are wired explicitly in [`server::run`]; nothing calls upward.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -X POST localhost:8080/shorten -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ServiceError, ShorteningService};
    pub use crate::domain::entities::{NewShortUrl, ShortUrl};
    pub use crate::domain::repositories::{ShortUrlRepository, StoreError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
}
