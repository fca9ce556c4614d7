//! SQLite repository implementations.
//!
//! - [`sqlite`] - Pool construction, schema and liveness probe
//! - [`SqliteShortUrlRepository`] - Short URL storage and retrieval

pub mod sqlite;
pub mod sqlite_short_url_repository;

pub use sqlite_short_url_repository::SqliteShortUrlRepository;
