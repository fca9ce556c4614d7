//! Core domain entities.
//!
//! - [`ShortUrl`] - A stored short code → original URL mapping
//! - [`NewShortUrl`] - Input for creating one; the store fills in `id` and `created_at`

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};
