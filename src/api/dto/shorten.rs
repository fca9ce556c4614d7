//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// The URL is stored as given; only emptiness is checked.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL. A missing field is treated like an empty one.
    #[serde(default)]
    #[validate(length(min = 1, message = "URL cannot be empty"))]
    pub url: String,
}

/// Response carrying the fully qualified short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
