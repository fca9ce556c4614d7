//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small API
//! that is independent of transport and storage.
//!
//! - [`services::shortening_service::ShorteningService`] - Short URL creation and resolution

pub mod services;
