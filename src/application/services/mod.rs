//! Business logic services for the application layer.

pub mod shortening_service;

pub use shortening_service::{ServiceError, ShorteningService};
