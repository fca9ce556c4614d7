//! Domain layer containing business entities and storage contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP layer. Storage traits are
//! implemented in [`crate::infrastructure`] and consumed by
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
