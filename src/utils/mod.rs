//! Helpers shared across layers.
//!
//! - [`code_generator`] - Short code generation
//! - [`db_error`] - SQLite error classification

pub mod code_generator;
pub mod db_error;
