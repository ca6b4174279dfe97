//! Pixbin Core Library
//!
//! This crate provides the domain model, error types, configuration, and
//! validation helpers shared across all pixbin components.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{FileRecord, NewFileRecord};
