//! Pixbin API Library
//!
//! This crate provides the HTTP handlers, upload orchestration, and
//! application setup for the pixbin file-upload service.

// Module declarations
mod api_doc;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use services::upload::StorageService;
pub use state::AppState;
