//! Upload orchestration and image probing services

pub mod dimensions;
pub mod upload;

pub use upload::StorageService;
