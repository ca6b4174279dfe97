//! HTTP handlers

pub mod download;
pub mod health;
pub mod list;
pub mod upload;

pub use download::download_file;
pub use health::health_check;
pub use list::list_files;
pub use upload::upload_file;
