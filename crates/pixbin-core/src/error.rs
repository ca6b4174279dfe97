//! Error types module
//!
//! Two error kinds cover the whole service: `Storage` for any validation,
//! I/O, or persistence failure during store/list/init, and `NotFound` for
//! resolving a file for download. The web layer maps them to HTTP statuses
//! through the `ErrorMetadata` trait.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like missing downloads
    Debug,
    /// Warning level - for rejected uploads
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("File not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Storage failure with a descriptive message and no underlying cause.
    pub fn storage(message: impl Into<String>) -> Self {
        AppError::Storage {
            message: message.into(),
            source: None,
        }
    }

    /// Storage failure wrapping an underlying cause.
    pub fn storage_with(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        AppError::Storage {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::Storage { .. } => 500,
            AppError::NotFound(_) => 404,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Storage { .. } => "STORAGE_ERROR",
            AppError::NotFound(_) => "FILE_NOT_FOUND",
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::Storage { .. } => LogLevel::Error,
            AppError::NotFound(_) => LogLevel::Debug,
        }
    }
}
