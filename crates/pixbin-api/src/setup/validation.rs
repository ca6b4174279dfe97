//! Startup configuration validation

use anyhow::{bail, Result};
use pixbin_core::Config;

/// Fail fast on configuration that would only surface mid-request.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.upload_dir.trim().is_empty() {
        bail!("UPLOAD_DIR must not be empty");
    }

    if !config.public_base_url.starts_with("http://") && !config.public_base_url.starts_with("https://") {
        bail!(
            "PUBLIC_BASE_URL must be an http(s) URL, got '{}'",
            config.public_base_url
        );
    }

    if config.max_file_size_bytes == 0 {
        bail!("MAX_FILE_SIZE_BYTES must be greater than zero");
    }

    if config.db_max_connections == 0 {
        bail!("DB_MAX_CONNECTIONS must be greater than zero");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server_port: 3000,
            upload_dir: "./uploads".to_string(),
            public_base_url: "http://localhost:3000".to_string(),
            database_url: "sqlite::memory:".to_string(),
            max_file_size_bytes: 1024,
            cors_origins: vec!["*".to_string()],
            db_max_connections: 5,
            db_timeout_seconds: 30,
            environment: "development".to_string(),
        }
    }

    #[test]
    fn accepts_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn rejects_empty_upload_dir() {
        let mut config = valid_config();
        config.upload_dir = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = valid_config();
        config.public_base_url = "ftp://example.com".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_zero_size_limit() {
        let mut config = valid_config();
        config.max_file_size_bytes = 0;
        assert!(validate_config(&config).is_err());
    }
}
