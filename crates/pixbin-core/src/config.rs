//! Configuration module
//!
//! Environment-driven configuration with defaults for every knob. Load a
//! `.env` file with `dotenvy` before calling [`Config::from_env`] if you
//! want file-based configuration during development.

use std::env;

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_UPLOAD_DIR: &str = "./uploads";
const DEFAULT_DATABASE_URL: &str = "sqlite://pixbin.db?mode=rwc";
const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 10 * 1024 * 1024;
const MAX_CONNECTIONS: u32 = 5;
const CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    /// Root directory for uploaded files. Wiped and recreated at startup.
    pub upload_dir: String,
    /// Base URL used to build public download URIs.
    pub public_base_url: String,
    pub database_url: String,
    pub max_file_size_bytes: usize,
    pub cors_origins: Vec<String>,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let server_port = parse_env("SERVER_PORT", DEFAULT_SERVER_PORT)?;

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", server_port));

        Ok(Config {
            server_port,
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            public_base_url,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            max_file_size_bytes: parse_env("MAX_FILE_SIZE_BYTES", DEFAULT_MAX_FILE_SIZE_BYTES)?,
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", MAX_CONNECTIONS)?,
            db_timeout_seconds: parse_env("DB_TIMEOUT_SECONDS", CONNECTION_TIMEOUT_SECS)?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T, anyhow::Error>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Invalid {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
