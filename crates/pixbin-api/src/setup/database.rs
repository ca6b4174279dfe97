//! Database setup and initialization

use anyhow::{Context, Result};
use pixbin_core::Config;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// Setup the connection pool and run embedded migrations.
pub async fn setup_database(config: &Config) -> Result<SqlitePool> {
    tracing::info!(database_url = %config.database_url, "Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_timeout_seconds))
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    pixbin_db::MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}
