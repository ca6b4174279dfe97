//! Application setup and initialization
//!
//! All initialization logic lives here rather than in main.rs: config
//! validation, database pool and migrations, storage reset, route
//! construction, and the server loop.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use pixbin_core::Config;
use pixbin_db::FileRepository;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    let pool = database::setup_database(&config).await?;

    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        repository: FileRepository::new(pool),
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
