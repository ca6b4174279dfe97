//! Storage setup
//!
//! Startup unconditionally wipes the upload root before recreating it.
//! Metadata is left alone: file reset and metadata reset are independent.

use anyhow::Result;
use pixbin_core::Config;
use pixbin_storage::LocalStore;

pub async fn setup_storage(config: &Config) -> Result<LocalStore> {
    let storage = LocalStore::new(&config.upload_dir);

    tracing::warn!(
        upload_dir = %config.upload_dir,
        "Resetting upload directory (all previously stored files are removed)"
    );
    storage.delete_all().await;
    storage.init().await?;

    Ok(storage)
}
