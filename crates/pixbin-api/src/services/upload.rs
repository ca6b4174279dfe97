//! Storage service
//!
//! Orchestrates the store pipeline: clean the filename, classify the
//! content type, validate, write the bytes to disk, build the public
//! download URI, probe pixel dimensions, and persist the metadata record.
//! The filesystem write and the metadata insert are two independent steps
//! with no transaction spanning them; a crash in between leaves an orphaned
//! file with no matching record.

use std::sync::Arc;

use pixbin_core::{validation, AppError, FileRecord, NewFileRecord};

use super::dimensions;
use crate::state::AppState;

pub struct StorageService {
    state: Arc<AppState>,
}

impl StorageService {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Complete store pipeline for one upload.
    ///
    /// All rejections happen before anything touches the filesystem:
    /// non-image content types, empty payloads, and filenames that still
    /// contain a parent-directory segment after cleaning.
    pub async fn store(
        &self,
        original_filename: &str,
        data: &[u8],
    ) -> Result<FileRecord, AppError> {
        let filename = validation::clean_path(original_filename);

        let (mime_type, subtype) = validation::probe_mime(&filename)?;
        if mime_type != "image" {
            return Err(AppError::storage(format!(
                "File is not an image {}",
                filename
            )));
        }

        if data.is_empty() {
            return Err(AppError::storage(format!(
                "Failed to store empty file {}",
                filename
            )));
        }

        if filename.contains("..") {
            return Err(AppError::storage(format!(
                "Cannot store file with relative path outside current directory {}",
                filename
            )));
        }

        self.state.storage.write(&filename, data).await?;

        let file_download_uri = format!(
            "{}/files/{}",
            self.state.config.public_base_url.trim_end_matches('/'),
            filename
        );

        let (width, height) = dimensions::probe_dimensions(&filename, data)?;

        let record = self
            .state
            .repository
            .insert(NewFileRecord {
                file_name: filename,
                file_download_uri,
                file_type: subtype,
                height,
                width,
            })
            .await?;

        tracing::info!(
            id = record.id,
            file_name = %record.file_name,
            file_type = %record.file_type,
            "Upload stored"
        );

        Ok(record)
    }

    /// Every stored metadata record.
    pub async fn load_all(&self) -> Result<Vec<FileRecord>, AppError> {
        self.state.repository.list_all().await
    }
}
