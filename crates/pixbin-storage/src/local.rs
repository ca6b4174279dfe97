use pixbin_core::AppError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem store
///
/// Owns the upload root directory. `init` creates it, `delete_all` wipes it,
/// `write` persists upload bytes with overwrite semantics, and
/// `load_as_resource` resolves a filename to a readable file for download.
#[derive(Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Create a store over `root`. No I/O happens here; call [`init`]
    /// before storing files.
    ///
    /// [`init`]: LocalStore::init
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory (and parents) if absent.
    pub async fn init(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::storage_with(
                format!("Could not initialize storage at {}", self.root.display()),
                e,
            )
        })
    }

    /// Recursively remove the entire root directory tree.
    ///
    /// Best-effort: failures are logged and swallowed, never propagated.
    pub async fn delete_all(&self) {
        if let Err(e) = fs::remove_dir_all(&self.root).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.root.display(),
                    error = %e,
                    "Failed to remove storage root"
                );
            }
        }
    }

    /// Reject filenames that could escape the root directory.
    fn validate_filename(&self, filename: &str) -> Result<(), AppError> {
        if filename.is_empty() || filename.contains("..") || filename.starts_with('/') {
            return Err(AppError::storage(format!(
                "Cannot store file with relative path outside current directory {}",
                filename
            )));
        }
        Ok(())
    }

    /// Write `data` to `<root>/<filename>`, replacing any existing file of
    /// the same name.
    pub async fn write(&self, filename: &str, data: &[u8]) -> Result<PathBuf, AppError> {
        self.validate_filename(filename)?;
        let path = self.resolve(filename);
        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            AppError::storage_with(format!("Failed to create file {}", path.display()), e)
        })?;

        file.write_all(data).await.map_err(|e| {
            AppError::storage_with(format!("Failed to write file {}", path.display()), e)
        })?;

        file.sync_all().await.map_err(|e| {
            AppError::storage_with(format!("Failed to sync file {}", path.display()), e)
        })?;

        tracing::info!(
            path = %path.display(),
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "File stored"
        );

        Ok(path)
    }

    /// Pure path resolution: join `filename` to the root. No existence check.
    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Resolve `filename` and confirm it is a readable regular file.
    ///
    /// Missing or unreadable files fail with the not-found kind, never the
    /// generic storage kind, so the web layer can map them to a 404.
    pub async fn load_as_resource(&self, filename: &str) -> Result<PathBuf, AppError> {
        // A name that could escape the root is not a valid resource locator;
        // that is a not-found condition, not a storage failure.
        if self.validate_filename(filename).is_err() {
            return Err(AppError::not_found(format!(
                "Could not read file: {}",
                filename
            )));
        }

        let path = self.resolve(filename);

        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(path),
            _ => Err(AppError::not_found(format!(
                "Could not read file: {}",
                filename
            ))),
        }
    }
}
