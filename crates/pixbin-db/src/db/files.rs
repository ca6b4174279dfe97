use pixbin_core::{AppError, FileRecord, NewFileRecord};
use sqlx::{Sqlite, SqlitePool};

/// Repository over the stored-file metadata table.
///
/// Records are only ever inserted or wholesale-deleted; there is no update
/// or per-record delete path. Persistence failures surface as the storage
/// error kind with the sqlx error attached as cause.
#[derive(Clone)]
pub struct FileRepository {
    pool: SqlitePool,
}

impl FileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new metadata record and return it with its assigned id.
    pub async fn insert(&self, record: NewFileRecord) -> Result<FileRecord, AppError> {
        let row: FileRecord = sqlx::query_as::<Sqlite, FileRecord>(
            r#"
            INSERT INTO files (file_name, file_download_uri, file_type, height, width)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, file_name, file_download_uri, file_type, height, width
            "#,
        )
        .bind(&record.file_name)
        .bind(&record.file_download_uri)
        .bind(&record.file_type)
        .bind(record.height)
        .bind(record.width)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::storage_with(format!("Failed to store file {}", record.file_name), e)
        })?;

        tracing::debug!(id = row.id, file_name = %row.file_name, "Metadata record inserted");

        Ok(row)
    }

    /// Every metadata record, in insertion order.
    pub async fn list_all(&self) -> Result<Vec<FileRecord>, AppError> {
        sqlx::query_as::<Sqlite, FileRecord>(
            r#"
            SELECT id, file_name, file_download_uri, file_type, height, width
            FROM files
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::storage_with("Failed to read stored files", e))
    }

    /// Wholesale delete of every metadata record.
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM files")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::storage_with("Failed to delete stored file records", e))?;

        Ok(result.rows_affected())
    }
}
