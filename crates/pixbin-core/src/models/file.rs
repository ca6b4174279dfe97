//! Stored-file metadata record

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// Metadata row describing one stored file.
///
/// Created once at successful upload completion and never updated; the only
/// deletion path is the wholesale `delete_all`. JSON serialization uses
/// camelCase field names, which is the public wire shape:
/// `{ id, fileName, fileDownloadUri, fileType, height, width }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Identity assigned by the database (auto-increment).
    pub id: i64,
    pub file_name: String,
    pub file_download_uri: String,
    /// MIME subtype, e.g. "png".
    pub file_type: String,
    pub height: f64,
    pub width: f64,
}

/// Insert shape for a metadata record, before the database assigns identity.
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    pub file_name: String,
    pub file_download_uri: String,
    pub file_type: String,
    pub height: f64,
    pub width: f64,
}
