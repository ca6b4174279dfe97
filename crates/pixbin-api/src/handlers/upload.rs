use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pixbin_core::{AppError, FileRecord};

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::StorageService;
use crate::state::AppState;

/// Extract file data and filename from multipart form.
/// Only one field named "file" is accepted; multiple file fields are rejected.
async fn extract_multipart_file(mut multipart: Multipart) -> Result<(Vec<u8>, String), AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::storage_with("Failed to read multipart body", e))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == "file" {
            if file_data.is_some() {
                return Err(AppError::storage(
                    "Multiple file fields are not allowed; send exactly one field named 'file'",
                ));
            }
            filename = field.file_name().map(|s: &str| s.to_string());

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::storage_with("Failed to read file data", e))?;

            file_data = Some(data.to_vec());
        }
    }

    let file_data = file_data.ok_or_else(|| AppError::storage("No file provided"))?;
    let original_filename = filename.ok_or_else(|| AppError::storage("No filename provided"))?;

    Ok((file_data, original_filename))
}

/// Upload file handler
///
/// Validates and stores the uploaded image, then returns the persisted
/// metadata record.
#[utoipa::path(
    post,
    path = "/files",
    tag = "files",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File stored", body = FileRecord),
        (status = 500, description = "Upload rejected or storage failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_file"))]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let (data, original_filename) = extract_multipart_file(multipart).await?;

    let record = StorageService::new(&state)
        .store(&original_filename, &data)
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}
