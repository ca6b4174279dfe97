use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use pixbin_core::AppError;
use tokio_util::io::ReaderStream;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Stream a stored file back by name.
///
/// Resolution goes through the store's existence/readability check, so a
/// missing file renders as 404 rather than a generic storage failure.
#[utoipa::path(
    get,
    path = "/files/{filename}",
    tag = "files",
    params(
        ("filename" = String, Path, description = "Stored filename")
    ),
    responses(
        (status = 200, description = "File content", content_type = "application/octet-stream"),
        (status = 404, description = "File not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "download_file"))]
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let path = state.storage.load_as_resource(&filename).await?;

    let file = tokio::fs::File::open(&path).await.map_err(|e| {
        AppError::storage_with(format!("Failed to open file {}", path.display()), e)
    })?;

    let content_type = mime_guess::from_path(&path).first_or_octet_stream();

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type.as_ref())
        .header(
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", filename),
        )
        .body(Body::from_stream(ReaderStream::new(file)))
        .map_err(|e| AppError::storage_with("Failed to build response", e))?;

    Ok(response)
}
