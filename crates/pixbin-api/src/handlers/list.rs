use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use pixbin_core::FileRecord;

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::StorageService;
use crate::state::AppState;

/// List every stored-file metadata record.
#[utoipa::path(
    get,
    path = "/files",
    tag = "files",
    responses(
        (status = 200, description = "All stored file records", body = [FileRecord]),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_files"))]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let records = StorageService::new(&state).load_all().await?;
    Ok(Json(records))
}
