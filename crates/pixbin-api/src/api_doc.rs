//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use pixbin_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pixbin API",
        version = "0.1.0",
        description = "Minimal image-upload service: upload, list, and download files"
    ),
    paths(
        handlers::upload::upload_file,
        handlers::list::list_files,
        handlers::download::download_file,
        handlers::health::health_check,
    ),
    components(schemas(
        models::FileRecord,
        error::ErrorResponse,
        handlers::health::HealthResponse,
    )),
    tags(
        (name = "files", description = "Upload, list, and download stored files"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
