//! Route handlers: generate, download, health

use super::ServerAppState;
use crate::file_storage::{media_type, ArtifactError};
use crate::kit::{self, KitError};
use crate::models::{GenerationRequest, KitDetails};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Response body for a successful generation
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub message: String,
    pub pptx_url: String,
    pub docx_url: String,
    pub qna_url: String,
    pub details: KitDetails,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub static_path: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    detail: String,
}

/// Error type for all handlers
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            detail: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<KitError> for ApiError {
    fn from(e: KitError) -> Self {
        match e {
            KitError::InvalidRequest(e) => ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            e => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to generate seminar kit: {}", e),
            ),
        }
    }
}

impl From<ArtifactError> for ApiError {
    fn from(e: ArtifactError) -> Self {
        match e {
            ArtifactError::NotFound(_) => ApiError::new(StatusCode::NOT_FOUND, "File not found"),
            ArtifactError::Empty(_) => {
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Generated file is empty")
            }
            e => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        }
    }
}

fn join_error(e: tokio::task::JoinError) -> ApiError {
    ApiError::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Worker task failed: {}", e),
    )
}

/// POST /generate-seminar-kit
pub async fn generate_handler(
    State(state): State<ServerAppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let worker_state = state.clone();
    let result = tokio::task::spawn_blocking(move || {
        kit::generate_kit(
            &request,
            worker_state.source.as_ref(),
            &worker_state.config.provider,
            &worker_state.store,
        )
    })
    .await
    .map_err(join_error)?;

    let kit = result.map_err(|e| {
        log::error!("Seminar kit generation failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(GenerateResponse {
        success: true,
        message: "Enhanced seminar kit generated successfully!".to_string(),
        pptx_url: state.download_url(&kit.pptx),
        docx_url: state.download_url(&kit.docx),
        qna_url: state.download_url(&kit.qna),
        details: kit.details,
    }))
}

/// GET /download/:filename
pub async fn download_handler(
    State(state): State<ServerAppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let store = state.store.clone();
    let name = filename.clone();
    let bytes = tokio::task::spawn_blocking(move || store.retrieve(&name))
        .await
        .map_err(join_error)??;

    let headers = [
        (header::CONTENT_TYPE, media_type(&filename)),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", filename),
        ),
    ];
    Ok((headers, bytes).into_response())
}

/// GET /health
pub async fn health_handler(State(state): State<ServerAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        static_path: state.store.dir().display().to_string(),
    })
}
