//! HTTP request handlers for the extraction service.
//!
//! Implements the multipart extraction and health check endpoints using axum.

use crate::backend::{BackendError, ExtractionBackend};
use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use onboard_domain::{ExtractedIdentityRecord, UploadedDocument};
use onboard_extractor::ExtractorError;
use onboard_sdk::{SdkError, FILE_FIELD};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Backend answering extraction requests
    pub backend: Arc<dyn ExtractionBackend>,
    /// Largest accepted request body in bytes
    pub max_upload_bytes: usize,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Active backend name
    pub backend: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// The form had no `file` part
    MissingFilePart,
    /// The `file` part had an empty file name
    NoSelectedFile,
    /// The multipart body could not be read
    Multipart(MultipartError),
    /// The backend failed
    Backend(BackendError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingFilePart => (StatusCode::BAD_REQUEST, "No file part".to_string()),
            AppError::NoSelectedFile => (StatusCode::BAD_REQUEST, "No selected file".to_string()),
            AppError::Multipart(e) => (e.status(), e.body_text()),
            AppError::Backend(BackendError::Extraction(e)) => match e {
                ExtractorError::UnsupportedFormat | ExtractorError::MissingFileName => {
                    (StatusCode::BAD_REQUEST, e.to_string())
                }
                other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
            },
            AppError::Backend(BackendError::Upstream(e)) => match e {
                SdkError::EndpointError { status, message } if (400..500).contains(&status) => (
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST),
                    message,
                ),
                other => (StatusCode::BAD_GATEWAY, other.to_string()),
            },
        };

        if status.is_server_error() {
            warn!("Extraction request failed ({}): {}", status, message);
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Multipart(e)
    }
}

impl From<BackendError> for AppError {
    fn from(e: BackendError) -> Self {
        AppError::Backend(e)
    }
}

/// Pull the `file` part out of the form
async fn read_file_part(multipart: &mut Multipart) -> Result<UploadedDocument, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        let media_type = field.content_type().map(str::to_string);
        let content = field.bytes().await?.to_vec();

        if name.trim().is_empty() {
            return Err(AppError::NoSelectedFile);
        }

        return Ok(match media_type {
            Some(media_type) => UploadedDocument::with_media_type(name, media_type, content),
            None => UploadedDocument::new(name, content),
        });
    }

    Err(AppError::MissingFilePart)
}

/// POST /extract - Extract identity fields from an uploaded document
async fn extract(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractedIdentityRecord>, AppError> {
    let document = read_file_part(&mut multipart).await?;
    info!(
        "Received '{}' ({}, {})",
        document.name,
        document.media_type,
        document.display_size()
    );

    let record = state.backend.extract(&document).await?;
    Ok(Json(record))
}

/// GET /health - Liveness check
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        backend: state.backend.name().to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    let limit = state.max_upload_bytes;
    AxumRouter::new()
        .route("/extract", post(extract).layer(DefaultBodyLimit::max(limit)))
        .route("/health", get(health_check))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use axum::body::Body;
    use axum::http::Request;
    use std::time::Duration;
    use tower::ServiceExt; // for oneshot

    fn create_test_state() -> AppState {
        AppState {
            backend: Arc::new(MockBackend::new(Duration::ZERO, 0.95)),
            max_upload_bytes: 1024,
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_extract_requires_multipart() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .method("POST")
            .uri("/extract")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }
}
