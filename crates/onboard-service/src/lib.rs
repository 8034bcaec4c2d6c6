//! Onboard Extraction Service
//!
//! HTTP server exposing `POST /extract` (multipart, field `file`) and
//! `GET /health`. The backend is chosen by configuration: a fixed mock
//! record, in-process OCR, or a proxy to another extraction endpoint.

#![warn(missing_docs)]

pub mod backend;
pub mod config;
pub mod handlers;

use backend::build_backend;
use config::ServiceConfig;
use handlers::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::info;

/// Service error
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The backend could not be built
    #[error("Backend error: {0}")]
    Backend(#[from] onboard_sdk::SdkError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the application state for a configuration
pub fn build_state(config: &ServiceConfig) -> Result<AppState, ServiceError> {
    Ok(AppState {
        backend: build_backend(&config.backend)?,
        max_upload_bytes: config.max_upload_bytes,
    })
}

/// Start the extraction HTTP server
///
/// Builds the configured backend and serves until the process exits.
pub async fn start_server(config: ServiceConfig) -> Result<(), ServiceError> {
    info!("Starting Onboard extraction service");
    info!("Bind address: {}", config.bind_addr());
    info!("Backend: {}", config.backend.name());
    info!("Max upload: {} bytes", config.max_upload_bytes);

    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Extraction service listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServiceError::Server(e.to_string()))?;

    Ok(())
}
