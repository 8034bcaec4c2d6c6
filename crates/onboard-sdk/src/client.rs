//! HTTP client for the extraction endpoint.

use crate::config::ClientConfig;
use crate::error::SdkError;
use async_trait::async_trait;
use onboard_domain::{ExtractedIdentityRecord, UploadedDocument};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, warn};

/// Multipart field carrying the document
pub const FILE_FIELD: &str = "file";

/// Anything that turns a document into an extracted record
#[async_trait]
pub trait ExtractionEndpoint: Send + Sync {
    /// Submit one document and return the record reported by the endpoint
    async fn submit(&self, document: &UploadedDocument)
        -> Result<ExtractedIdentityRecord, SdkError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Extraction client speaking multipart/form-data over HTTP
#[derive(Debug, Clone)]
pub struct ExtractionClient {
    endpoint: String,
    http: reqwest::Client,
}

impl ExtractionClient {
    /// Create a client for the given endpoint URL with default settings
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Create a client from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self, SdkError> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SdkError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            http,
        })
    }

    /// The configured endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn form_for(document: &UploadedDocument) -> Result<Form, SdkError> {
        let part = Part::bytes(document.content.clone())
            .file_name(document.name.clone())
            .mime_str(&document.media_type)
            .map_err(|e| SdkError::RequestError(format!("Invalid media type: {}", e)))?;
        Ok(Form::new().part(FILE_FIELD, part))
    }
}

#[async_trait]
impl ExtractionEndpoint for ExtractionClient {
    async fn submit(
        &self,
        document: &UploadedDocument,
    ) -> Result<ExtractedIdentityRecord, SdkError> {
        debug!(
            "POST {} with '{}' ({})",
            self.endpoint,
            document.name,
            document.display_size()
        );

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(Self::form_for(document)?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            warn!("Extraction endpoint returned {}: {}", status, message);
            return Err(SdkError::EndpointError {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let record: ExtractedIdentityRecord = serde_json::from_slice(&bytes)?;
        Ok(record)
    }
}
