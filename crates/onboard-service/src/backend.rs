//! Extraction backends behind `POST /extract`.

use crate::config::BackendConfig;
use async_trait::async_trait;
use onboard_domain::{ExtractedIdentityRecord, UploadedDocument};
use onboard_extractor::{
    CommandRecognizer, ExtractorError, IdentityExtractor, TextRecognizer,
};
use onboard_sdk::{ClientConfig, ExtractionClient, ExtractionEndpoint, SdkError};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Failure inside a backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// Local extraction failed
    #[error(transparent)]
    Extraction(#[from] ExtractorError),

    /// The upstream endpoint failed
    #[error("Upstream extraction failed: {0}")]
    Upstream(#[from] SdkError),
}

/// Something that can turn an upload into a record
#[async_trait]
pub trait ExtractionBackend: Send + Sync {
    /// Backend name as reported by `/health`
    fn name(&self) -> &'static str;

    /// Extract a record from an uploaded document
    async fn extract(
        &self,
        document: &UploadedDocument,
    ) -> Result<ExtractedIdentityRecord, BackendError>;
}

/// Returns the fixed mock record after a delay
#[derive(Debug, Clone)]
pub struct MockBackend {
    delay: Duration,
    confidence: f64,
}

impl MockBackend {
    /// Create a mock backend
    pub fn new(delay: Duration, confidence: f64) -> Self {
        Self { delay, confidence }
    }
}

#[async_trait]
impl ExtractionBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn extract(
        &self,
        document: &UploadedDocument,
    ) -> Result<ExtractedIdentityRecord, BackendError> {
        tokio::time::sleep(self.delay).await;
        Ok(ExtractedIdentityRecord::mock_for_file_name(&document.name)
            .with_confidence(self.confidence))
    }
}

/// Runs text recognition and the field parser in-process
pub struct OcrBackend<R: TextRecognizer> {
    extractor: IdentityExtractor<R>,
}

impl<R: TextRecognizer> OcrBackend<R> {
    /// Wrap an extractor
    pub fn new(extractor: IdentityExtractor<R>) -> Self {
        Self { extractor }
    }
}

#[async_trait]
impl<R: TextRecognizer + 'static> ExtractionBackend for OcrBackend<R> {
    fn name(&self) -> &'static str {
        "ocr"
    }

    async fn extract(
        &self,
        document: &UploadedDocument,
    ) -> Result<ExtractedIdentityRecord, BackendError> {
        Ok(self.extractor.extract(document).await?)
    }
}

/// Forwards uploads to another extraction endpoint
pub struct ProxyBackend {
    client: ExtractionClient,
}

impl ProxyBackend {
    /// Wrap a configured client
    pub fn new(client: ExtractionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ExtractionBackend for ProxyBackend {
    fn name(&self) -> &'static str {
        "proxy"
    }

    async fn extract(
        &self,
        document: &UploadedDocument,
    ) -> Result<ExtractedIdentityRecord, BackendError> {
        debug!("Forwarding '{}' to {}", document.name, self.client.endpoint());
        Ok(self.client.submit(document).await?)
    }
}

/// Build the backend described by the configuration
pub fn build_backend(config: &BackendConfig) -> Result<Arc<dyn ExtractionBackend>, SdkError> {
    let backend: Arc<dyn ExtractionBackend> = match config {
        BackendConfig::Mock {
            delay_ms,
            confidence,
        } => Arc::new(MockBackend::new(Duration::from_millis(*delay_ms), *confidence)),
        BackendConfig::Ocr(extractor_config) => {
            let recognizer = CommandRecognizer::from_config(extractor_config);
            let extractor = IdentityExtractor::new(recognizer, extractor_config.clone());
            info!("OCR backend using {} recognizer", extractor.recognizer_name());
            Arc::new(OcrBackend::new(extractor))
        }
        BackendConfig::Proxy {
            upstream,
            timeout_secs,
        } => {
            let client_config = ClientConfig {
                request_timeout_secs: *timeout_secs,
                ..ClientConfig::default().with_endpoint(upstream.clone())
            };
            Arc::new(ProxyBackend::new(ExtractionClient::from_config(&client_config)?))
        }
    };
    Ok(backend)
}
