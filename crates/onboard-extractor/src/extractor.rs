//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::format::SourceFormat;
use crate::parser::parse_identity_text;
use crate::recognizer::TextRecognizer;
use onboard_domain::{ExtractedIdentityRecord, UploadedDocument};
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Extracts identity records from uploaded documents
pub struct IdentityExtractor<R: TextRecognizer> {
    recognizer: Arc<R>,
    config: ExtractorConfig,
}

impl<R: TextRecognizer> Clone for IdentityExtractor<R> {
    fn clone(&self) -> Self {
        Self {
            recognizer: Arc::clone(&self.recognizer),
            config: self.config.clone(),
        }
    }
}

impl<R: TextRecognizer> IdentityExtractor<R> {
    /// Create a new extractor around a recognizer
    pub fn new(recognizer: R, config: ExtractorConfig) -> Self {
        Self {
            recognizer: Arc::new(recognizer),
            config,
        }
    }

    /// Name of the underlying recognizer
    pub fn recognizer_name(&self) -> &str {
        self.recognizer.name()
    }

    /// Extract an identity record from a document
    ///
    /// # Errors
    ///
    /// - [`ExtractorError::MissingFileName`] when the document has no name
    /// - [`ExtractorError::UnsupportedFormat`] for anything but images and PDFs
    /// - [`ExtractorError::Timeout`] when recognition exceeds the configured limit
    /// - [`ExtractorError::Recognition`] when the recognizer fails
    pub async fn extract(
        &self,
        document: &UploadedDocument,
    ) -> Result<ExtractedIdentityRecord, ExtractorError> {
        if document.name.trim().is_empty() {
            return Err(ExtractorError::MissingFileName);
        }

        let format = SourceFormat::from_file_name(&document.name).ok_or_else(|| {
            warn!("Rejecting '{}': unsupported format", document.name);
            ExtractorError::UnsupportedFormat
        })?;

        info!(
            "Starting extraction for '{}' ({:?}, {} bytes) with {} recognizer",
            document.name,
            format,
            document.size(),
            self.recognizer.name()
        );

        let start = Instant::now();

        let text = timeout(
            self.config.recognition_timeout(),
            self.recognizer.recognize(document, format),
        )
        .await
        .map_err(|_| ExtractorError::Timeout)??;

        debug!("Recognized {} chars in {:?}", text.len(), start.elapsed());

        let record = parse_identity_text(&text, &document.name, self.config.base_confidence);

        info!(
            "Extraction complete for '{}': {} in {} ms",
            document.name,
            record.document_type.as_deref().unwrap_or("Unknown"),
            start.elapsed().as_millis()
        );

        Ok(record)
    }
}
