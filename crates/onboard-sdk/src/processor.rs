//! Document processor: drives one upload/extraction session.
//!
//! A processor owns at most one selected document and at most one result.
//! `process` moves the session through `idle → uploading → processing →
//! {success, error}` while a simulated progress counter ticks alongside the
//! request. Observers follow along through a `watch` channel.

use crate::client::{ExtractionClient, ExtractionEndpoint};
use crate::config::{ClientConfig, FallbackPolicy};
use crate::error::SdkError;
use crate::intake::{build_preview, Preview};
use onboard_domain::{ExtractedIdentityRecord, ProcessingStatus, SessionId, UploadedDocument};
use tokio::sync::watch;
use tokio::time::{interval_at, sleep, Instant};
use tracing::{debug, info, warn};

/// Message shown when a session ends in the error state
pub const FAILURE_MESSAGE: &str = "Failed to process document. Please try again.";

/// Progress reported once the response has arrived
const RESPONSE_PROGRESS: u8 = 97;

/// Progress reported when the session is complete
const COMPLETE_PROGRESS: u8 = 100;

/// Result of a processing session that produced a record
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    /// The endpoint returned this record
    Extracted(ExtractedIdentityRecord),

    /// The request failed and the mock record was substituted
    Fallback {
        /// Substituted mock record
        record: ExtractedIdentityRecord,
        /// Why the request failed
        cause: String,
    },
}

impl ExtractionOutcome {
    /// The record, regardless of where it came from
    pub fn record(&self) -> &ExtractedIdentityRecord {
        match self {
            ExtractionOutcome::Extracted(record) => record,
            ExtractionOutcome::Fallback { record, .. } => record,
        }
    }

    /// Whether the record is fabricated
    pub fn is_fallback(&self) -> bool {
        matches!(self, ExtractionOutcome::Fallback { .. })
    }
}

/// Point-in-time view of a processor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessorSnapshot {
    /// Current session, if a document is selected
    pub session: Option<SessionId>,
    /// Selected document name
    pub document_name: Option<String>,
    /// Current status
    pub status: ProcessingStatus,
    /// Simulated progress, 0 to 100
    pub progress: u8,
    /// Outcome of the last successful session
    pub outcome: Option<ExtractionOutcome>,
    /// User-facing error message
    pub error: Option<String>,
    /// Underlying failure
    pub cause: Option<String>,
}

/// Called with the outcome whenever a session succeeds
pub type CompletionCallback = Box<dyn FnMut(&ExtractionOutcome) + Send>;

/// Drives the upload/extraction state machine for one document at a time
pub struct DocumentProcessor<E: ExtractionEndpoint> {
    endpoint: E,
    config: ClientConfig,
    session: Option<SessionId>,
    document: Option<UploadedDocument>,
    status: ProcessingStatus,
    progress: u8,
    outcome: Option<ExtractionOutcome>,
    error: Option<String>,
    cause: Option<String>,
    on_complete: Option<CompletionCallback>,
    tx: watch::Sender<ProcessorSnapshot>,
}

impl DocumentProcessor<ExtractionClient> {
    /// Build a processor talking HTTP to the configured endpoint
    pub fn from_config(config: ClientConfig) -> Result<Self, SdkError> {
        let client = ExtractionClient::from_config(&config)?;
        Ok(Self::new(client, config))
    }
}

impl<E: ExtractionEndpoint> DocumentProcessor<E> {
    /// Create an idle processor
    pub fn new(endpoint: E, config: ClientConfig) -> Self {
        let (tx, _rx) = watch::channel(ProcessorSnapshot::default());
        Self {
            endpoint,
            config,
            session: None,
            document: None,
            status: ProcessingStatus::Idle,
            progress: 0,
            outcome: None,
            error: None,
            cause: None,
            on_complete: None,
            tx,
        }
    }

    /// Register the completion callback
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&ExtractionOutcome) + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Subscribe to state snapshots
    pub fn subscribe(&self) -> watch::Receiver<ProcessorSnapshot> {
        self.tx.subscribe()
    }

    /// Current state
    pub fn snapshot(&self) -> ProcessorSnapshot {
        ProcessorSnapshot {
            session: self.session,
            document_name: self.document.as_ref().map(|d| d.name.clone()),
            status: self.status,
            progress: self.progress,
            outcome: self.outcome.clone(),
            error: self.error.clone(),
            cause: self.cause.clone(),
        }
    }

    /// Current status
    pub fn status(&self) -> ProcessingStatus {
        self.status
    }

    /// Current progress
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Outcome of the last successful session
    pub fn outcome(&self) -> Option<&ExtractionOutcome> {
        self.outcome.as_ref()
    }

    /// Select a document, starting a new session
    ///
    /// Any previous record or error is discarded.
    pub fn select(&mut self, document: UploadedDocument) {
        let session = SessionId::new();
        info!(
            "Session {} selected '{}' ({})",
            session,
            document.name,
            document.display_size()
        );
        self.session = Some(session);
        self.document = Some(document);
        self.clear_result();
        self.publish();
    }

    /// Drop the document and return to the initial state
    pub fn reset(&mut self) {
        debug!("Resetting processor");
        self.session = None;
        self.document = None;
        self.clear_result();
        self.publish();
    }

    /// Preview of the selected document
    pub async fn preview(&self) -> Result<Preview, SdkError> {
        let document = self.document.as_ref().ok_or(SdkError::NoDocument)?;
        build_preview(document).await
    }

    /// Submit the selected document and wait for the session to finish
    ///
    /// Without a selected document nothing happens and
    /// [`SdkError::NoDocument`] is returned. Request failures end in the
    /// `error` state unless the mock-record fallback is enabled.
    pub async fn process(&mut self) -> Result<ExtractionOutcome, SdkError> {
        let document = self.document.clone().ok_or(SdkError::NoDocument)?;

        self.clear_result();
        self.transition(ProcessingStatus::Uploading);

        let (result, progress) = self.submit_with_progress(&document).await;
        self.progress = progress;

        match result {
            Ok(record) => {
                let delay = self.config.processing_delay();
                self.finish(ExtractionOutcome::Extracted(record), delay).await
            }
            Err(err) => {
                warn!("Extraction of '{}' failed: {}", document.name, err);
                match self.config.fallback {
                    FallbackPolicy::MockRecord => {
                        warn!("Substituting mock record for '{}'", document.name);
                        let outcome = ExtractionOutcome::Fallback {
                            record: ExtractedIdentityRecord::mock_for_file_name(&document.name),
                            cause: err.to_string(),
                        };
                        let delay = self.config.fallback_delay();
                        self.finish(outcome, delay).await
                    }
                    FallbackPolicy::Fail => {
                        self.error = Some(FAILURE_MESSAGE.to_string());
                        self.cause = Some(err.to_string());
                        self.transition(ProcessingStatus::Error);
                        Err(err)
                    }
                }
            }
        }
    }

    async fn submit_with_progress(
        &self,
        document: &UploadedDocument,
    ) -> (Result<ExtractedIdentityRecord, SdkError>, u8) {
        let step = self.config.progress_step;
        let cap = self.config.upload_progress_cap;
        let period = self.config.progress_interval();

        let mut progress = self.progress;
        let mut ticker = interval_at(Instant::now() + period, period);
        let request = self.endpoint.submit(document);
        tokio::pin!(request);

        loop {
            tokio::select! {
                result = &mut request => return (result, progress),
                _ = ticker.tick() => {
                    progress = progress.saturating_add(step).min(cap);
                    self.tx.send_modify(|s| s.progress = progress);
                }
            }
        }
    }

    async fn finish(
        &mut self,
        outcome: ExtractionOutcome,
        delay: std::time::Duration,
    ) -> Result<ExtractionOutcome, SdkError> {
        self.progress = RESPONSE_PROGRESS;
        self.transition(ProcessingStatus::Processing);

        sleep(delay).await;

        self.progress = COMPLETE_PROGRESS;
        self.outcome = Some(outcome.clone());
        self.transition(ProcessingStatus::Success);

        if let Some(callback) = self.on_complete.as_mut() {
            callback(&outcome);
        }
        Ok(outcome)
    }

    fn transition(&mut self, next: ProcessingStatus) {
        if !self.status.can_transition_to(next) {
            warn!("Unexpected transition {} -> {}", self.status, next);
        }
        info!("Status {} -> {}", self.status, next);
        self.status = next;
        self.publish();
    }

    fn clear_result(&mut self) {
        self.status = ProcessingStatus::Idle;
        self.progress = 0;
        self.outcome = None;
        self.error = None;
        self.cause = None;
    }

    fn publish(&self) {
        self.tx.send_replace(self.snapshot());
    }
}
