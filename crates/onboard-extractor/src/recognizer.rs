//! Text recognizers
//!
//! A recognizer turns document bytes into plain text. Production setups
//! shell out to an OCR tool through [`CommandRecognizer`]; tests use
//! [`MockRecognizer`].

use crate::config::ExtractorConfig;
use crate::error::RecognizerError;
use crate::format::SourceFormat;
use async_trait::async_trait;
use onboard_domain::UploadedDocument;
use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Turns document content into text
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Short name for logs and health output
    fn name(&self) -> &str;

    /// Recognize the text in a document of the given format
    async fn recognize(
        &self,
        document: &UploadedDocument,
        format: SourceFormat,
    ) -> Result<String, RecognizerError>;
}

/// Mock recognizer for deterministic testing
///
/// Returns pre-configured text without touching the file system.
///
/// # Examples
///
/// ```
/// use onboard_extractor::MockRecognizer;
///
/// let mut recognizer = MockRecognizer::new("Name: Ana Lima");
/// recognizer.add_response("passport.png", "PASSPORT\nName: John Smith");
/// recognizer.add_error("broken.png");
/// assert_eq!(recognizer.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockRecognizer {
    default_text: String,
    responses: Arc<Mutex<HashMap<String, Option<String>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockRecognizer {
    /// Create a recognizer returning the same text for every document
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            default_text: text.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Return specific text for documents with the given name
    pub fn add_response(&mut self, file_name: impl Into<String>, text: impl Into<String>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(file_name.into(), Some(text.into()));
        }
    }

    /// Fail recognition for documents with the given name
    pub fn add_error(&mut self, file_name: impl Into<String>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(file_name.into(), None);
        }
    }

    /// Number of times recognize was called
    pub fn call_count(&self) -> usize {
        self.call_count.lock().map(|c| *c).unwrap_or(0)
    }
}

impl Default for MockRecognizer {
    fn default() -> Self {
        Self::new("")
    }
}

#[async_trait]
impl TextRecognizer for MockRecognizer {
    fn name(&self) -> &str {
        "mock"
    }

    async fn recognize(
        &self,
        document: &UploadedDocument,
        _format: SourceFormat,
    ) -> Result<String, RecognizerError> {
        if let Ok(mut count) = self.call_count.lock() {
            *count += 1;
        }

        let responses = self
            .responses
            .lock()
            .map_err(|_| RecognizerError::Other("mock state poisoned".to_string()))?;

        match responses.get(&document.name) {
            Some(Some(text)) => Ok(text.clone()),
            Some(None) => Err(RecognizerError::Other("Mock error".to_string())),
            None => Ok(self.default_text.clone()),
        }
    }
}

/// Recognizer that runs an external command per document
///
/// The document is written to a temp file whose path replaces `{input}` in
/// the configured command; the command's stdout is the recognized text.
/// PDFs and images use separate commands.
#[derive(Debug, Clone)]
pub struct CommandRecognizer {
    image_command: Vec<String>,
    pdf_command: Vec<String>,
}

impl CommandRecognizer {
    /// Create a recognizer from explicit command vectors
    pub fn new(image_command: Vec<String>, pdf_command: Vec<String>) -> Self {
        Self {
            image_command,
            pdf_command,
        }
    }

    /// Create a recognizer using the commands from an extractor config
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::new(config.image_command.clone(), config.pdf_command.clone())
    }

    fn command_for(&self, format: SourceFormat) -> &[String] {
        match format {
            SourceFormat::Image => &self.image_command,
            SourceFormat::Pdf => &self.pdf_command,
        }
    }
}

impl Default for CommandRecognizer {
    fn default() -> Self {
        Self::from_config(&ExtractorConfig::default())
    }
}

#[async_trait]
impl TextRecognizer for CommandRecognizer {
    fn name(&self) -> &str {
        "command"
    }

    async fn recognize(
        &self,
        document: &UploadedDocument,
        format: SourceFormat,
    ) -> Result<String, RecognizerError> {
        let command = self.command_for(format);
        let (program, args) = command
            .split_first()
            .ok_or_else(|| RecognizerError::NotConfigured(format!("{:?} command is empty", format)))?;

        // Keep the original extension; OCR tools sniff on it.
        let suffix = document
            .name
            .rsplit_once('.')
            .map(|(_, ext)| format!(".{}", ext))
            .unwrap_or_default();

        let mut temp = tempfile::Builder::new()
            .prefix("onboard-")
            .suffix(&suffix)
            .tempfile()?;
        temp.write_all(&document.content)?;
        temp.flush()?;

        let input = temp.path().to_string_lossy().to_string();
        let args: Vec<String> = args.iter().map(|a| a.replace("{input}", &input)).collect();

        debug!("Running {} {:?} for '{}'", program, args, document.name);

        let output = tokio::process::Command::new(program)
            .args(&args)
            .output()
            .await
            .map_err(|e| RecognizerError::Spawn(program.clone(), e.to_string()))?;

        // The temp file is removed when `temp` drops, after the command exits.
        drop(temp);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("{} failed for '{}': {}", program, document.name, stderr);
            return Err(RecognizerError::CommandFailed {
                command: program.clone(),
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
