//! Error types for the Extractor

use thiserror::Error;

/// Errors raised by a [`TextRecognizer`](crate::TextRecognizer)
#[derive(Error, Debug)]
pub enum RecognizerError {
    /// The recognizer command could not be started
    #[error("Failed to run '{0}': {1}")]
    Spawn(String, String),

    /// The recognizer command exited unsuccessfully
    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        /// Program name
        command: String,
        /// Exit status description
        status: String,
        /// Captured standard error
        stderr: String,
    },

    /// The recognizer is not configured for this input
    #[error("Recognizer not configured: {0}")]
    NotConfigured(String),

    /// Temp file handling failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic failure (used by test doubles)
    #[error("Recognition failed: {0}")]
    Other(String),
}

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The file name does not map to a format we can recognize
    #[error("Unsupported file format")]
    UnsupportedFormat,

    /// The upload had no file name
    #[error("No selected file")]
    MissingFileName,

    /// Text recognition failed
    #[error("Recognition error: {0}")]
    Recognition(#[from] RecognizerError),

    /// Recognition took longer than the configured limit
    #[error("Recognition timeout")]
    Timeout,
}
