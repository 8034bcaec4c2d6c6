//! Error types for the Onboard SDK.

use thiserror::Error;

/// SDK operation errors
#[derive(Debug, Error)]
pub enum SdkError {
    /// No document has been selected
    #[error("No document selected")]
    NoDocument,

    /// Connection error (network, DNS, refused)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The extraction endpoint answered with a non-2xx status
    #[error("Extraction endpoint returned HTTP {status}: {message}")]
    EndpointError {
        /// HTTP status code
        status: u16,
        /// Error message from the body, or the raw body
        message: String,
    },

    /// The endpoint's response could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The request did not finish in time
    #[error("Request timeout")]
    Timeout,

    /// Reading the local file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other HTTP client failure
    #[error("Request error: {0}")]
    RequestError(String),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SdkError::Timeout
        } else if e.is_connect() {
            SdkError::ConnectionError(e.to_string())
        } else if e.is_decode() {
            SdkError::InvalidResponse(e.to_string())
        } else if e.is_status() {
            match e.status() {
                Some(status) => SdkError::EndpointError {
                    status: status.as_u16(),
                    message: e.to_string(),
                },
                None => SdkError::RequestError(e.to_string()),
            }
        } else {
            SdkError::RequestError(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::InvalidResponse(format!("JSON parsing error: {}", e))
    }
}
