//! Client-side configuration for the extraction flow.

use crate::error::SdkError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable overriding the extraction endpoint
pub const ENDPOINT_ENV: &str = "EXTRACTION_SERVICE_URL";

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/extract";

/// What to do when the extraction request fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Surface the failure as an error
    #[default]
    Fail,
    /// Substitute the mock record, labelled as a fallback
    MockRecord,
}

impl FallbackPolicy {
    /// Get the policy name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackPolicy::Fail => "fail",
            FallbackPolicy::MockRecord => "mock-record",
        }
    }
}

/// Configuration for the extraction client and processor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Extraction endpoint URL
    pub endpoint: String,

    /// Behavior on request failure
    pub fallback: FallbackPolicy,

    /// Simulated progress increment per tick
    pub progress_step: u8,

    /// Interval between simulated progress ticks (milliseconds)
    pub progress_interval_ms: u64,

    /// Highest simulated progress while the request is in flight
    pub upload_progress_cap: u8,

    /// Artificial delay after a successful response (milliseconds)
    pub processing_delay_ms: u64,

    /// Artificial delay before a fallback record is shown (milliseconds)
    pub fallback_delay_ms: u64,

    /// Optional request timeout (seconds); unset means wait indefinitely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fallback: FallbackPolicy::Fail,
            progress_step: 5,
            progress_interval_ms: 100,
            upload_progress_cap: 95,
            processing_delay_ms: 1000,
            fallback_delay_ms: 1500,
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Defaults with the endpoint taken from `EXTRACTION_SERVICE_URL` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = endpoint_from_env() {
            config.endpoint = endpoint;
        }
        config
    }

    /// Replace the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replace the fallback policy
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Interval between progress ticks as a Duration
    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms)
    }

    /// Processing delay as a Duration
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    /// Fallback delay as a Duration
    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_delay_ms)
    }

    /// Request timeout as a Duration, if configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), SdkError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(SdkError::Config(format!(
                "endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        if self.progress_interval_ms == 0 {
            return Err(SdkError::Config("progress_interval_ms must be greater than 0".to_string()));
        }
        if self.upload_progress_cap > 100 {
            return Err(SdkError::Config("upload_progress_cap cannot exceed 100".to_string()));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(SdkError::Config("request_timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, SdkError> {
        toml::from_str(toml_str).map_err(|e| SdkError::Config(format!("Failed to parse TOML: {}", e)))
    }
}

/// Read the endpoint override from the environment, ignoring blank values
pub fn endpoint_from_env() -> Option<String> {
    std::env::var(ENDPOINT_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
