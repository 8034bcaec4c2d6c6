//! Configuration file parsing for the extraction service.
//!
//! Loads the bind address, upload limit and extraction backend from TOML.

use onboard_extractor::ExtractorConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Service configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A field has an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Service configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 5000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Largest accepted request body in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Extraction backend
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Which backend answers `POST /extract`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackendConfig {
    /// Fixed mock record after a delay
    Mock {
        /// Artificial latency in milliseconds
        #[serde(default = "default_mock_delay_ms")]
        delay_ms: u64,
        /// Confidence attached to the mock record
        #[serde(default = "default_mock_confidence")]
        confidence: f64,
    },

    /// External OCR command plus field parser
    Ocr(ExtractorConfig),

    /// Forward uploads to another extraction endpoint
    Proxy {
        /// Upstream `/extract` URL
        upstream: String,
        /// Optional upstream request timeout in seconds
        #[serde(default)]
        timeout_secs: Option<u64>,
    },
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig::Mock {
            delay_ms: default_mock_delay_ms(),
            confidence: default_mock_confidence(),
        }
    }
}

impl BackendConfig {
    /// Backend name as reported by `/health`
    pub fn name(&self) -> &'static str {
        match self {
            BackendConfig::Mock { .. } => "mock",
            BackendConfig::Ocr(_) => "ocr",
            BackendConfig::Proxy { .. } => "proxy",
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    5000
}

/// Default upload limit: 10 MB
fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_mock_delay_ms() -> u64 {
    2000
}

fn default_mock_confidence() -> f64 {
    0.95
}

impl ServiceConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ServiceConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid("max_upload_bytes must be greater than 0".to_string()));
        }
        match &self.backend {
            BackendConfig::Mock { confidence, .. } => {
                if !(0.0..=1.0).contains(confidence) {
                    return Err(ConfigError::Invalid(
                        "mock confidence must be within [0.0, 1.0]".to_string(),
                    ));
                }
            }
            BackendConfig::Ocr(extractor) => {
                extractor.validate().map_err(ConfigError::Invalid)?;
            }
            BackendConfig::Proxy { upstream, .. } => {
                if !(upstream.starts_with("http://") || upstream.starts_with("https://")) {
                    return Err(ConfigError::Invalid(format!(
                        "proxy upstream must be an http(s) URL, got '{}'",
                        upstream
                    )));
                }
            }
        }
        Ok(())
    }

    /// Create a default configuration for local development
    pub fn default_dev_config() -> Self {
        ServiceConfig {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            max_upload_bytes: default_max_upload_bytes(),
            backend: BackendConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default_dev_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.backend.name(), "mock");
        assert!(matches!(config.backend, BackendConfig::Mock { delay_ms: 2000, .. }));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ServiceConfig::from_toml("").unwrap();
        assert_eq!(config.bind_port, 5000);
        assert_eq!(config.backend.name(), "mock");
    }

    #[test]
    fn test_parse_ocr_backend() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            max_upload_bytes = 1048576

            [backend]
            kind = "ocr"
            base_confidence = 0.7
            image_command = ["tesseract", "{input}", "stdout", "-l", "eng"]
        "#;

        let config = ServiceConfig::from_toml(toml).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.max_upload_bytes, 1_048_576);
        match config.backend {
            BackendConfig::Ocr(extractor) => {
                assert_eq!(extractor.base_confidence, 0.7);
                assert_eq!(extractor.image_command.len(), 5);
                assert_eq!(extractor.pdf_command[0], "pdftotext");
            }
            other => panic!("expected ocr backend, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_proxy_backend() {
        let toml = r#"
            [backend]
            kind = "proxy"
            upstream = "http://ocr.internal:5000/extract"
            timeout_secs = 30
        "#;

        let config = ServiceConfig::from_toml(toml).unwrap();
        assert_eq!(config.backend.name(), "proxy");
    }

    #[test]
    fn test_invalid_proxy_upstream() {
        let toml = r#"
            [backend]
            kind = "proxy"
            upstream = "ocr.internal"
        "#;
        assert!(matches!(
            ServiceConfig::from_toml(toml),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_invalid_mock_confidence() {
        let toml = r#"
            [backend]
            kind = "mock"
            confidence = 1.5
        "#;
        assert!(ServiceConfig::from_toml(toml).is_err());
    }
}
