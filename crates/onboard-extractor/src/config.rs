//! Configuration for the Extractor

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Extractor
///
/// Command vectors use `{input}` as the placeholder for the temp file path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Confidence reported for parsed records
    pub base_confidence: f64,

    /// Maximum time for a single recognition call (seconds)
    pub recognition_timeout_secs: u64,

    /// OCR command for image files
    pub image_command: Vec<String>,

    /// Text command for PDF files
    pub pdf_command: Vec<String>,
}

impl ExtractorConfig {
    /// Get the recognition timeout as a Duration
    pub fn recognition_timeout(&self) -> Duration {
        Duration::from_secs(self.recognition_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.base_confidence) {
            return Err("base_confidence must be within [0.0, 1.0]".to_string());
        }
        if self.recognition_timeout_secs == 0 {
            return Err("recognition_timeout_secs must be greater than 0".to_string());
        }
        if self.image_command.is_empty() {
            return Err("image_command must not be empty".to_string());
        }
        if self.pdf_command.is_empty() {
            return Err("pdf_command must not be empty".to_string());
        }
        for command in [&self.image_command, &self.pdf_command] {
            if !command.iter().any(|arg| arg.contains("{input}")) {
                return Err(format!("command '{}' has no {{input}} placeholder", command.join(" ")));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    /// Tesseract for images, poppler's pdftotext for PDFs
    fn default() -> Self {
        Self {
            base_confidence: 0.85,
            recognition_timeout_secs: 120,
            image_command: vec![
                "tesseract".to_string(),
                "{input}".to_string(),
                "stdout".to_string(),
            ],
            pdf_command: vec![
                "pdftotext".to_string(),
                "-layout".to_string(),
                "{input}".to_string(),
                "-".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ExtractorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_confidence() {
        let mut config = ExtractorConfig::default();
        config.base_confidence = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_command_without_placeholder() {
        let mut config = ExtractorConfig::default();
        config.image_command = vec!["tesseract".to_string(), "stdout".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ExtractorConfig::from_toml("recognition_timeout_secs = 30").unwrap();
        assert_eq!(config.recognition_timeout_secs, 30);
        assert_eq!(config.base_confidence, 0.85);
        assert_eq!(config.image_command[0], "tesseract");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config.pdf_command, parsed.pdf_command);
        assert_eq!(config.recognition_timeout_secs, parsed.recognition_timeout_secs);
    }
}
