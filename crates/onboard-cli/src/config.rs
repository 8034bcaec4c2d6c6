//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use onboard_sdk::{endpoint_from_env, ClientConfig, FallbackPolicy, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Extraction endpoint; unset means environment or built-in default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Behavior when extraction fails
    #[serde(default)]
    pub fallback: FallbackPolicy,

    /// Request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".onboard").join("config.toml"))
    }

    /// Load configuration from a file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Endpoint from the override, `EXTRACTION_SERVICE_URL`, the config file
    /// or the built-in default, first match wins.
    pub fn resolve_endpoint(&self, endpoint_override: Option<String>) -> String {
        endpoint_override
            .filter(|e| !e.trim().is_empty())
            .or_else(endpoint_from_env)
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Build the client configuration for one run.
    pub fn client_config(&self, endpoint_override: Option<String>, force_fallback: bool) -> ClientConfig {
        let fallback = if force_fallback {
            FallbackPolicy::MockRecord
        } else {
            self.fallback
        };

        ClientConfig {
            request_timeout_secs: self.request_timeout_secs,
            ..ClientConfig::default()
                .with_endpoint(self.resolve_endpoint(endpoint_override))
                .with_fallback(fallback)
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
