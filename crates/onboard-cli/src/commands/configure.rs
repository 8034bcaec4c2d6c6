//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use onboard_sdk::FallbackPolicy;
use std::path::Path;

/// Execute the config command.
pub async fn execute_config(
    args: ConfigArgs,
    config: &mut Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config, path, formatter),
        ConfigAction::SetEndpoint { url } => set_endpoint(config, path, url, formatter),
        ConfigAction::SetFallback { enabled } => set_fallback(config, path, enabled, formatter),
    }
}

/// Show the effective configuration.
fn show_config(config: &Config, path: &Path, formatter: &Formatter) -> Result<()> {
    if formatter.is_json() {
        let client = config.client_config(None, false);
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "path": path.display().to_string(),
                "endpoint": client.endpoint,
                "fallback": client.fallback,
                "requestTimeoutSecs": client.request_timeout_secs,
            }))?
        );
        return Ok(());
    }

    println!("Config file: {}", path.display());
    println!("  Endpoint: {}", config.resolve_endpoint(None));
    println!("  Fallback: {}", config.fallback.as_str());
    match config.request_timeout_secs {
        Some(secs) => println!("  Request timeout: {}s", secs),
        None => println!("  Request timeout: none"),
    }
    println!("  Color: {}", config.settings.color);
    Ok(())
}

/// Set the extraction endpoint.
fn set_endpoint(config: &mut Config, path: &Path, url: String, formatter: &Formatter) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(CliError::InvalidInput(format!(
            "endpoint must be an http(s) URL, got '{}'",
            url
        )));
    }

    config.endpoint = Some(url.clone());
    config.save_to(path)?;
    println!("{}", formatter.success(&format!("Endpoint set to {}", url)));
    Ok(())
}

/// Enable or disable the mock-record fallback.
fn set_fallback(config: &mut Config, path: &Path, enabled: bool, formatter: &Formatter) -> Result<()> {
    config.fallback = if enabled {
        FallbackPolicy::MockRecord
    } else {
        FallbackPolicy::Fail
    };
    config.save_to(path)?;

    if enabled {
        println!(
            "{}",
            formatter.warning("Fallback enabled: failed extractions will show mock data")
        );
    } else {
        println!("{}", formatter.success("Fallback disabled"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_set_endpoint_and_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Table, false);

        set_endpoint(
            &mut config,
            &path,
            "http://ocr.local:5000/extract".to_string(),
            &formatter,
        )
        .unwrap();
        set_fallback(&mut config, &path, true, &formatter).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.endpoint.as_deref(), Some("http://ocr.local:5000/extract"));
        assert_eq!(loaded.fallback, FallbackPolicy::MockRecord);
    }

    #[test]
    fn test_reject_non_http_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = set_endpoint(&mut config, &path, "ftp://nope".to_string(), &formatter);
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
