//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::commands::merge::{read_profile, write_profile};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use onboard_domain::ProcessingStatus;
use onboard_sdk::{load_document, DocumentProcessor, FAILURE_MESSAGE};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Execute the extract command.
pub async fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let client_config = config.client_config(args.endpoint.clone(), args.fallback);
    debug!("Using endpoint {}", client_config.endpoint);

    let document = load_document(&args.file).await?;

    // The completion callback merges straight into the caller's profile
    let profile = match &args.merge_into {
        Some(path) => Some(Arc::new(Mutex::new(read_profile(path)?))),
        None => None,
    };
    let changed: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

    let mut processor = DocumentProcessor::from_config(client_config)?;
    if let Some(profile) = &profile {
        let profile = Arc::clone(profile);
        let changed = Arc::clone(&changed);
        processor = processor.on_complete(move |outcome| {
            if let (Ok(mut profile), Ok(mut changed)) = (profile.lock(), changed.lock()) {
                *changed = profile.merge_extracted(outcome.record());
            }
        });
    }
    processor.select(document);

    let progress = if args.quiet || formatter.is_json() {
        None
    } else {
        let mut rx = processor.subscribe();
        let bar = formatter.clone();
        Some(tokio::spawn(async move {
            let mut stderr = std::io::stderr();
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow_and_update().clone();
                if snapshot.status == ProcessingStatus::Idle {
                    continue;
                }
                let _ = write!(stderr, "\r{}", bar.progress_line(&snapshot));
                let _ = stderr.flush();
                if snapshot.status.is_terminal() {
                    break;
                }
            }
            let _ = writeln!(stderr);
        }))
    };

    let result = processor.process().await;
    let snapshot = processor.snapshot();
    drop(processor);
    if let Some(handle) = progress {
        let _ = handle.await;
    }

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            return Err(CliError::ExtractionFailed {
                message: snapshot.error.unwrap_or_else(|| FAILURE_MESSAGE.to_string()),
                cause: snapshot.cause.unwrap_or_else(|| e.to_string()),
            })
        }
    };

    println!("{}", formatter.format_outcome(&outcome)?);

    if let (Some(path), Some(profile)) = (&args.merge_into, &profile) {
        let profile = profile
            .lock()
            .map_err(|_| CliError::InvalidInput("profile lock poisoned".to_string()))?
            .clone();
        let changed = changed
            .lock()
            .map_err(|_| CliError::InvalidInput("profile lock poisoned".to_string()))?
            .clone();

        if !changed.is_empty() {
            write_profile(path, &profile)?;
        }
        if !formatter.is_json() {
            println!("{}", formatter.format_merge(&changed, &profile)?);
        }
    }

    Ok(())
}
