//! Onboard Rust SDK
//!
//! Client side of the identity-document flow: file intake and previews, the
//! HTTP extraction client, and the processor driving the
//! `idle → uploading → processing → {success, error}` state machine.
//!
//! # Example
//!
//! ```no_run
//! use onboard_sdk::{load_document, ClientConfig, DocumentProcessor};
//!
//! # async fn run() -> Result<(), onboard_sdk::SdkError> {
//! let mut processor = DocumentProcessor::from_config(ClientConfig::from_env())?;
//! processor.select(load_document("passport.jpg").await?);
//!
//! let outcome = processor.process().await?;
//! println!("{}", outcome.record().full_name());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod intake;
mod processor;

pub use client::{ExtractionClient, ExtractionEndpoint, FILE_FIELD};
pub use config::{endpoint_from_env, ClientConfig, FallbackPolicy, DEFAULT_ENDPOINT, ENDPOINT_ENV};
pub use error::SdkError;
pub use intake::{build_preview, load_document, select_file, Preview, PLACEHOLDER_ICON};
pub use processor::{
    CompletionCallback, DocumentProcessor, ExtractionOutcome, ProcessorSnapshot, FAILURE_MESSAGE,
};
