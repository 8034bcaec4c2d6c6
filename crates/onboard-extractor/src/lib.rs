//! Onboard Extractor
//!
//! Turns identity-document files into [`ExtractedIdentityRecord`]s.
//!
//! # Overview
//!
//! Extraction runs in three steps: the upload's file name decides its
//! [`SourceFormat`], a [`TextRecognizer`] turns the bytes into text, and
//! [`parse_identity_text`] pulls the identity fields out of that text with
//! regular expressions. Contact details typed into a chat message go through
//! [`extract_client_details`] instead.
//!
//! # Architecture
//!
//! ```text
//! UploadedDocument → SourceFormat → TextRecognizer → text → parser → record
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use onboard_domain::UploadedDocument;
//! use onboard_extractor::{ExtractorConfig, IdentityExtractor, MockRecognizer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let recognizer = MockRecognizer::new("PASSPORT\nName: John Robert Smith\nSex: M");
//! let extractor = IdentityExtractor::new(recognizer, ExtractorConfig::default());
//!
//! let document = UploadedDocument::new("scan.png", std::fs::read("scan.png")?);
//! let record = extractor.extract(&document).await?;
//!
//! println!("{}", record.full_name());
//! # Ok(())
//! # }
//! ```
//!
//! [`ExtractedIdentityRecord`]: onboard_domain::ExtractedIdentityRecord

#![warn(missing_docs)]

mod config;
mod detect;
mod error;
mod extractor;
mod format;
mod message;
mod parser;
mod recognizer;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use detect::detect_document_kind;
pub use error::{ExtractorError, RecognizerError};
pub use extractor::IdentityExtractor;
pub use format::SourceFormat;
pub use message::extract_client_details;
pub use parser::{parse_identity_text, split_full_name};
pub use recognizer::{CommandRecognizer, MockRecognizer, TextRecognizer};
