//! Onboard Domain Layer
//!
//! Core value types for the client-onboarding document flow. Everything
//! else in the workspace (intake, extraction client, extraction service, CLI)
//! depends on these definitions.
//!
//! ## Key Concepts
//!
//! - **UploadedDocument**: a user-selected file held in memory, never persisted
//! - **ExtractedIdentityRecord**: advisory identity fields returned by extraction
//! - **ClientProfile**: the caller-owned working record of a policyholder
//! - **ClientDetails**: contact details read from a chat message
//! - **ProcessingStatus**: `idle → uploading → processing → {success, error}`
//!
//! ## Architecture
//!
//! Pure data and merge rules only. Network, file system and OCR concerns
//! live in `onboard-sdk`, `onboard-extractor` and `onboard-service`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod kind;
pub mod media;
pub mod profile;
pub mod record;
pub mod session;
pub mod status;

// Re-exports for convenience
pub use document::UploadedDocument;
pub use kind::DocumentKind;
pub use profile::{ClientDetails, ClientProfile};
pub use record::{ExtractedIdentityRecord, RecordSection};
pub use session::SessionId;
pub use status::ProcessingStatus;
