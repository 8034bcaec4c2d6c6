//! Processing status for one extraction session

use serde::{Deserialize, Serialize};

/// Where a processing session currently stands
///
/// Sessions move `Idle → Uploading → Processing → {Success, Error}`.
/// Selecting a new document resets to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    /// Nothing submitted yet
    #[default]
    Idle,

    /// Request in flight
    Uploading,

    /// Response received, artificial delay running
    Processing,

    /// A record is available
    Success,

    /// The session failed
    Error,
}

impl ProcessingStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStatus::Idle => "idle",
            ProcessingStatus::Uploading => "uploading",
            ProcessingStatus::Processing => "processing",
            ProcessingStatus::Success => "success",
            ProcessingStatus::Error => "error",
        }
    }

    /// Whether the session has finished, one way or the other
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProcessingStatus::Success | ProcessingStatus::Error)
    }

    /// Whether moving to `next` is a legal transition
    pub fn can_transition_to(&self, next: ProcessingStatus) -> bool {
        use ProcessingStatus::*;
        match (self, next) {
            // Any state may be reset
            (_, Idle) => true,
            (Idle, Uploading) => true,
            (Success, Uploading) | (Error, Uploading) => true,
            (Uploading, Processing) | (Uploading, Error) => true,
            (Processing, Success) | (Processing, Error) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
