//! Session module - identifies one upload/extraction cycle

use std::fmt;

/// Identifier for a processing session based on UUIDv7
///
/// A new session begins every time a document is selected. The id shows up
/// in processor snapshots and log lines so one upload can be followed
/// through the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(u128);

impl SessionId {
    /// Generate a new UUIDv7-based SessionId
    ///
    /// # Examples
    ///
    /// ```
    /// use onboard_domain::SessionId;
    ///
    /// let first = SessionId::new();
    /// let second = SessionId::new();
    /// assert_ne!(first, second);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Parse a SessionId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid session id: {}", e))
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}
