//! Kind module - which identity document was uploaded

/// Kind of identity document
///
/// The display names double as the `documentType` strings on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// International passport
    Passport,

    /// National identity card
    NationalId,

    /// Driver's license
    DriversLicense,

    /// Could not be determined
    Unknown,
}

impl DocumentKind {
    /// Get the display name used in records
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Passport => "Passport",
            DocumentKind::NationalId => "National ID",
            DocumentKind::DriversLicense => "Driver's License",
            DocumentKind::Unknown => "Unknown",
        }
    }

    /// Parse a kind from its display name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "passport" => Some(DocumentKind::Passport),
            "national id" => Some(DocumentKind::NationalId),
            "driver's license" | "drivers license" => Some(DocumentKind::DriversLicense),
            "unknown" => Some(DocumentKind::Unknown),
            _ => None,
        }
    }

    /// Guess the kind from a file name alone
    ///
    /// Anything whose name mentions "passport" is a passport; everything
    /// else is assumed to be a national ID.
    pub fn from_file_name(name: &str) -> Self {
        if name.to_lowercase().contains("passport") {
            DocumentKind::Passport
        } else {
            DocumentKind::NationalId
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid document kind: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_name() {
        assert_eq!(DocumentKind::from_file_name("my_PASSPORT.jpg"), DocumentKind::Passport);
        assert_eq!(DocumentKind::from_file_name("scan-passport.pdf"), DocumentKind::Passport);
        assert_eq!(DocumentKind::from_file_name("id_front.png"), DocumentKind::NationalId);
    }

    #[test]
    fn test_parse_round_trip() {
        for kind in [
            DocumentKind::Passport,
            DocumentKind::NationalId,
            DocumentKind::DriversLicense,
            DocumentKind::Unknown,
        ] {
            assert_eq!(DocumentKind::parse(kind.as_str()), Some(kind));
        }
        assert!("bank statement".parse::<DocumentKind>().is_err());
    }
}
