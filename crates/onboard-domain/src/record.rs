//! Extracted identity record and its presentation

use crate::kind::DocumentKind;
use serde::{Deserialize, Serialize};

/// Identity fields extracted from a document
///
/// Every field is optional and advisory. On the wire the record is a JSON
/// object with camelCase keys; absent fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedIdentityRecord {
    /// Document type, e.g. "Passport"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,

    /// Document serial number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    /// Personal identification number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,

    /// Given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Middle name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    /// Family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Date of birth as printed on the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    /// Sex, normalised to "Male" / "Female" where recognised
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,

    /// Issue date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<String>,

    /// Expiry date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,

    /// Nationality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,

    /// Postal address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Extraction confidence in `[0, 1]`, when the service reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// A titled group of label/value rows for display
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSection {
    /// Section heading
    pub title: &'static str,

    /// Label/value pairs in display order
    pub rows: Vec<(&'static str, String)>,
}

impl ExtractedIdentityRecord {
    /// The fixed record substituted when no real extraction is available
    ///
    /// Only the document type depends on the input: names containing
    /// "passport" (any case) yield "Passport", everything else "National ID".
    ///
    /// # Examples
    ///
    /// ```
    /// use onboard_domain::ExtractedIdentityRecord;
    ///
    /// let record = ExtractedIdentityRecord::mock_for_file_name("My_Passport.jpg");
    /// assert_eq!(record.document_type.as_deref(), Some("Passport"));
    /// ```
    pub fn mock_for_file_name(file_name: &str) -> Self {
        Self {
            document_type: Some(DocumentKind::from_file_name(file_name).as_str().to_string()),
            serial_number: Some("A123456789".to_string()),
            id_number: Some("987654321".to_string()),
            first_name: Some("John".to_string()),
            middle_name: Some("Robert".to_string()),
            last_name: Some("Smith".to_string()),
            date_of_birth: Some("1985-06-15".to_string()),
            sex: Some("Male".to_string()),
            issued_date: Some("2020-01-10".to_string()),
            expiry_date: Some("2030-01-09".to_string()),
            nationality: Some("United States".to_string()),
            address: Some("123 Main St, New York, NY 10001".to_string()),
            confidence: None,
        }
    }

    /// Attach a confidence score
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Whether no identity field carries a value
    pub fn is_empty(&self) -> bool {
        self.text_fields().iter().all(|(_, v)| present(v).is_none())
    }

    /// Given, middle and family names joined by spaces
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .filter_map(|v| present(v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Parsed document kind, if the type string is one we know
    pub fn document_kind(&self) -> Option<DocumentKind> {
        self.document_type.as_deref().and_then(DocumentKind::parse)
    }

    /// Render the record as display sections
    ///
    /// Type, serial and id number, first and last name, birth date and sex
    /// are always listed (blank when absent); the remaining rows only appear
    /// when the field has a value.
    pub fn sections(&self) -> Vec<RecordSection> {
        let mut document = RecordSection {
            title: "Document Information",
            rows: Vec::new(),
        };
        always(&mut document, "Document Type", &self.document_type);
        always(&mut document, "Serial Number", &self.serial_number);
        always(&mut document, "ID Number", &self.id_number);
        optional(&mut document, "Issued Date", &self.issued_date);
        optional(&mut document, "Expiry Date", &self.expiry_date);

        let mut personal = RecordSection {
            title: "Personal Information",
            rows: Vec::new(),
        };
        always(&mut personal, "First Name", &self.first_name);
        optional(&mut personal, "Middle Name", &self.middle_name);
        always(&mut personal, "Last Name", &self.last_name);
        always(&mut personal, "Date of Birth", &self.date_of_birth);
        always(&mut personal, "Sex", &self.sex);
        optional(&mut personal, "Nationality", &self.nationality);
        optional(&mut personal, "Address", &self.address);

        vec![document, personal]
    }

    fn text_fields(&self) -> [(&'static str, &Option<String>); 12] {
        [
            ("documentType", &self.document_type),
            ("serialNumber", &self.serial_number),
            ("idNumber", &self.id_number),
            ("firstName", &self.first_name),
            ("middleName", &self.middle_name),
            ("lastName", &self.last_name),
            ("dateOfBirth", &self.date_of_birth),
            ("sex", &self.sex),
            ("issuedDate", &self.issued_date),
            ("expiryDate", &self.expiry_date),
            ("nationality", &self.nationality),
            ("address", &self.address),
        ]
    }
}

/// The value of a field if it is set and not blank
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn always(section: &mut RecordSection, label: &'static str, value: &Option<String>) {
    section
        .rows
        .push((label, present(value).unwrap_or_default().to_string()));
}

fn optional(section: &mut RecordSection, label: &'static str, value: &Option<String>) {
    if let Some(v) = present(value) {
        section.rows.push((label, v.to_string()));
    }
}
