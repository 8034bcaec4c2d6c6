//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use onboard_domain::{
    ClientDetails, ClientProfile, ExtractedIdentityRecord, ProcessingStatus, UploadedDocument,
};
use onboard_sdk::{ExtractionOutcome, Preview, ProcessorSnapshot};
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const BAR_WIDTH: usize = 20;

/// Output formatter.
#[derive(Debug, Clone)]
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Whether output is machine-readable.
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Format an extraction outcome.
    pub fn format_outcome(&self, outcome: &ExtractionOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = match outcome {
                    ExtractionOutcome::Extracted(record) => json!({
                        "outcome": "extracted",
                        "record": record,
                    }),
                    ExtractionOutcome::Fallback { record, cause } => json!({
                        "outcome": "fallback",
                        "cause": cause,
                        "record": record,
                    }),
                };
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut out = String::new();
                if let ExtractionOutcome::Fallback { cause, .. } = outcome {
                    out.push_str(&self.warning(&format!(
                        "Extraction failed ({}); showing MOCK data, not read from the document",
                        cause
                    )));
                    out.push('\n');
                }
                out.push_str(&self.format_record(outcome.record())?);
                Ok(out)
            }
        }
    }

    /// Format an extracted record.
    pub fn format_record(&self, record: &ExtractedIdentityRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
            OutputFormat::Table => Ok(self.format_record_table(record)),
        }
    }

    /// Format a record as one table per section.
    fn format_record_table(&self, record: &ExtractedIdentityRecord) -> String {
        if record.is_empty() {
            return self.colorize("No fields extracted.", "yellow");
        }

        let mut out = Vec::new();
        for section in record.sections() {
            let mut builder = Builder::default();
            builder.push_record([section.title, ""]);
            for (label, value) in &section.rows {
                builder.push_record([*label, value.as_str()]);
            }

            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            out.push(table.to_string());
        }

        if let Some(confidence) = record.confidence {
            out.push(self.info(&format!("Confidence: {:.0}%", confidence * 100.0)));
        }

        out.join("\n")
    }

    /// Format contact details read from a message.
    pub fn format_details(&self, details: &ClientDetails) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(details)?),
            OutputFormat::Table => {
                let rows = [
                    ("First Name", &details.first_name),
                    ("Last Name", &details.last_name),
                    ("Email", &details.email),
                    ("Phone", &details.phone),
                    ("Address", &details.address),
                    ("City", &details.city),
                    ("State", &details.state),
                    ("ZIP", &details.zip),
                ];

                let mut builder = Builder::default();
                for (label, value) in rows {
                    if let Some(value) = value {
                        builder.push_record([label, value.as_str()]);
                    }
                }
                if builder.count_records() == 0 {
                    return Ok(self.colorize("No contact details found.", "yellow"));
                }

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format the local view of a document before upload.
    pub fn format_document(&self, document: &UploadedDocument, preview: &Preview) -> Result<String> {
        let preview_text = match preview {
            Preview::Image { data_url } => format!("image ({} byte data URL)", data_url.len()),
            Preview::Placeholder { icon, .. } => format!("placeholder ({})", icon),
        };

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "name": document.name,
                "mediaType": document.media_type,
                "size": document.size(),
                "displaySize": document.display_size(),
                "preview": if preview.is_image() { "image" } else { "placeholder" },
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Name", document.name.as_str()]);
                builder.push_record(["Media Type", document.media_type.as_str()]);
                builder.push_record(["Size", document.display_size().as_str()]);
                builder.push_record(["Preview", preview_text.as_str()]);

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format the result of merging a record into a profile.
    pub fn format_merge(&self, changed: &[&str], profile: &ClientProfile) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "changed": changed,
                "profile": profile,
            }))?),
            OutputFormat::Table => {
                if changed.is_empty() {
                    return Ok(self.info("Profile already up to date"));
                }
                let summary = self.success(&format!(
                    "Updated {} field(s): {}",
                    changed.len(),
                    changed.join(", ")
                ));
                Ok(format!("{}\n{}", summary, serde_json::to_string_pretty(profile)?))
            }
        }
    }

    /// Render a one-line progress bar for a snapshot.
    pub fn progress_line(&self, snapshot: &ProcessorSnapshot) -> String {
        let filled = (snapshot.progress as usize * BAR_WIDTH) / 100;
        let bar = format!(
            "{}{}",
            "#".repeat(filled),
            " ".repeat(BAR_WIDTH.saturating_sub(filled))
        );
        let status = match snapshot.status {
            ProcessingStatus::Uploading => "Uploading...",
            ProcessingStatus::Processing => "Processing...",
            ProcessingStatus::Success => "Done",
            ProcessingStatus::Error => "Failed",
            ProcessingStatus::Idle => "Ready",
        };
        format!("[{}] {:>3}% {}", self.colorize(&bar, "cyan"), snapshot.progress, status)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ExtractedIdentityRecord {
        ExtractedIdentityRecord {
            document_type: Some("National ID".to_string()),
            id_number: Some("4455667788".to_string()),
            first_name: Some("Maria".to_string()),
            last_name: Some("Lopez".to_string()),
            confidence: Some(0.85),
            ..Default::default()
        }
    }

    #[test]
    fn test_table_format_lists_sections() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_record(&sample_record()).unwrap();
        assert!(output.contains("Document Information"));
        assert!(output.contains("Personal Information"));
        assert!(output.contains("4455667788"));
        assert!(!output.contains("Nationality"));
        assert!(output.contains("Confidence: 85%"));
    }

    #[test]
    fn test_json_format_uses_wire_keys() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_record(&sample_record()).unwrap();
        assert!(output.contains("\"idNumber\""));
        assert!(output.contains("\"firstName\""));
    }

    #[test]
    fn test_fallback_is_labelled() {
        let outcome = ExtractionOutcome::Fallback {
            record: ExtractedIdentityRecord::mock_for_file_name("front.jpg"),
            cause: "Connection error: refused".to_string(),
        };

        let table = Formatter::new(OutputFormat::Table, false)
            .format_outcome(&outcome)
            .unwrap();
        assert!(table.contains("MOCK data"));

        let json = Formatter::new(OutputFormat::Json, false)
            .format_outcome(&outcome)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["outcome"], "fallback");
        assert_eq!(value["record"]["documentType"], "National ID");
    }

    #[test]
    fn test_details_table_lists_found_fields() {
        let details = ClientDetails {
            email: Some("jane@example.com".to_string()),
            zip: Some("10001".to_string()),
            ..Default::default()
        };
        let output = Formatter::new(OutputFormat::Table, false)
            .format_details(&details)
            .unwrap();
        assert!(output.contains("jane@example.com"));
        assert!(output.contains("ZIP"));
        assert!(!output.contains("Phone"));

        let empty = Formatter::new(OutputFormat::Table, false)
            .format_details(&ClientDetails::default())
            .unwrap();
        assert!(empty.contains("No contact details found"));
    }

    #[test]
    fn test_empty_record() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_record(&ExtractedIdentityRecord::default())
            .unwrap();
        assert!(output.contains("No fields extracted"));
    }

    #[test]
    fn test_progress_line() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let snapshot = ProcessorSnapshot {
            status: ProcessingStatus::Uploading,
            progress: 45,
            ..Default::default()
        };
        assert_eq!(
            formatter.progress_line(&snapshot),
            "[#########           ]  45% Uploading..."
        );
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
