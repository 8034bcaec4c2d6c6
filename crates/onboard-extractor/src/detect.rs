//! Document kind detection from recognized text

use onboard_domain::DocumentKind;

/// Decide which kind of document the text came from
///
/// The file name only counts for passports. Matching is case-insensitive
/// and substring-based, so OCR noise around the keywords does not matter.
pub fn detect_document_kind(text: &str, file_name: &str) -> DocumentKind {
    let text = text.to_lowercase();
    let file_name = file_name.to_lowercase();

    if text.contains("passport") || file_name.contains("passport") {
        DocumentKind::Passport
    } else if text.contains("national") && text.contains("id") {
        DocumentKind::NationalId
    } else if text.contains("driver") && text.contains("license") {
        DocumentKind::DriversLicense
    } else {
        DocumentKind::Unknown
    }
}
