//! Parse recognized document text into identity fields

use crate::detect::detect_document_kind;
use once_cell::sync::Lazy;
use onboard_domain::ExtractedIdentityRecord;
use regex::Regex;
use tracing::debug;

// Separators allowed between a label and its value; never a line break.
const SEP: &str = r"[.:# \t]*";
const DATE: &str = r"(\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4})";

static ID_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(?:ID|id|No|NO|Number)\b",
        r"\b(?:Passport|passport)\b",
        r"\b(?:Serial|serial)\b",
    ]
    .iter()
    .map(|label| {
        Regex::new(&format!(r"{label}{SEP}([A-Z0-9]*[0-9][A-Z0-9]*)\b")).expect("valid id pattern")
    })
    .collect()
});

static FULL_NAME: Lazy<Regex> =
    Lazy::new(|| labelled(r"\b(?:Name|name)\b", r"([A-Za-z][A-Za-z \t]*)"));

static GIVEN_NAMES: Lazy<Regex> =
    Lazy::new(|| labelled(r"(?i)\bgiven\s+names?\b", r"([A-Za-z][A-Za-z \t]*)"));

static SURNAME: Lazy<Regex> =
    Lazy::new(|| labelled(r"(?i)\bsurname\b", r"([A-Za-z][A-Za-z \t]*)"));

static BIRTH_DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        labelled(r"(?:Date of Birth|DOB|Birth Date)", DATE),
        labelled(r"(?:Born|born)", DATE),
    ]
});

static SEX: Lazy<Regex> =
    Lazy::new(|| labelled(r"(?i)\b(?:sex|gender)", r"(male|female|m|f)\b"));

static NATIONALITY: Lazy<Regex> =
    Lazy::new(|| labelled(r"\b(?:Nationality|nationality)", r"([A-Za-z][A-Za-z \t]*)"));

static ISSUE_DATE: Lazy<Regex> =
    Lazy::new(|| labelled(r"(?i)(?:date of issue|issue date|issued)", DATE));

static EXPIRY_DATE: Lazy<Regex> = Lazy::new(|| {
    labelled(
        r"(?i)(?:date of expiry|expiry date|expiry|expires|valid until)",
        DATE,
    )
});

static ADDRESS: Lazy<Regex> = Lazy::new(|| {
    labelled(
        r"\b(?:Address|address)",
        r"([A-Za-z0-9][A-Za-z0-9 \t.,#\-]*)",
    )
});

fn labelled(label: &str, value: &str) -> Regex {
    Regex::new(&format!("{label}{SEP}{value}")).expect("valid field pattern")
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Split a full name into first, middle and last
///
/// Three or more words give first, second, and the rest joined; two words
/// give first and last; a single word is the first name only.
///
/// # Examples
///
/// ```
/// use onboard_extractor::split_full_name;
///
/// let (first, middle, last) = split_full_name("Maria de los Santos");
/// assert_eq!(first.as_deref(), Some("Maria"));
/// assert_eq!(middle.as_deref(), Some("de"));
/// assert_eq!(last.as_deref(), Some("los Santos"));
/// ```
pub fn split_full_name(full_name: &str) -> (Option<String>, Option<String>, Option<String>) {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    match parts.as_slice() {
        [] => (None, None, None),
        [only] => (Some(only.to_string()), None, None),
        [first, last] => (Some(first.to_string()), None, Some(last.to_string())),
        [first, middle, rest @ ..] => (
            Some(first.to_string()),
            Some(middle.to_string()),
            Some(rest.join(" ")),
        ),
    }
}

/// Extract identity fields from recognized text
///
/// Every field is best-effort: labels that are missing or unreadable leave
/// the field unset. The record always carries a document type and the
/// given base confidence.
pub fn parse_identity_text(text: &str, file_name: &str, base_confidence: f64) -> ExtractedIdentityRecord {
    let mut record = ExtractedIdentityRecord {
        document_type: Some(detect_document_kind(text, file_name).as_str().to_string()),
        confidence: Some(base_confidence),
        ..Default::default()
    };

    record.id_number = ID_PATTERNS.iter().find_map(|re| capture(re, text));

    if let Some(full_name) = capture(&FULL_NAME, text) {
        let (first, middle, last) = split_full_name(&full_name);
        record.first_name = first;
        record.middle_name = middle;
        record.last_name = last;
    } else {
        if let Some(given) = capture(&GIVEN_NAMES, text) {
            let mut words = given.split_whitespace();
            record.first_name = words.next().map(str::to_string);
            let rest: Vec<&str> = words.collect();
            if !rest.is_empty() {
                record.middle_name = Some(rest.join(" "));
            }
        }
        record.last_name = capture(&SURNAME, text);
    }

    record.date_of_birth = BIRTH_DATE_PATTERNS.iter().find_map(|re| capture(re, text));

    record.sex = capture(&SEX, text).and_then(|s| match s.to_uppercase().as_str() {
        "M" | "MALE" => Some("Male".to_string()),
        "F" | "FEMALE" => Some("Female".to_string()),
        _ => None,
    });

    record.nationality = capture(&NATIONALITY, text);
    record.issued_date = capture(&ISSUE_DATE, text);
    record.expiry_date = capture(&EXPIRY_DATE, text);
    record.address = capture(&ADDRESS, text);

    debug!(
        "Parsed {} chars from '{}': type={:?} id={:?}",
        text.len(),
        file_name,
        record.document_type,
        record.id_number
    );

    record
}
