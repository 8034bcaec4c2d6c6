//! Pick client contact details out of a free-text chat message

use once_cell::sync::Lazy;
use onboard_domain::ClientDetails;
use regex::Regex;
use tracing::debug;

// Optional "is" plus separators between a keyword and its value.
const LEAD: &str = r"(?:\s+is)?[\s:]+";

static NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\bname{LEAD}([a-z]+)(?:[ \t]+([a-z]+))?")).expect("valid name pattern")
});

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\be-?mail{LEAD}([a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{{2,}})"
    ))
    .expect("valid email pattern")
});

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\bphone(?:\s+number)?{LEAD}(\(?\d{{3}}\)?[\-. ]?\d{{3}}[\-. ]?\d{{4}})\b"
    ))
    .expect("valid phone pattern")
});

static ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?im)\baddress{LEAD}(.+?)(?:,|\s+in\b|$)")).expect("valid address pattern")
});

// The label is case-insensitive, the state code that may end the city is not.
static CITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?m)\b(?i:in|city|from){LEAD}([A-Za-z][A-Za-z ]*?)(?:,|[ \t]+[A-Z]{{2}}\b|[ \t]+\d{{5}}\b|[ \t]*$)"
    ))
    .expect("valid city pattern")
});

static STATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        format!(r"(?i)\bstate{LEAD}([a-z]{{2}})\b"),
        r"\b([A-Z]{2})[ \t]+\d{5}\b".to_string(),
        r"\b(?i:in)[ \t]+([A-Z]{2})\b".to_string(),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid state pattern"))
    .collect()
});

static ZIP_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        format!(r"(?i)\b(?:zip|zipcode|zip code|postal code){LEAD}(\d{{5}}(?:-\d{{4}})?)\b"),
        r"\b(\d{5}(?:-\d{4})?)\b".to_string(),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid zip pattern"))
    .collect()
});

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Extract contact details from a chat message
///
/// Best-effort keyword matching: "my name is", "email", "phone", "address",
/// "in <city>", a two-letter state and a five-digit zip. Anything not found
/// stays unset, so the result can be merged with
/// [`ClientProfile::merge_details`](onboard_domain::ClientProfile::merge_details)
/// without clearing existing values.
///
/// # Examples
///
/// ```
/// use onboard_extractor::extract_client_details;
///
/// let details = extract_client_details("Hi, my name is Jane Doe and my email is jane@example.com");
/// assert_eq!(details.first_name.as_deref(), Some("Jane"));
/// assert_eq!(details.last_name.as_deref(), Some("Doe"));
/// assert_eq!(details.email.as_deref(), Some("jane@example.com"));
/// ```
pub fn extract_client_details(message: &str) -> ClientDetails {
    let mut details = ClientDetails::default();

    if let Some(caps) = NAME.captures(message) {
        details.first_name = caps.get(1).map(|m| m.as_str().to_string());
        details.last_name = caps.get(2).map(|m| m.as_str().to_string());
    }

    details.email = capture(&EMAIL, message);
    details.phone = capture(&PHONE, message);
    details.address = capture(&ADDRESS, message);
    details.city = capture(&CITY, message);
    details.state = STATE_PATTERNS
        .iter()
        .find_map(|re| capture(re, message))
        .map(|s| s.to_uppercase());
    details.zip = ZIP_PATTERNS.iter().find_map(|re| capture(re, message));

    debug!("Read {} chars of message: {:?}", message.len(), details);

    details
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        let details = extract_client_details("My name is John Smith");
        assert_eq!(details.first_name.as_deref(), Some("John"));
        assert_eq!(details.last_name.as_deref(), Some("Smith"));

        let details = extract_client_details("name: Cher");
        assert_eq!(details.first_name.as_deref(), Some("Cher"));
        assert!(details.last_name.is_none());
    }

    #[test]
    fn test_email() {
        let details = extract_client_details("you can reach me by email at nowhere, email is j.doe+ins@mail.example.org");
        assert_eq!(details.email.as_deref(), Some("j.doe+ins@mail.example.org"));
        assert!(extract_client_details("email is not-an-address").email.is_none());
    }

    #[test]
    fn test_phone() {
        let details = extract_client_details("phone is (555) 123-4567");
        assert_eq!(details.phone.as_deref(), Some("(555) 123-4567"));

        let details = extract_client_details("Phone number: 555.123.4567");
        assert_eq!(details.phone.as_deref(), Some("555.123.4567"));
        assert!(extract_client_details("phone is 12345").phone.is_none());
    }

    #[test]
    fn test_address_stops_at_comma_or_in() {
        let details = extract_client_details("My address is 42 Oak Street, Springfield");
        assert_eq!(details.address.as_deref(), Some("42 Oak Street"));

        let details = extract_client_details("address 9 Elm Road in Austin");
        assert_eq!(details.address.as_deref(), Some("9 Elm Road"));
    }

    #[test]
    fn test_city() {
        let details = extract_client_details("I live in Springfield, IL 62704");
        assert_eq!(details.city.as_deref(), Some("Springfield"));

        let details = extract_client_details("I'm from New York NY 10001");
        assert_eq!(details.city.as_deref(), Some("New York"));

        let details = extract_client_details("city is Austin");
        assert_eq!(details.city.as_deref(), Some("Austin"));
    }

    #[test]
    fn test_state() {
        let details = extract_client_details("I live in Springfield, IL 62704");
        assert_eq!(details.state.as_deref(), Some("IL"));

        let details = extract_client_details("state is tx");
        assert_eq!(details.state.as_deref(), Some("TX"));

        // A capitalised city is not a state code
        assert!(extract_client_details("I live in Springfield").state.is_none());
    }

    #[test]
    fn test_zip() {
        let details = extract_client_details("zip code is 10001-1234");
        assert_eq!(details.zip.as_deref(), Some("10001-1234"));

        let details = extract_client_details("Springfield, IL 62704");
        assert_eq!(details.zip.as_deref(), Some("62704"));

        // Digits inside a phone number are not a zip
        assert!(extract_client_details("phone is 5551234567").zip.is_none());
    }

    #[test]
    fn test_full_message() {
        let message = "Hi! My name is Maria Lopez. My email is maria@example.com and my \
            phone is 555-987-6543. My address is 7 Harbour Road, in Springfield, IL 62704";
        let details = extract_client_details(message);
        assert_eq!(details.first_name.as_deref(), Some("Maria"));
        assert_eq!(details.last_name.as_deref(), Some("Lopez"));
        assert_eq!(details.email.as_deref(), Some("maria@example.com"));
        assert_eq!(details.phone.as_deref(), Some("555-987-6543"));
        assert_eq!(details.address.as_deref(), Some("7 Harbour Road"));
        assert_eq!(details.city.as_deref(), Some("Springfield"));
        assert_eq!(details.state.as_deref(), Some("IL"));
        assert_eq!(details.zip.as_deref(), Some("62704"));
    }

    #[test]
    fn test_nothing_found() {
        assert!(extract_client_details("Hello there").is_empty());
    }
}
