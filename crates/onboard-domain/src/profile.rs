//! Client profile - the caller-owned record a form is filled into

use crate::record::{present, ExtractedIdentityRecord};
use serde::{Deserialize, Serialize};

/// Working record of a prospective policyholder
///
/// Fields start empty and are filled by manual entry, by merging an
/// extracted record, or by merging [`ClientDetails`] read from a chat message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientProfile {
    /// Given name
    pub first_name: String,
    /// Middle name
    pub middle_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// State or region
    pub state: String,
    /// Postal code
    pub zip: String,
    /// Identification number
    pub id_number: String,
    /// Date of birth
    pub date_of_birth: String,
    /// Sex
    pub sex: String,
    /// Kind of document the identity came from
    pub document_type: String,
}

impl ClientProfile {
    /// Copy present fields of an extracted record into this profile
    ///
    /// A field is only overwritten when the record carries a non-blank value
    /// for it; absent or blank extracted fields leave the existing value
    /// untouched. Contact details (email, phone, city, state, zip) are never
    /// touched since documents do not carry them.
    ///
    /// Returns the camelCase names of the fields that changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use onboard_domain::{ClientProfile, ExtractedIdentityRecord};
    ///
    /// let mut profile = ClientProfile {
    ///     first_name: "Jane".to_string(),
    ///     email: "jane@example.com".to_string(),
    ///     ..Default::default()
    /// };
    /// let record = ExtractedIdentityRecord {
    ///     last_name: Some("Doe".to_string()),
    ///     ..Default::default()
    /// };
    ///
    /// let changed = profile.merge_extracted(&record);
    /// assert_eq!(changed, vec!["lastName"]);
    /// assert_eq!(profile.first_name, "Jane");
    /// assert_eq!(profile.last_name, "Doe");
    /// ```
    pub fn merge_extracted(&mut self, record: &ExtractedIdentityRecord) -> Vec<&'static str> {
        let pairs: [(&'static str, &mut String, &Option<String>); 8] = [
            ("firstName", &mut self.first_name, &record.first_name),
            ("middleName", &mut self.middle_name, &record.middle_name),
            ("lastName", &mut self.last_name, &record.last_name),
            ("dateOfBirth", &mut self.date_of_birth, &record.date_of_birth),
            ("sex", &mut self.sex, &record.sex),
            ("idNumber", &mut self.id_number, &record.id_number),
            ("documentType", &mut self.document_type, &record.document_type),
            ("address", &mut self.address, &record.address),
        ];
        apply_present(pairs)
    }

    /// Copy present contact details into this profile
    ///
    /// Same rule as [`merge_extracted`](Self::merge_extracted): blank or
    /// absent details never overwrite. Returns the camelCase names of the
    /// fields that changed.
    pub fn merge_details(&mut self, details: &ClientDetails) -> Vec<&'static str> {
        let pairs: [(&'static str, &mut String, &Option<String>); 8] = [
            ("firstName", &mut self.first_name, &details.first_name),
            ("lastName", &mut self.last_name, &details.last_name),
            ("email", &mut self.email, &details.email),
            ("phone", &mut self.phone, &details.phone),
            ("address", &mut self.address, &details.address),
            ("city", &mut self.city, &details.city),
            ("state", &mut self.state, &details.state),
            ("zip", &mut self.zip, &details.zip),
        ];
        apply_present(pairs)
    }

    /// Given, middle and family names joined by spaces
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether every field is blank
    pub fn is_blank(&self) -> bool {
        *self == ClientProfile::default()
    }
}

/// Contact details picked out of free text
///
/// A partial profile: only fields that were found are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetails {
    /// Given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Two-letter state code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl ClientDetails {
    /// Whether nothing was found
    pub fn is_empty(&self) -> bool {
        *self == ClientDetails::default()
    }
}

fn apply_present<const N: usize>(
    pairs: [(&'static str, &mut String, &Option<String>); N],
) -> Vec<&'static str> {
    let mut changed = Vec::new();
    for (name, slot, value) in pairs {
        if let Some(v) = present(value) {
            if slot.as_str() != v {
                *slot = v.to_string();
                changed.push(name);
            }
        }
    }
    changed
}
