//! The flat contact record exchanged at every boundary.

use serde::{Deserialize, Serialize};

use crate::rfc::vcard::{Address, Organization, StructuredName, VCard};

/// Placeholder shown for records with no usable name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// One contact, normalized from a vCard block.
///
/// Every field is independently optional. List fields are empty rather than
/// absent and keep source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    pub full_name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub phone_numbers: Vec<String>,
    pub emails: Vec<String>,
    /// Each address flattened to `street, city, region, postal_code, country`.
    pub addresses: Vec<String>,
    pub organization: Option<String>,
    pub job_title: Option<String>,
    /// Date text as written in the source; not validated.
    pub birthday: Option<String>,
    pub notes: Option<String>,
}

impl ContactRecord {
    /// Creates a record with only a full name.
    #[must_use]
    pub fn named(full_name: impl Into<String>) -> Self {
        Self {
            full_name: Some(full_name.into()),
            ..Self::default()
        }
    }

    /// Returns the full name if it is present and non-empty.
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns `"given family"` built from the name components, if any.
    #[must_use]
    pub fn composed_name(&self) -> Option<String> {
        compose_name(self.given_name.as_deref(), self.family_name.as_deref())
    }

    /// Name for list views: full name, else the composed name, else
    /// [`UNKNOWN_NAME`].
    #[must_use]
    pub fn display_name(&self) -> String {
        self.full_name()
            .map(str::to_string)
            .or_else(|| self.composed_name())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string())
    }

    /// Returns the first phone number, or an empty string if there is none.
    #[must_use]
    pub fn primary_phone(&self) -> &str {
        self.phone_numbers.first().map_or("", String::as_str)
    }

    /// Returns whether no field is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Joins given and family name with a space, ignoring empty parts.
pub(crate) fn compose_name(given: Option<&str>, family: Option<&str>) -> Option<String> {
    let composed = format!("{} {}", given.unwrap_or_default(), family.unwrap_or_default());
    let trimmed = composed.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

impl From<&VCard> for ContactRecord {
    fn from(card: &VCard) -> Self {
        let name = card.name();
        let given_name = name.map(StructuredName::given_text).and_then(non_empty);
        let family_name = name.map(StructuredName::family_text).and_then(non_empty);

        let full_name = card
            .formatted_name()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| compose_name(given_name.as_deref(), family_name.as_deref()));

        Self {
            full_name,
            given_name,
            family_name,
            phone_numbers: card.telephones().into_iter().map(str::to_string).collect(),
            emails: card.emails().into_iter().map(str::to_string).collect(),
            addresses: card.addresses().into_iter().map(Address::one_line).collect(),
            organization: card.organization().map(Organization::joined).and_then(non_empty),
            job_title: card.title().map(str::to_string).and_then(non_empty),
            birthday: card.birthday().map(str::to_string).and_then(non_empty),
            notes: card.note().map(str::to_string).and_then(non_empty),
        }
    }
}
