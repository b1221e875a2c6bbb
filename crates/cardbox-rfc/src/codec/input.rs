//! Loosely shaped contact input, as handed over by UI layers and JSON.

use serde::{Deserialize, Serialize};

use super::record::ContactRecord;

/// A field that accepts either a bare string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl Default for OneOrMany {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for OneOrMany {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany {
    fn from(value: [&str; N]) -> Self {
        Self::Many(value.iter().map(|s| (*s).to_string()).collect())
    }
}

/// Contact fields as a caller supplies them.
///
/// List fields may be a single string, a list, `null`, or missing.
/// Converting into a [`ContactRecord`] always yields lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInput {
    pub full_name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub phone_numbers: Option<OneOrMany>,
    pub emails: Option<OneOrMany>,
    pub addresses: Option<OneOrMany>,
    pub organization: Option<String>,
    pub job_title: Option<String>,
    pub birthday: Option<String>,
    pub notes: Option<String>,
}

fn into_list(value: Option<OneOrMany>) -> Vec<String> {
    value.map(Vec::from).unwrap_or_default()
}

impl From<ContactInput> for ContactRecord {
    fn from(input: ContactInput) -> Self {
        Self {
            full_name: input.full_name,
            given_name: input.given_name,
            family_name: input.family_name,
            phone_numbers: into_list(input.phone_numbers),
            emails: into_list(input.emails),
            addresses: into_list(input.addresses),
            organization: input.organization,
            job_title: input.job_title,
            birthday: input.birthday,
            notes: input.notes,
        }
    }
}

impl From<ContactRecord> for ContactInput {
    fn from(record: ContactRecord) -> Self {
        Self {
            full_name: record.full_name,
            given_name: record.given_name,
            family_name: record.family_name,
            phone_numbers: Some(OneOrMany::Many(record.phone_numbers)),
            emails: Some(OneOrMany::Many(record.emails)),
            addresses: Some(OneOrMany::Many(record.addresses)),
            organization: record.organization,
            job_title: record.job_title,
            birthday: record.birthday,
            notes: record.notes,
        }
    }
}
