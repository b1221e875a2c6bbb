//! vCard value types.

use super::structured::{Address, Organization, StructuredName};

/// A vCard property value.
///
/// Only the shapes the contact codec reads are interpreted; everything else
/// is kept as text so it can be inspected or written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VCardValue {
    /// Text value (unescaped).
    Text(String),

    /// Multi-valued text (comma-separated in source).
    TextList(Vec<String>),

    /// Structured name (N property).
    StructuredName(StructuredName),

    /// Address (ADR property).
    Address(Address),

    /// Organization (ORG property).
    Organization(Organization),

    /// Binary data kept in its transfer form (e.g. base64 PHOTO).
    Binary(String),
}

impl VCardValue {
    /// Returns the value as text if applicable.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a structured name if applicable.
    #[must_use]
    pub fn as_structured_name(&self) -> Option<&StructuredName> {
        match self {
            Self::StructuredName(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the value as an address if applicable.
    #[must_use]
    pub fn as_address(&self) -> Option<&Address> {
        match self {
            Self::Address(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the value as an organization if applicable.
    #[must_use]
    pub fn as_organization(&self) -> Option<&Organization> {
        match self {
            Self::Organization(o) => Some(o),
            _ => None,
        }
    }
}
