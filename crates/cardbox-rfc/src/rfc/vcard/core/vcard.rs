//! vCard wrapper type.

use super::property::{VCardProperty, names};
use super::structured::{Address, Organization, StructuredName};

/// vCard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VCardVersion {
    /// vCard 2.1 (Internet Mail Consortium).
    V21,
    /// vCard 3.0 (RFC 2426).
    #[default]
    V3,
    /// vCard 4.0 (RFC 6350).
    V4,
}

impl VCardVersion {
    /// Parses from version string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "2.1" => Some(Self::V21),
            "3.0" => Some(Self::V3),
            "4.0" => Some(Self::V4),
            _ => None,
        }
    }

    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V21 => "2.1",
            Self::V3 => "3.0",
            Self::V4 => "4.0",
        }
    }
}

impl core::str::FromStr for VCardVersion {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(())
    }
}

/// A complete vCard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VCard {
    /// vCard version.
    pub version: VCardVersion,
    /// All properties in order of appearance.
    pub properties: Vec<VCardProperty>,
}

impl VCard {
    /// Creates a new, empty vCard 3.0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a vCard with the specified version.
    #[must_use]
    pub fn with_version(version: VCardVersion) -> Self {
        Self {
            version,
            properties: Vec::new(),
        }
    }

    /// Adds a property to the vCard.
    pub fn add_property(&mut self, prop: VCardProperty) {
        self.properties.push(prop);
    }

    /// Returns all properties with the given name, in document order.
    pub fn get_properties<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a VCardProperty> {
        self.properties
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&VCardProperty> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    fn first_text(&self, name: &str) -> Option<&str> {
        self.get_property(name)?.as_text()
    }

    /// Returns the FN (formatted name) value.
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.first_text(names::FN)
    }

    /// Returns the N (structured name) value.
    #[must_use]
    pub fn name(&self) -> Option<&StructuredName> {
        self.get_property(names::N)?.value.as_structured_name()
    }

    /// Returns all EMAIL property values.
    #[must_use]
    pub fn emails(&self) -> Vec<&str> {
        self.get_properties(names::EMAIL)
            .filter_map(VCardProperty::as_text)
            .collect()
    }

    /// Returns all TEL property values.
    #[must_use]
    pub fn telephones(&self) -> Vec<&str> {
        self.get_properties(names::TEL)
            .filter_map(VCardProperty::as_text)
            .collect()
    }

    /// Returns all ADR (address) values.
    #[must_use]
    pub fn addresses(&self) -> Vec<&Address> {
        self.get_properties(names::ADR)
            .filter_map(|p| p.value.as_address())
            .collect()
    }

    /// Returns the ORG (organization) value.
    #[must_use]
    pub fn organization(&self) -> Option<&Organization> {
        self.get_property(names::ORG)?.value.as_organization()
    }

    /// Returns the TITLE value.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.first_text(names::TITLE)
    }

    /// Returns the BDAY value as written (not validated).
    #[must_use]
    pub fn birthday(&self) -> Option<&str> {
        self.first_text(names::BDAY)
    }

    /// Returns the NOTE value.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.first_text(names::NOTE)
    }
}
