//! vCard property types.

use super::parameter::{VCardParameter, encodings, names as param_names};
use super::value::VCardValue;

/// A vCard property.
///
/// Contains the parsed value along with the original raw value
/// (after transfer decoding) for round-trip fidelity.
#[derive(Debug, Clone, PartialEq)]
pub struct VCardProperty {
    /// Optional property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<VCardParameter>,
    /// Parsed value.
    pub value: VCardValue,
    /// Raw value string.
    pub raw_value: String,
}

impl VCardProperty {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, VCardValue::Text(value.into()))
    }

    /// Creates a property with an already structured value.
    #[must_use]
    pub fn with_value(name: impl Into<String>, value: VCardValue) -> Self {
        let raw_value = value.as_text().map(str::to_string).unwrap_or_default();
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value,
            raw_value,
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&VCardParameter> {
        self.params.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        let p = self.get_param(name)?;
        p.value()
    }

    /// Returns whether this property has the specified TYPE value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.params
            .iter()
            .filter(|p| p.name == param_names::TYPE)
            .any(|p| p.has_value(type_value))
    }

    /// Returns whether the value was transferred quoted-printable.
    #[must_use]
    pub fn is_quoted_printable(&self) -> bool {
        self.get_param(param_names::ENCODING)
            .is_some_and(|p| p.has_value(encodings::QUOTED_PRINTABLE))
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Adds a parameter to this property.
    pub fn add_param(&mut self, param: VCardParameter) {
        self.params.push(param);
    }

    /// Adds a TYPE parameter value.
    pub fn add_type(&mut self, type_value: impl Into<String>) {
        if let Some(param) = self
            .params
            .iter_mut()
            .find(|p| p.name == param_names::TYPE)
        {
            param.values.push(type_value.into());
        } else {
            self.params.push(VCardParameter::type_param(type_value));
        }
    }
}

/// Property names read or written by the codec.
pub mod names {
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const BDAY: &str = "BDAY";
    pub const ADR: &str = "ADR";
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const TITLE: &str = "TITLE";
    pub const ORG: &str = "ORG";
    pub const NOTE: &str = "NOTE";
    pub const NICKNAME: &str = "NICKNAME";
    pub const CATEGORIES: &str = "CATEGORIES";

    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";
}
