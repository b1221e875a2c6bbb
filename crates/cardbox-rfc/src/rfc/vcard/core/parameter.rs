//! vCard parameter types.

/// A vCard parameter.
///
/// Parameters can have multiple values (e.g., TYPE=home,work).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values.
    pub values: Vec<String>,
}

impl VCardParameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a parameter with multiple values.
    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Interprets a vCard 2.1 bare parameter (`TEL;CELL:`, `FN;QUOTED-PRINTABLE:`).
    ///
    /// Transfer encodings become `ENCODING`, anything else is a `TYPE`.
    #[must_use]
    pub fn bare(token: &str) -> Self {
        if encodings::is_encoding(token) {
            Self::new(names::ENCODING, token.to_ascii_uppercase())
        } else {
            Self::new(names::TYPE, token)
        }
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }

    // --- Convenience constructors ---

    /// Creates a TYPE parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new(names::TYPE, value)
    }

    /// Creates an `ENCODING=QUOTED-PRINTABLE` parameter.
    #[must_use]
    pub fn quoted_printable() -> Self {
        Self::new(names::ENCODING, encodings::QUOTED_PRINTABLE)
    }

    /// Creates a CHARSET parameter.
    #[must_use]
    pub fn charset(value: impl Into<String>) -> Self {
        Self::new(names::CHARSET, value)
    }
}

/// Parameter names used by the codec.
pub mod names {
    pub const TYPE: &str = "TYPE";
    pub const ENCODING: &str = "ENCODING";
    pub const CHARSET: &str = "CHARSET";
    pub const VALUE: &str = "VALUE";
}

/// ENCODING parameter values.
pub mod encodings {
    pub const QUOTED_PRINTABLE: &str = "QUOTED-PRINTABLE";
    pub const BASE64: &str = "BASE64";
    pub const B: &str = "B";
    pub const EIGHT_BIT: &str = "8BIT";
    pub const SEVEN_BIT: &str = "7BIT";

    /// Returns whether a bare vCard 2.1 token names a transfer encoding.
    #[must_use]
    pub fn is_encoding(token: &str) -> bool {
        [QUOTED_PRINTABLE, BASE64, EIGHT_BIT, SEVEN_BIT]
            .iter()
            .any(|e| e.eq_ignore_ascii_case(token))
    }
}

/// Common TYPE values as constants.
pub mod types {
    pub const HOME: &str = "HOME";
    pub const WORK: &str = "WORK";
    pub const CELL: &str = "CELL";
    pub const VOICE: &str = "VOICE";
    pub const INTERNET: &str = "INTERNET";
}
