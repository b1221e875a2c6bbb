//! vCard value parsers.

use crate::rfc::vcard::core::{Address, Organization, StructuredName};

/// Unescapes a vCard text value.
///
/// vCard escapes: \n, \N (newline), \, (comma), \; (semicolon), \\ (backslash)
///
/// Literal CRLF and lone CR (which only quoted-printable can carry) become
/// LF, so decoded text always uses LF line breaks.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(&escaped @ (',' | ';' | '\\')) => {
                    chars.next();
                    result.push(escaped);
                }
                _ => result.push(c),
            }
        } else if c == '\r' {
            chars.next_if_eq(&'\n');
            result.push('\n');
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a structured value on unescaped semicolons.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev_backslash = false;

    for (i, c) in s.char_indices() {
        if c == '\\' && !prev_backslash {
            prev_backslash = true;
            continue;
        }

        if c == ';' && !prev_backslash {
            parts.push(&s[start..i]);
            start = i + 1;
        }

        prev_backslash = false;
    }

    parts.push(&s[start..]);
    parts
}

/// Splits a component value on unescaped commas and unescapes each part.
///
/// Line breaks are normalised to LF as in [`unescape_text`].
#[must_use]
pub fn split_component(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some(&escaped @ (',' | ';' | '\\')) => {
                    chars.next();
                    current.push(escaped);
                }
                Some('n' | 'N') => {
                    chars.next();
                    current.push('\n');
                }
                _ => current.push(c),
            }
        } else if c == ',' {
            parts.push(std::mem::take(&mut current));
        } else if c == '\r' {
            chars.next_if_eq(&'\n');
            current.push('\n');
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

/// Parses a structured name (N property).
///
/// N has 5 components: family;given;additional;prefixes;suffixes.
/// Missing trailing components are treated as empty.
#[must_use]
pub fn parse_structured_name(value: &str) -> StructuredName {
    let parts = split_structured(value);
    let component = |i: usize| parts.get(i).map(|s| split_component(s)).unwrap_or_default();

    StructuredName {
        family: component(0),
        given: component(1),
        additional: component(2),
        prefixes: component(3),
        suffixes: component(4),
    }
}

/// Parses an address (ADR property).
///
/// ADR has 7 components: PO Box;Extended;Street;Locality;Region;PostalCode;Country
#[must_use]
pub fn parse_address(value: &str) -> Address {
    let parts = split_structured(value);
    let component = |i: usize| parts.get(i).map(|s| split_component(s)).unwrap_or_default();

    Address {
        po_box: component(0),
        extended: component(1),
        street: component(2),
        locality: component(3),
        region: component(4),
        postal_code: component(5),
        country: component(6),
    }
}

/// Parses an organization (ORG property).
#[must_use]
pub fn parse_organization(value: &str) -> Organization {
    let parts = split_structured(value);

    let name = parts.first().map(|s| unescape_text(s)).unwrap_or_default();
    let units = parts.iter().skip(1).map(|s| unescape_text(s)).collect();

    Organization { name, units }
}
