//! vCard implementation (RFC 2425/2426/6350, plus vCard 2.1 leniency).
//!
//! This module provides types, parsing, and serialization for the vCard
//! files a personal address book accumulates: phone exports in 2.1 with
//! quoted-printable names, 3.0 exports from desktop clients, and 4.0 cards.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use cardbox_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let document = parse(input);
//! assert!(document.errors.is_empty());
//! assert_eq!(document.cards[0].formatted_name(), Some("John Doe"));
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use cardbox_rfc::rfc::vcard::{VCard, VCardProperty, serialize};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::text("FN", "Jane Doe"));
//! card.add_property(VCardProperty::text("EMAIL", "jane@example.com"));
//!
//! let output = serialize(&[card]);
//! assert!(output.contains("FN:Jane Doe"));
//! ```
//!
//! ## Error Recovery
//!
//! A malformed block never aborts the document: the parser records the
//! error, skips to the block's `END:VCARD`, and carries on.
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `VCardValue`, etc.)
//! - [`parse`] - Parsing functions and error types
//! - [`build`] - Serialization functions

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{serialize, serialize_single};
pub use core::{
    Address, Organization, StructuredName, VCard, VCardParameter, VCardProperty, VCardValue,
    VCardVersion,
};
pub use parse::{ParseError, ParseErrorKind, ParseResult, ParsedDocument, parse, parse_single};
