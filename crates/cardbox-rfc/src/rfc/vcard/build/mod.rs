//! vCard serialization.
//!
//! ## Usage
//!
//! ```rust
//! use cardbox_rfc::rfc::vcard::{VCard, VCardProperty, serialize};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::text("FN", "John Doe"));
//! card.add_property(VCardProperty::text("EMAIL", "john@example.com"));
//!
//! let output = serialize(&[card]);
//! assert!(output.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\n"));
//! ```
//!
//! ## Features
//!
//! - Line folding at 75 octets (UTF-8 safe)
//! - Quoted-printable values with soft line breaks for properties that
//!   carry `ENCODING=QUOTED-PRINTABLE`
//! - Text escaping and RFC 6868 caret encoding for parameters
//! - Canonical property ordering
//! - Structured value serialization (N, ADR, ORG)

mod escape;
mod fold;
mod quoted_printable;
mod serializer;

pub use escape::{escape_component, escape_param_value, escape_text};
pub use fold::{MAX_LINE_OCTETS, fold_line, fold_quoted_printable};
pub use quoted_printable::{encode as encode_quoted_printable, needs_encoding};
pub use serializer::{serialize, serialize_single};
