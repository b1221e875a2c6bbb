//! vCard core types.
//!
//! This module provides the foundational types for representing vCard data:
//!
//! - [`VCard`] - Complete vCard representation
//! - [`VCardProperty`] - Individual property with parameters and value
//! - [`VCardParameter`] - Property parameters
//! - [`VCardValue`] - Property value variants
//!
//! ## Structured Types
//!
//! - [`StructuredName`] - N property (family, given, etc.)
//! - [`Address`] - ADR property
//! - [`Organization`] - ORG property
//!
//! ## Example
//!
//! ```rust
//! use cardbox_rfc::rfc::vcard::core::{VCard, VCardProperty};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::text("FN", "John Doe"));
//! card.add_property(VCardProperty::text("EMAIL", "john@example.com"));
//! ```

mod parameter;
mod property;
mod structured;
mod value;
mod vcard;

pub use parameter::{VCardParameter, encodings, names as param_names, types};
pub use property::{VCardProperty, names};
pub use structured::{Address, Organization, StructuredName};
pub use value::VCardValue;
pub use vcard::{VCard, VCardVersion};
