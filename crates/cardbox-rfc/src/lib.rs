//! vCard wire format and the contact codec built on top of it.
//!
//! - [`rfc::vcard`] parses and serializes vCard 2.1/3.0/4.0 text.
//! - [`codec`] maps vCards to the flat [`codec::ContactRecord`] and back.

pub mod codec;
pub mod error;
pub mod rfc;
