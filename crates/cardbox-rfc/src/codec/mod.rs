//! Contact codec: vCard text to [`ContactRecord`] and back.
//!
//! ```rust
//! use cardbox_rfc::codec::{ContactRecord, decode, encode};
//!
//! let decoded = decode("BEGIN:VCARD\nFN:John Doe\nN:Doe;John;;;\nEND:VCARD\n");
//! let record = &decoded.records[0];
//! assert_eq!(record.given_name.as_deref(), Some("John"));
//!
//! let text = encode(record);
//! assert_eq!(decode(&text).records[0], *record);
//! ```
//!
//! Addresses are flattened on decode, so they are not guaranteed to come
//! back identical from arbitrary source files; the other fields are.

mod decode;
mod encode;
mod input;
mod record;

pub use decode::{Decoded, decode, decode_one};
pub use encode::{
    EncodeOptions, encode, encode_all, encode_input, encode_with, export_file_name, to_vcard,
};
pub use input::{ContactInput, OneOrMany};
pub use record::{ContactRecord, UNKNOWN_NAME};
