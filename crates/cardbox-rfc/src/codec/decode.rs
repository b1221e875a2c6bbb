//! vCard text to contact records.

use super::record::ContactRecord;
use crate::error::RfcResult;
use crate::rfc::vcard::{ParseError, parse, parse_single};

/// Records decoded from one text, plus one error per block that failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoded {
    pub records: Vec<ContactRecord>,
    pub errors: Vec<ParseError>,
}

/// Decodes every vCard block in `text`.
///
/// ## Summary
/// Quoted-printable values are decoded before fields are exposed. A block
/// that cannot be parsed is reported in [`Decoded::errors`] and does not
/// stop the blocks after it. Empty input yields no records and no errors.
#[tracing::instrument(skip(text), fields(input_len = text.len()))]
pub fn decode(text: &str) -> Decoded {
    let document = parse(text);

    let records: Vec<ContactRecord> = document.cards.iter().map(ContactRecord::from).collect();

    tracing::debug!(
        records = records.len(),
        errors = document.errors.len(),
        "Decoded contacts"
    );

    Decoded {
        records,
        errors: document.errors,
    }
}

/// Decodes the first vCard block in `text`.
///
/// ## Errors
/// Returns an error if there is no block or the first block is malformed.
pub fn decode_one(text: &str) -> RfcResult<ContactRecord> {
    let card = parse_single(text)?;
    Ok(ContactRecord::from(&card))
}
