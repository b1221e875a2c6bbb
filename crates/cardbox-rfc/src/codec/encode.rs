//! Contact records to vCard text.

use cardbox_core::constants::{ADDRESS_TYPE, EMAIL_TYPE, PHONE_TYPE};
use cardbox_core::util::file_name::vcf_file_name;

use super::input::ContactInput;
use super::record::ContactRecord;
use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::build::{needs_encoding, serialize, serialize_single};
use crate::rfc::vcard::core::names;
use crate::rfc::vcard::{
    Address, Organization, StructuredName, VCard, VCardParameter, VCardProperty, VCardValue,
};

const UTF_8: &str = "UTF-8";

/// Options for writing records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Write non-ASCII `FN`/`N` values quoted-printable for legacy readers.
    pub quoted_printable: bool,
}

/// Encodes one record as a vCard 3.0 block.
///
/// A record with no populated fields still produces a valid block.
#[must_use]
pub fn encode(record: &ContactRecord) -> String {
    encode_with(record, EncodeOptions::default())
}

/// Encodes one record with the given options.
#[must_use]
pub fn encode_with(record: &ContactRecord, options: EncodeOptions) -> String {
    serialize_single(&to_vcard(record, options))
}

/// Encodes loosely shaped input, accepting a bare string for list fields.
#[must_use]
pub fn encode_input(input: ContactInput) -> String {
    encode(&ContactRecord::from(input))
}

/// Encodes records back to back into one stream.
#[must_use]
pub fn encode_all<'a>(
    records: impl IntoIterator<Item = &'a ContactRecord>,
    options: EncodeOptions,
) -> String {
    let cards: Vec<VCard> = records
        .into_iter()
        .map(|record| to_vcard(record, options))
        .collect();
    serialize(&cards)
}

/// Builds the vCard for a record.
///
/// Phones are typed `CELL`, emails and addresses `HOME`. Addresses are
/// written as the street component, since the record keeps them flattened.
#[must_use]
pub fn to_vcard(record: &ContactRecord, options: EncodeOptions) -> VCard {
    let mut card = VCard::new();

    if let Some(full_name) = record.full_name() {
        let mut prop = VCardProperty::text(names::FN, full_name);
        if options.quoted_printable && needs_encoding(full_name) {
            mark_quoted_printable(&mut prop);
        }
        card.add_property(prop);
    }

    let given = record.given_name.as_deref().unwrap_or_default();
    let family = record.family_name.as_deref().unwrap_or_default();
    if !given.is_empty() || !family.is_empty() {
        let mut prop = VCardProperty::with_value(
            names::N,
            VCardValue::StructuredName(StructuredName::simple(family, given)),
        );
        if options.quoted_printable && (needs_encoding(given) || needs_encoding(family)) {
            mark_quoted_printable(&mut prop);
        }
        card.add_property(prop);
    }

    for phone in &record.phone_numbers {
        card.add_property(typed(names::TEL, VCardValue::Text(phone.clone()), PHONE_TYPE));
    }

    for email in &record.emails {
        card.add_property(typed(names::EMAIL, VCardValue::Text(email.clone()), EMAIL_TYPE));
    }

    for address in &record.addresses {
        card.add_property(typed(
            names::ADR,
            VCardValue::Address(Address::street_only(address.as_str())),
            ADDRESS_TYPE,
        ));
    }

    if let Some(organization) = non_empty(record.organization.as_deref()) {
        card.add_property(VCardProperty::with_value(
            names::ORG,
            VCardValue::Organization(Organization::new(organization)),
        ));
    }

    for (name, value) in [
        (names::TITLE, &record.job_title),
        (names::BDAY, &record.birthday),
        (names::NOTE, &record.notes),
    ] {
        if let Some(value) = non_empty(value.as_deref()) {
            card.add_property(VCardProperty::text(name, value));
        }
    }

    card
}

/// Returns the `<full_name>.vcf` file name a record is exported under.
///
/// There is no fallback to the name components here.
///
/// ## Errors
/// Returns an encode error if the full name is missing, empty, or reduces
/// to nothing once made safe as a path segment.
pub fn export_file_name(record: &ContactRecord) -> RfcResult<String> {
    let full_name = record
        .full_name()
        .ok_or_else(|| RfcError::EncodeError("record has no full name".to_string()))?;

    vcf_file_name(full_name).ok_or_else(|| {
        RfcError::EncodeError(format!(
            "full name {full_name:?} cannot be used as a file name"
        ))
    })
}

fn typed(name: &str, value: VCardValue, type_value: &str) -> VCardProperty {
    let mut prop = VCardProperty::with_value(name, value);
    prop.add_type(type_value);
    prop
}

fn mark_quoted_printable(prop: &mut VCardProperty) {
    prop.add_param(VCardParameter::quoted_printable());
    prop.add_param(VCardParameter::charset(UTF_8));
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
