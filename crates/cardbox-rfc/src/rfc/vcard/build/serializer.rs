//! vCard serialization.

use std::cmp::Ordering;

use super::escape::{escape_component, escape_param_value, escape_text};
use super::fold::{fold_line, fold_quoted_printable};
use super::quoted_printable;
use crate::rfc::vcard::core::{
    Address, Organization, StructuredName, VCard, VCardParameter, VCardProperty, VCardValue,
    names,
};

/// Serializes one or more vCards to a string.
///
/// ## Summary
/// Produces back-to-back `BEGIN:VCARD … END:VCARD` blocks with CRLF line
/// endings, folding, and escaping.
#[must_use]
pub fn serialize(cards: &[VCard]) -> String {
    let mut output = String::new();

    for card in cards {
        serialize_vcard(card, &mut output);
    }

    output
}

/// Serializes a single vCard to a string.
#[must_use]
pub fn serialize_single(card: &VCard) -> String {
    let mut output = String::new();
    serialize_vcard(card, &mut output);
    output
}

fn serialize_vcard(card: &VCard, output: &mut String) {
    output.push_str("BEGIN:VCARD\r\n");

    // VERSION must be first after BEGIN
    output.push_str("VERSION:");
    output.push_str(card.version.as_str());
    output.push_str("\r\n");

    for prop in canonical_property_order(&card.properties) {
        serialize_property(prop, output);
    }

    output.push_str("END:VCARD\r\n");
}

/// Returns properties in canonical order for deterministic output.
///
/// Ungrouped properties come first by priority, grouped ones after by
/// group then name. The sort is stable, so repeated properties keep their
/// relative order.
fn canonical_property_order(props: &[VCardProperty]) -> Vec<&VCardProperty> {
    let mut ordered: Vec<&VCardProperty> = props
        .iter()
        .filter(|p| p.name != names::VERSION)
        .collect();

    ordered.sort_by(|a, b| match (&a.group, &b.group) {
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(g1), Some(g2)) => g1.cmp(g2).then_with(|| a.name.cmp(&b.name)),
        (None, None) => property_priority(&a.name).cmp(&property_priority(&b.name)),
    });

    ordered
}

/// Returns priority for property ordering (lower = earlier).
fn property_priority(name: &str) -> u8 {
    match name {
        names::FN => 1,
        names::N => 2,
        names::NICKNAME => 4,
        "PHOTO" => 10,
        names::BDAY => 11,
        names::ADR => 20,
        names::TEL => 30,
        names::EMAIL => 31,
        names::TITLE => 50,
        "ROLE" => 51,
        names::ORG => 53,
        names::CATEGORIES => 60,
        names::NOTE => 61,
        "PRODID" => 70,
        "REV" => 71,
        "UID" => 73,
        "URL" => 75,
        _ => 100,
    }
}

fn serialize_property(prop: &VCardProperty, output: &mut String) {
    let mut line = String::new();

    if let Some(ref group) = prop.group {
        line.push_str(group);
        line.push('.');
    }

    line.push_str(&prop.name);

    for param in &prop.params {
        serialize_parameter(param, &mut line);
    }

    line.push(':');

    if prop.is_quoted_printable() {
        let mut value = String::new();
        serialize_value(&prop.value, &prop.raw_value, &mut value);
        line.push_str(&quoted_printable::encode(&value));
        output.push_str(&fold_quoted_printable(&line));
    } else {
        serialize_value(&prop.value, &prop.raw_value, &mut line);
        output.push_str(&fold_line(&line));
    }

    output.push_str("\r\n");
}

fn serialize_parameter(param: &VCardParameter, output: &mut String) {
    output.push(';');
    output.push_str(&param.name);
    output.push('=');

    for (i, value) in param.values.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }

        let (escaped, needs_quotes) = escape_param_value(value);

        if needs_quotes {
            output.push('"');
            output.push_str(&escaped);
            output.push('"');
        } else {
            output.push_str(&escaped);
        }
    }
}

fn serialize_value(value: &VCardValue, raw_value: &str, output: &mut String) {
    match value {
        VCardValue::Text(s) => output.push_str(&escape_text(s)),
        VCardValue::TextList(list) => serialize_component_list(list, output),
        VCardValue::StructuredName(name) => serialize_structured_name(name, output),
        VCardValue::Address(addr) => serialize_address(addr, output),
        VCardValue::Organization(org) => serialize_organization(org, output),
        // Kept in its transfer encoding
        VCardValue::Binary(_) => output.push_str(raw_value),
    }
}

fn serialize_structured_name(name: &StructuredName, output: &mut String) {
    // family;given;additional;prefixes;suffixes
    serialize_components(
        &[
            &name.family,
            &name.given,
            &name.additional,
            &name.prefixes,
            &name.suffixes,
        ],
        output,
    );
}

fn serialize_address(addr: &Address, output: &mut String) {
    // POBox;Extended;Street;Locality;Region;PostalCode;Country
    serialize_components(
        &[
            &addr.po_box,
            &addr.extended,
            &addr.street,
            &addr.locality,
            &addr.region,
            &addr.postal_code,
            &addr.country,
        ],
        output,
    );
}

fn serialize_organization(org: &Organization, output: &mut String) {
    output.push_str(&escape_component(&org.name));
    for unit in &org.units {
        output.push(';');
        output.push_str(&escape_component(unit));
    }
}

fn serialize_components(components: &[&Vec<String>], output: &mut String) {
    for (i, list) in components.iter().enumerate() {
        if i > 0 {
            output.push(';');
        }
        serialize_component_list(list, output);
    }
}

fn serialize_component_list(list: &[String], output: &mut String) {
    for (i, s) in list.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        output.push_str(&escape_component(s));
    }
}
