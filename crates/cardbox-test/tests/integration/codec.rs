//! Tests for the record codec through the public re-exports.

use pretty_assertions::assert_eq;

use cardbox_test::rfc::codec::{
    ContactInput, ContactRecord, EncodeOptions, decode, decode_one, encode, encode_input,
    encode_with,
};

use super::helpers::PHONE_EXPORT;

#[test_log::test]
fn decode_reports_every_record_in_order() {
    let decoded = decode(PHONE_EXPORT);

    assert!(decoded.errors.is_empty());
    let names: Vec<String> = decoded
        .records
        .iter()
        .map(ContactRecord::display_name)
        .collect();
    assert_eq!(names, vec!["Иван Петров", "Jane Doe"]);
}

#[test]
fn quoted_printable_export_reads_back() {
    let record = decode_one(PHONE_EXPORT).expect("first record");

    let text = encode_with(
        &record,
        EncodeOptions {
            quoted_printable: true,
        },
    );
    assert!(text.contains("FN;ENCODING=QUOTED-PRINTABLE;CHARSET=UTF-8:"));
    assert!(!text.contains("Иван"));

    assert_eq!(decode_one(&text).expect("reparse"), record);
}

/// ## Summary
/// JSON shaped the way a form hands it over encodes the same as the
/// equivalent record.
#[test]
fn json_input_accepts_scalar_or_list() {
    let input: ContactInput = serde_json::from_str(
        r#"{
            "full_name": "Jane Doe",
            "phone_numbers": "+1 555 0100",
            "emails": ["jane@example.com", "doe@example.com"],
            "addresses": null
        }"#,
    )
    .expect("valid input");

    let record = ContactRecord {
        full_name: Some("Jane Doe".into()),
        phone_numbers: vec!["+1 555 0100".into()],
        emails: vec!["jane@example.com".into(), "doe@example.com".into()],
        ..ContactRecord::default()
    };

    assert_eq!(encode_input(input), encode(&record));
}

#[test]
fn record_serializes_for_json_views() {
    let record = decode_one(PHONE_EXPORT).expect("first record");
    let json = serde_json::to_value(&record).expect("serialize");

    assert_eq!(json["full_name"], "Иван Петров");
    assert_eq!(json["phone_numbers"][0], "+7 900 123-45-67");
    assert!(json["organization"].is_null());
}
