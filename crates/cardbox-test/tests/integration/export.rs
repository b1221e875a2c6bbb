//! Tests for per-record export, single-record append and bundle export.

use pretty_assertions::assert_eq;

use cardbox_test::component::{ContactDirectory, ExportOptions, Handle, ServiceError};

use super::helpers::*;

/// ## Summary
/// Exported files decode back to the same records.
#[test_log::test]
fn export_then_rescan_round_trips() {
    let source = ContactTree::new();
    source.write("phone.vcf", PHONE_EXPORT);
    let original = source.scan();

    let target = ContactTree::new();
    let report = original
        .export(target.path(), ExportOptions::default())
        .expect("export");

    assert_eq!(report.count(), 2);
    assert!(target.exists("Иван Петров.vcf"));
    assert!(target.exists("Jane Doe.vcf"));

    let rescanned = target.scan();
    let mut before: Vec<_> = original.iter().map(|(_, r)| r.clone()).collect();
    let mut after: Vec<_> = rescanned.iter().map(|(_, r)| r.clone()).collect();
    before.sort_by_key(|r| r.display_name());
    after.sort_by_key(|r| r.display_name());

    assert_eq!(after, before);
}

#[test_log::test]
fn export_skips_record_without_full_name() {
    let source = ContactTree::new();
    source.write(
        "mixed.vcf",
        format!(
            "{}BEGIN:VCARD\r\nVERSION:3.0\r\nTEL:555\r\nEND:VCARD\r\n",
            card("Named", None)
        ),
    );
    let directory = source.scan();
    assert_eq!(directory.len(), 2);

    let target = ContactTree::new();
    let report = directory
        .export(target.path(), ExportOptions::default())
        .expect("export");

    assert_eq!(report.count(), 1);
    assert!(target.exists("Named.vcf"));
    assert!(matches!(
        report.failures.as_slice(),
        [(handle, ServiceError::Encode { .. })] if *handle == Handle::new(2)
    ));
}

#[test_log::test]
fn export_notifies_overwrite() {
    let target = ContactTree::new();
    target.write("Alice.vcf", "stale");

    let mut directory = ContactDirectory::new();
    directory.load_text("input", &card("Alice", Some("1")));

    let report = directory
        .export(target.path(), ExportOptions::default())
        .expect("export");

    assert_eq!(report.overwritten, vec![target.path().join("Alice.vcf")]);
    assert!(target.read("Alice.vcf").contains("TEL;TYPE=CELL:1\r\n"));
}

#[test]
fn export_creates_destination() {
    let target = ContactTree::new();
    let mut directory = ContactDirectory::new();
    directory.load_text("input", &card("Alice", None));

    directory
        .export(&target.path().join("nested/out"), ExportOptions::default())
        .expect("export");

    assert!(target.exists("nested/out/Alice.vcf"));
}

/// ## Summary
/// Append adds exactly one record and leaves existing content in place.
#[test_log::test]
fn append_writes_only_the_selected_record() {
    let source = ContactTree::new();
    source.write("a.vcf", card("Alice", None));
    source.write("b.vcf", card("Bob", None));
    let directory = source.scan();

    let target = ContactTree::new();
    let path = target.write("existing.vcf", card("Existing", None));

    directory
        .append_record(Handle::new(2), &path, ExportOptions::default())
        .expect("append");

    let merged = ContactDirectory::scan(&path, false);
    assert_eq!(names(&merged), vec!["Existing", "Bob"]);
}

#[test]
fn append_unknown_handle_fails() {
    let source = ContactTree::new();
    source.write("a.vcf", card("Alice", None));
    let directory = source.scan();

    let result = directory.append_record(
        Handle::new(5),
        &source.path().join("out.vcf"),
        ExportOptions::default(),
    );

    assert!(matches!(result, Err(ServiceError::NotFound(_))));
    assert!(!source.exists("out.vcf"));
}

#[test]
fn bundle_round_trips_whole_directory() {
    let source = ContactTree::new();
    source.write("phone.vcf", PHONE_EXPORT);
    source.write("more.vcf", card("Zed", Some("42")));
    let directory = source.scan();

    let target = ContactTree::new();
    let bundle = target.path().join("all.vcf");
    let count = directory
        .export_bundle(&bundle, ExportOptions::default())
        .expect("bundle");
    assert_eq!(count, 3);

    let reloaded = ContactDirectory::scan(&bundle, false);
    let before: Vec<_> = directory.iter().map(|(_, r)| r.clone()).collect();
    let after: Vec<_> = reloaded.iter().map(|(_, r)| r.clone()).collect();
    assert_eq!(after, before);
}
