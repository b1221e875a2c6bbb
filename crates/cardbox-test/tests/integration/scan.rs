//! Tests for scanning files and directory trees into a directory.

use pretty_assertions::assert_eq;

use cardbox_test::component::{ContactDirectory, ServiceError};

use super::helpers::*;

/// ## Summary
/// Records from N files get handles 1..N in path order.
#[test_log::test]
fn scan_assigns_handles_in_path_order() {
    let tree = ContactTree::new();
    tree.write("03.vcf", card("Carol", None));
    tree.write("01.vcf", card("Alice", None));
    tree.write("02.vcf", card("Bob", None));
    tree.write("sub/04.vcf", card("Dave", None));

    let directory = tree.scan();

    assert_eq!(handles(&directory), vec![1, 2, 3, 4]);
    assert_eq!(names(&directory), vec!["Alice", "Bob", "Carol", "Dave"]);
    assert!(directory.errors().is_empty());
}

#[test_log::test]
fn scan_decodes_legacy_phone_export() {
    let tree = ContactTree::new();
    let path = tree.write("phone.vcf", PHONE_EXPORT);

    let directory = ContactDirectory::scan(&path, false);
    assert_eq!(directory.len(), 2);

    let (_, ivan) = directory.iter().next().expect("first record");
    assert_eq!(ivan.full_name.as_deref(), Some("Иван Петров"));
    assert_eq!(ivan.given_name.as_deref(), Some("Иван"));
    assert_eq!(ivan.family_name.as_deref(), Some("Петров"));
    assert_eq!(ivan.phone_numbers, vec!["+7 900 123-45-67"]);
    assert_eq!(ivan.emails, vec!["ivan@example.ru"]);

    let (_, jane) = directory.iter().nth(1).expect("second record");
    assert_eq!(jane.organization.as_deref(), Some("Example Corp Research"));
    assert_eq!(jane.job_title.as_deref(), Some("Engineer"));
    assert_eq!(jane.phone_numbers, vec!["+1 555 0100", "+1 555 0101"]);
    assert_eq!(
        jane.addresses,
        vec!["1 Main St, Springfield, IL, 62701, USA"]
    );
    assert_eq!(jane.birthday.as_deref(), Some("1990-04-01"));
    assert_eq!(jane.notes.as_deref(), Some("Met at the conference, 2019"));
}

/// ## Summary
/// A malformed block in one file is reported, and the records around it and
/// in other files still load.
#[test_log::test]
fn scan_reports_bad_blocks_and_keeps_going() {
    let tree = ContactTree::new();
    tree.write(
        "a.vcf",
        format!(
            "{}BEGIN:VCARD\r\nVERSION:3.0\r\nthis line has no colon\r\nEND:VCARD\r\n{}",
            card("First", None),
            card("Third", None)
        ),
    );
    tree.write("b.vcf", card("Fourth", None));

    let directory = tree.scan();

    assert_eq!(names(&directory), vec!["First", "Third", "Fourth"]);
    assert_eq!(handles(&directory), vec![1, 2, 3]);
    assert_eq!(directory.errors().len(), 1);

    let ServiceError::Decode { origin, error } = &directory.errors()[0] else {
        panic!("expected a decode error, got {:?}", directory.errors()[0]);
    };
    assert!(origin.ends_with("a.vcf"));
    assert_eq!(error.line, 7);
}

#[test]
fn scan_ignores_other_files() {
    let tree = ContactTree::new();
    tree.write("contacts.vcf", card("Kept", None));
    tree.write("contacts.txt", card("Ignored", None));
    tree.write("contacts.vcf.bak", card("Ignored", None));

    assert_eq!(names(&tree.scan()), vec!["Kept"]);
}

#[test]
fn scan_missing_source_is_reported() {
    let tree = ContactTree::new();
    let directory = ContactDirectory::scan(&tree.path().join("nope"), true);

    assert!(directory.is_empty());
    assert!(matches!(
        directory.errors(),
        [ServiceError::SourceNotFound { .. }]
    ));
}

#[test]
fn load_text_appends_after_scan() {
    let tree = ContactTree::new();
    tree.write("a.vcf", card("Scanned", None));

    let mut directory = tree.scan();
    let added = directory.load_text("upload", &card("Uploaded", None));

    assert_eq!(added, 1);
    assert_eq!(handles(&directory), vec![1, 2]);
    assert_eq!(names(&directory), vec!["Scanned", "Uploaded"]);
}
