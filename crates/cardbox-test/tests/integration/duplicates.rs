//! Tests for duplicate-candidate search over scanned directories.

use pretty_assertions::assert_eq;

use cardbox_test::component::{DuplicateReason, Handle};

use super::helpers::*;

/// ## Summary
/// Two records with the same full name are reported regardless of phones.
#[test_log::test]
fn identical_names_are_candidates() {
    let tree = ContactTree::new();
    tree.write("a.vcf", card("Maria Garcia", Some("+34 600 111 222")));
    tree.write("b.vcf", card("Peter Pan", Some("+44 20 7946 0000")));
    tree.write("c.vcf", card("Maria Garcia", Some("999")));

    let candidates = tree.scan().find_duplicate_candidates();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].first, Handle::new(1));
    assert_eq!(candidates[0].second, Handle::new(3));
    assert_eq!(candidates[0].reason, DuplicateReason::Name);
    assert!((candidates[0].name_similarity - 1.0).abs() < f64::EPSILON);
}

#[test]
fn near_identical_phone_is_candidate() {
    let tree = ContactTree::new();
    tree.write("a.vcf", card("Home", Some("+1-555-111-1111")));
    tree.write("b.vcf", card("Office", Some("+1-555-111-1112")));

    let candidates = tree.scan().find_duplicate_candidates();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].reason, DuplicateReason::Phone);
}

#[test]
fn lower_threshold_finds_more() {
    let tree = ContactTree::new();
    tree.write("a.vcf", card("John Doe", Some("1")));
    tree.write("b.vcf", card("Jane Doe", Some("2")));
    let directory = tree.scan();

    assert!(directory.find_duplicate_candidates().is_empty());
    assert_eq!(
        directory
            .find_duplicate_candidates_above(0.7)
            .expect("valid threshold")
            .len(),
        1
    );
}

#[test]
fn candidates_serialize_for_reports() {
    let tree = ContactTree::new();
    tree.write("a.vcf", card("Same", Some("1")));
    tree.write("b.vcf", card("Same", Some("2")));

    let candidates = tree.scan().find_duplicate_candidates();
    let json = serde_json::to_value(&candidates).expect("serialize");

    assert_eq!(json[0]["first"], 1);
    assert_eq!(json[0]["second"], 2);
    assert_eq!(json[0]["reason"], "name");
}
