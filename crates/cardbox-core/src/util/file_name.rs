//! File-name utilities for per-contact export files.
//!
//! ## Summary
//! A contact's display name is used verbatim as the export file stem, so it
//! must be reduced to a single, portable path segment first. Unicode letters
//! are kept (Cyrillic names stay readable); only characters that would change
//! the path or are rejected by common file systems are replaced.

use crate::constants::VCF_SUFFIX;

/// Characters rejected by at least one common file system.
const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Reduce a name to a single path segment.
///
/// Reserved characters and control characters become `_`, surrounding
/// whitespace and trailing dots are trimmed. Returns `None` when nothing
/// usable remains (empty, or a `.`/`..` segment).
///
/// Examples:
/// - "John Doe" -> "John Doe"
/// - "AC/DC" -> "`AC_DC`"
/// - "  Jane  " -> "Jane"
#[must_use]
pub fn sanitize_segment(name: &str) -> Option<String> {
    let replaced = name
        .chars()
        .map(|c| {
            if c.is_control() || RESERVED.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect::<String>();

    let trimmed = replaced.trim().trim_end_matches('.').trim_end();

    if trimmed.is_empty() || trimmed.chars().all(|c| c == '.') {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Builds `<name>.vcf` from a display name, or `None` if the name is unusable.
#[must_use]
pub fn vcf_file_name(name: &str) -> Option<String> {
    sanitize_segment(name).map(|stem| format!("{stem}{VCF_SUFFIX}"))
}
