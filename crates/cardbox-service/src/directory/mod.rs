//! The contact directory: records keyed by stable handles.
//!
//! ## Summary
//! A directory is filled by one scan of a file or directory tree (see
//! [`ContactDirectory::scan`]), may be edited through its handle accessors,
//! and writes records back out through [`ContactDirectory::export`],
//! [`ContactDirectory::append_record`] and
//! [`ContactDirectory::export_bundle`]. Handles start at 1, grow by one per
//! inserted record and are never reused within a directory, even after
//! removal.

mod duplicates;
mod export;
mod scan;

use std::collections::BTreeMap;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::Serialize;

use cardbox_rfc::codec::{ContactRecord, decode};

use crate::error::{ServiceError, ServiceResult};

pub use duplicates::{DuplicateCandidate, DuplicateReason};
pub use export::{ExportOptions, ExportReport};

/// Stable identifier of one record within a [`ContactDirectory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Handle(u64);

impl Handle {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Handle {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// An ordered collection of contact records.
///
/// Owns its records exclusively. Errors met while loading are kept
/// alongside whatever did load.
#[derive(Debug)]
pub struct ContactDirectory {
    records: BTreeMap<Handle, ContactRecord>,
    next_handle: u64,
    errors: Vec<ServiceError>,
}

impl Default for ContactDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactDirectory {
    /// Creates an empty directory; the first handle will be 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_handle: 1,
            errors: Vec::new(),
        }
    }

    /// Appends a record under a fresh handle.
    pub fn insert(&mut self, record: ContactRecord) -> Handle {
        let handle = Handle(self.next_handle);
        self.next_handle += 1;
        self.records.insert(handle, record);
        handle
    }

    #[must_use]
    pub fn get(&self, handle: Handle) -> Option<&ContactRecord> {
        self.records.get(&handle)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut ContactRecord> {
        self.records.get_mut(&handle)
    }

    /// Returns the record for `handle`.
    ///
    /// ## Errors
    /// Returns `NotFound` if no record has that handle.
    pub fn require(&self, handle: Handle) -> ServiceResult<&ContactRecord> {
        self.get(handle)
            .ok_or_else(|| ServiceError::NotFound(format!("contact {handle}")))
    }

    /// Removes a record. Its handle is not handed out again.
    pub fn remove(&mut self, handle: Handle) -> Option<ContactRecord> {
        self.records.remove(&handle)
    }

    /// Iterates records in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &ContactRecord)> {
        self.records.iter().map(|(&handle, record)| (handle, record))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Errors recorded while loading, in the order they occurred.
    #[must_use]
    pub fn errors(&self) -> &[ServiceError] {
        &self.errors
    }

    /// Decodes `text` and appends every record it yields.
    ///
    /// Blocks that fail to decode are recorded as errors labelled with
    /// `origin` (a file path, an upload name). Returns the number of records
    /// added.
    #[tracing::instrument(skip(self, text), fields(input_len = text.len()))]
    pub fn load_text(&mut self, origin: &str, text: &str) -> usize {
        let decoded = decode(text);
        let added = decoded.records.len();

        for record in decoded.records {
            self.insert(record);
        }

        for error in decoded.errors {
            tracing::warn!(origin, line = error.line, %error, "Skipped malformed vCard block");
            self.errors.push(ServiceError::Decode {
                origin: origin.to_string(),
                error,
            });
        }

        added
    }

    fn record_error(&mut self, error: ServiceError) {
        self.errors.push(error);
    }
}

impl fmt::Display for ContactDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContactDirectory with {} contacts", self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn handles_start_at_one_and_are_not_reused() {
        let mut directory = ContactDirectory::new();
        let first = directory.insert(ContactRecord::named("A"));
        let second = directory.insert(ContactRecord::named("B"));
        assert_eq!((first.get(), second.get()), (1, 2));

        assert!(directory.remove(second).is_some());
        let third = directory.insert(ContactRecord::named("C"));
        assert_eq!(third.get(), 3);
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut directory = ContactDirectory::new();
        let handle = directory.insert(ContactRecord::named("A"));

        if let Some(record) = directory.get_mut(handle) {
            record.emails.push("a@example.com".into());
        }

        assert_eq!(directory.get(handle).unwrap().emails, vec!["a@example.com"]);
    }

    #[test]
    fn require_unknown_handle() {
        let directory = ContactDirectory::new();
        assert!(matches!(
            directory.require(Handle::new(7)),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn iter_in_handle_order() {
        let mut directory = ContactDirectory::new();
        for name in ["C", "A", "B"] {
            directory.insert(ContactRecord::named(name));
        }

        let names: Vec<String> = directory.iter().map(|(_, r)| r.display_name()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test_log::test]
    fn load_text_records_block_errors() {
        let mut directory = ContactDirectory::new();
        let added = directory.load_text(
            "upload.vcf",
            "BEGIN:VCARD\nFN:A\nEND:VCARD\nBEGIN:VCARD\nbroken\nEND:VCARD\nBEGIN:VCARD\nFN:B\nEND:VCARD\n",
        );

        assert_eq!(added, 2);
        let handles: Vec<u64> = directory.iter().map(|(h, _)| h.get()).collect();
        assert_eq!(handles, vec![1, 2]);

        assert_eq!(directory.errors().len(), 1);
        assert!(matches!(
            &directory.errors()[0],
            ServiceError::Decode { origin, .. } if origin == "upload.vcf"
        ));
    }

    #[test]
    fn display() {
        let mut directory = ContactDirectory::new();
        directory.insert(ContactRecord::default());
        assert_eq!(directory.to_string(), "ContactDirectory with 1 contacts");
    }

    #[test]
    fn handle_parses() {
        assert_eq!(" 12 ".parse::<Handle>().unwrap(), Handle::new(12));
        assert!("x".parse::<Handle>().is_err());
    }
}
