//! Duplicate-candidate search over all pairs of records.

use std::fmt;

use serde::Serialize;

use cardbox_core::config::check_threshold;
use cardbox_core::constants::DEFAULT_DUPLICATE_THRESHOLD;
use cardbox_rfc::codec::ContactRecord;

use super::{ContactDirectory, Handle};
use crate::error::ServiceResult;
use crate::similarity::ratio;

/// Which comparison flagged a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateReason {
    Name,
    Phone,
    NameAndPhone,
}

impl DuplicateReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::NameAndPhone => "name and phone",
        }
    }
}

impl fmt::Display for DuplicateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two records that may describe the same person. Never merged automatically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateCandidate {
    /// Lower handle of the pair.
    pub first: Handle,
    pub second: Handle,
    pub reason: DuplicateReason,
    pub name_similarity: f64,
    pub phone_similarity: f64,
}

impl ContactDirectory {
    /// Finds candidate pairs with the default threshold of 0.9.
    ///
    /// See [`ContactDirectory::find_duplicate_candidates_above`].
    #[must_use]
    pub fn find_duplicate_candidates(&self) -> Vec<DuplicateCandidate> {
        self.candidates_above(DEFAULT_DUPLICATE_THRESHOLD)
    }

    /// Finds every pair `(a, b)` with `a < b` whose full-name or
    /// primary-phone similarity is strictly above `threshold`.
    ///
    /// ## Summary
    /// A missing full name or phone compares as the empty string, and two
    /// empty strings are a perfect match. Records without names or without
    /// phones are therefore reported against each other; callers that do not
    /// want that must filter them out.
    ///
    /// ## Errors
    /// Returns an error if `threshold` is not within `0.0..=1.0`.
    pub fn find_duplicate_candidates_above(
        &self,
        threshold: f64,
    ) -> ServiceResult<Vec<DuplicateCandidate>> {
        let threshold = check_threshold(threshold)?;
        Ok(self.candidates_above(threshold))
    }

    #[tracing::instrument(skip(self), fields(contacts = self.len()))]
    fn candidates_above(&self, threshold: f64) -> Vec<DuplicateCandidate> {
        let entries: Vec<(Handle, &ContactRecord)> = self.iter().collect();
        let mut candidates = Vec::new();

        for (i, &(first, a)) in entries.iter().enumerate() {
            for &(second, b) in &entries[i + 1..] {
                if let Some(candidate) = compare(first, a, second, b, threshold) {
                    candidates.push(candidate);
                }
            }
        }

        tracing::debug!(count = candidates.len(), "Found duplicate candidates");

        candidates
    }
}

fn compare(
    first: Handle,
    a: &ContactRecord,
    second: Handle,
    b: &ContactRecord,
    threshold: f64,
) -> Option<DuplicateCandidate> {
    let name_similarity = ratio(
        a.full_name.as_deref().unwrap_or_default(),
        b.full_name.as_deref().unwrap_or_default(),
    );
    let phone_similarity = ratio(a.primary_phone(), b.primary_phone());

    let reason = match (name_similarity > threshold, phone_similarity > threshold) {
        (true, true) => DuplicateReason::NameAndPhone,
        (true, false) => DuplicateReason::Name,
        (false, true) => DuplicateReason::Phone,
        (false, false) => return None,
    };

    Some(DuplicateCandidate {
        first,
        second,
        reason,
        name_similarity,
        phone_similarity,
    })
}
