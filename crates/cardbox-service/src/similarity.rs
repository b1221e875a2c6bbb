//! Approximate string matching for duplicate detection.
//!
//! ## Summary
//! [`ratio`] is the classic matching-blocks similarity
//! `2 * M / (len(a) + len(b))`, where `M` is the number of characters in
//! the matching blocks found by recursively taking the longest common
//! substring and repeating on the pieces to its left and right.
//!
//! Tie-breaking and the "popular character" heuristic for long second
//! strings (200+ characters) follow the widely used difflib behaviour, so
//! scores are reproducible against it. Lengths are counted in characters.

use std::collections::{HashMap, HashSet};

/// Second-string length from which very frequent characters are ignored
/// when seeding matches.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Similarity of two strings in `[0.0, 1.0]`.
///
/// Two empty strings are identical (`1.0`).
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched = Matcher::new(&a, &b).matching_chars();
    2.0 * to_f64(matched) / to_f64(total)
}

fn to_f64(n: usize) -> f64 {
    u32::try_from(n).map_or(f64::from(u32::MAX), f64::from)
}

struct Matcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// Positions of each character in `b`, ascending; popular characters removed.
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> Matcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            let popular: HashSet<char> = b2j
                .iter()
                .filter(|(_, positions)| positions.len() > limit)
                .map(|(&c, _)| c)
                .collect();
            for c in popular {
                b2j.remove(&c);
            }
        }

        Self { a, b, b2j }
    }

    /// Total size of all matching blocks.
    fn matching_chars(&self) -> usize {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut matched = 0;

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }

            matched += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        matched
    }

    /// Longest common block of `a[alo..ahi]` and `b[blo..bhi]` as
    /// `(i, j, size)`.
    ///
    /// Of equally long blocks, the one starting earliest in `a` wins, then
    /// the one starting earliest in `b`.
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (a, b) = (self.a, self.b);
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j -> length of the match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut next_j2len = HashMap::new();

            for &j in self.b2j.get(c).map_or(&[][..], Vec::as_slice) {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }

                let k = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next_j2len.insert(j, k);

                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }

            j2len = next_j2len;
        }

        // Popular characters never seed a match but may extend one.
        while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && a[best_i + best_size] == b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn identical_and_empty() {
        assert_close(ratio("", ""), 1.0);
        assert_close(ratio("John Doe", "John Doe"), 1.0);
        assert_close(ratio("abc", ""), 0.0);
        assert_close(ratio("", "abc"), 0.0);
    }

    #[test]
    fn classic_examples() {
        assert_close(ratio("abcd", "bcde"), 0.75);
        assert_close(ratio("qabxcd", "abycdf"), 2.0 / 3.0);
        assert_close(
            ratio(
                "private Thread currentThread;",
                "private volatile Thread currentThread;",
            ),
            58.0 / 67.0,
        );
    }

    #[test]
    fn names() {
        assert_close(ratio("John Doe", "Jon Doe"), 14.0 / 15.0);
        assert_close(ratio("John Doe", "Jane Doe"), 0.75);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_close(ratio("Иван Петров", "Иван Петров"), 1.0);
        assert_close(ratio("Иван Петров", "Петров Иван"), 6.0 / 11.0);
    }

    #[test]
    fn phones_differing_in_last_digit() {
        assert_close(ratio("+1-555-111-1111", "+1-555-111-1112"), 14.0 / 15.0);
    }

    #[test]
    fn popular_characters_in_long_strings_do_not_seed_matches() {
        let a = format!("{}{}", "a".repeat(150), "b".repeat(100));
        let b = format!("{}{}", "b".repeat(100), "a".repeat(150));
        assert_close(ratio(&a, &b), 0.0);
    }

    #[test]
    fn symmetric_for_simple_cases() {
        assert_close(ratio("Jane Doe", "John Doe"), ratio("John Doe", "Jane Doe"));
    }
}
