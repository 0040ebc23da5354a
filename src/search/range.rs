// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Range locator: binary search for the bounds of a prefix.
//!
//! In a store sorted by term, every entry starting with `prefix` sits in one
//! contiguous run. Both searches probe the midpoint and ask one question: how
//! does the entry's text, cut to the prefix's length, compare to the prefix?
//!
//! - Equal: the entry matches. Remember it, then keep looking left (for the
//!   lowest match) or right (for the highest).
//! - Less: the run lies to the right.
//! - Greater: the run lies to the left.
//!
//! Each search is O(log n) comparisons of at most `prefix.len()` bytes.
//!
//! # Empty prefix
//!
//! An empty prefix matches nothing. Every term technically starts with "", but a
//! suggestion box with nothing typed should not dump the whole dataset.
//!
//! # Precondition
//!
//! `entries` must be ascending by term bytes (`TermStore` guarantees this). On
//! unsorted input the searches still terminate but may miss matches.

use crate::types::{MatchRange, TermEntry};
use std::cmp::Ordering;

/// Compare `term` cut to `prefix.len()` bytes against `prefix`.
///
/// `Equal` exactly when `term` starts with `prefix`. A term shorter than the
/// prefix that agrees on every byte it has compares `Less`.
#[inline]
fn compare_prefix(term: &str, prefix: &[u8]) -> Ordering {
    let term = term.as_bytes();
    let head = &term[..term.len().min(prefix.len())];
    head.cmp(prefix)
}

/// Index of the first entry whose term starts with `prefix`.
///
/// Returns `None` if the store or the prefix is empty, or nothing matches.
///
/// # Example
///
/// ```ignore
/// // ["Bogota", "Bombay", "Boston", "Cairo"]
/// assert_eq!(lowest_match(&entries, "Bo"), Some(0));
/// assert_eq!(lowest_match(&entries, "Bos"), Some(2));
/// assert_eq!(lowest_match(&entries, "Z"), None);
/// ```
pub fn lowest_match(entries: &[TermEntry], prefix: &str) -> Option<usize> {
    if entries.is_empty() || prefix.is_empty() {
        return None;
    }

    let needle = prefix.as_bytes();
    // Half-open [lo, hi): no `mid - 1` underflow when mid is 0.
    let mut lo = 0usize;
    let mut hi = entries.len();
    let mut found = None;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match compare_prefix(&entries[mid].term, needle) {
            Ordering::Equal => {
                found = Some(mid);
                hi = mid;
            }
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    found
}

/// Index of the last entry whose term starts with `prefix`.
///
/// Same rejection rules as [`lowest_match`].
pub fn highest_match(entries: &[TermEntry], prefix: &str) -> Option<usize> {
    if entries.is_empty() || prefix.is_empty() {
        return None;
    }

    let needle = prefix.as_bytes();
    let mut lo = 0usize;
    let mut hi = entries.len();
    let mut found = None;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match compare_prefix(&entries[mid].term, needle) {
            Ordering::Equal => {
                found = Some(mid);
                lo = mid + 1;
            }
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    found
}

/// Both bounds at once.
///
/// Finds the lowest match, then runs the highest-match search over the tail
/// starting there, which is still sorted and usually much shorter.
pub fn match_range(entries: &[TermEntry], prefix: &str) -> Option<MatchRange> {
    let lowest = lowest_match(entries, prefix)?;
    let highest = lowest + highest_match(&entries[lowest..], prefix)?;
    Some(MatchRange { lowest, highest })
}
