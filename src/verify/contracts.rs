// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the store, the range locator and the ranker.
//!
//! These are debug-mode assertions:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` only)
//! 2. **Early failure detection** while tests run
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Property                                        |
//! |--------------------------|-------------------------------------------------|
//! | `check_store_sorted`     | entries ascending by term bytes                 |
//! | `check_range_sound`      | every entry in the range has the prefix         |
//! | `check_range_complete`   | the neighbours just outside the range do not    |
//! | `check_ranked_by_weight` | suggestions descending by weight                |
//!
//! `check_range_complete` only looks at the two neighbours. In a sorted store
//! prefix matches are contiguous, so that is enough.

use crate::types::{MatchRange, TermEntry};
use std::cmp::Ordering;

/// Check that entries are sorted ascending by term.
///
/// # Panics (debug builds only)
/// Panics on the first adjacent pair out of order.
#[inline]
pub fn check_store_sorted(entries: &[TermEntry]) {
    if cfg!(debug_assertions) {
        for i in 1..entries.len() {
            debug_assert!(
                entries[i - 1].term.as_bytes() <= entries[i].term.as_bytes(),
                "Contract violation: store not sorted - entries[{}] ('{}') > entries[{}] ('{}')",
                i - 1,
                entries[i - 1].term,
                i,
                entries[i].term
            );
        }
    }
}

/// Check that every entry in `range` starts with `prefix`.
#[inline]
pub fn check_range_sound(entries: &[TermEntry], prefix: &str, range: &MatchRange) {
    debug_assert!(
        range.lowest <= range.highest && range.highest < entries.len(),
        "Contract violation: range [{}, {}] invalid for store of {} entries",
        range.lowest,
        range.highest,
        entries.len()
    );

    if cfg!(debug_assertions) {
        for (i, entry) in entries
            .iter()
            .enumerate()
            .take(range.highest + 1)
            .skip(range.lowest)
        {
            debug_assert!(
                entry.has_prefix(prefix),
                "Contract violation: entries[{}] ('{}') in range but lacks prefix '{}'",
                i,
                entry.term,
                prefix
            );
        }
    }
}

/// Check that the entries just outside `range` do not start with `prefix`.
#[inline]
pub fn check_range_complete(entries: &[TermEntry], prefix: &str, range: &MatchRange) {
    if range.lowest > 0 {
        debug_assert!(
            !entries[range.lowest - 1].has_prefix(prefix),
            "Contract violation: entries[{}] ('{}') matches '{}' but precedes the range",
            range.lowest - 1,
            entries[range.lowest - 1].term,
            prefix
        );
    }
    if let Some(next) = entries.get(range.highest + 1) {
        debug_assert!(
            !next.has_prefix(prefix),
            "Contract violation: entries[{}] ('{}') matches '{}' but follows the range",
            range.highest + 1,
            next.term,
            prefix
        );
    }
}

/// Check that suggestions are in non-increasing weight order.
#[inline]
pub fn check_ranked_by_weight(entries: &[TermEntry]) {
    for i in 1..entries.len() {
        // Same total order the ranker sorts by, so NaN weights cannot trip it.
        debug_assert!(
            entries[i - 1].weight.total_cmp(&entries[i].weight) != Ordering::Less,
            "Contract violation: suggestions not ranked - [{}] weight {} < [{}] weight {}",
            i - 1,
            entries[i - 1].weight,
            i,
            entries[i].weight
        );
    }
}
