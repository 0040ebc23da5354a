// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: heaviest term first.
//!
//! Weights are `f64` and may be zero, negative, infinite or NaN. Sorting uses
//! `f64::total_cmp`, so every input has a well-defined order and the sort never
//! sees an inconsistent comparator. Positive NaN ranks above `+inf`, negative
//! NaN below `-inf`.
//!
//! Ties keep no particular order. The sort is unstable on purpose: callers that
//! need a deterministic order among equal weights must break ties themselves.

use crate::types::TermEntry;
use std::cmp::Ordering;

/// Compare two entries for ranking: greater weight sorts first.
///
/// # Example
///
/// ```ignore
/// let heavy = TermEntry::new("Bogota", 20.0);
/// let light = TermEntry::new("Bombay", 5.0);
///
/// assert_eq!(compare_by_weight_desc(&heavy, &light), Ordering::Less);
/// ```
#[inline]
pub fn compare_by_weight_desc(a: &TermEntry, b: &TermEntry) -> Ordering {
    b.weight.total_cmp(&a.weight)
}

/// Sort entries in place, heaviest first.
pub fn rank_by_weight(entries: &mut [TermEntry]) {
    entries.sort_unstable_by(compare_by_weight_desc);
}
