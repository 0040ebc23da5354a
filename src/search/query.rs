// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query execution: locate, copy, rank.
//!
//! Rejected input (empty store, empty prefix) and "no match" are not errors;
//! both come back as `Ok` with an empty result. The one real failure is not
//! getting memory for the result, which is reported instead of aborting, and
//! never yields a partial result.

use crate::scoring::rank_by_weight;
use crate::search::range::match_range;
use crate::types::{Suggestions, TermEntry};
use crate::verify::contracts::{check_range_complete, check_range_sound, check_ranked_by_weight};
use std::fmt;

/// Why a query could not produce its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The result buffer for `requested` entries could not be allocated.
    Allocation { requested: usize },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Allocation { requested } => {
                write!(f, "could not allocate result for {} matches", requested)
            }
        }
    }
}

impl std::error::Error for QueryError {}

/// All entries starting with `prefix`, heaviest first.
///
/// `entries` must be ascending by term (see [`crate::TermStore`]). The result
/// holds copies; the store is never touched.
///
/// # Example
///
/// ```ignore
/// let store = TermStore::new(vec![
///     TermEntry::new("Boston", 10.0),
///     TermEntry::new("Bombay", 5.0),
///     TermEntry::new("Bogota", 20.0),
/// ]);
/// let found = query(store.entries(), "Bo")?;
/// // Bogota (20), Boston (10), Bombay (5)
/// ```
pub fn query(entries: &[TermEntry], prefix: &str) -> Result<Suggestions, QueryError> {
    if entries.is_empty() || prefix.is_empty() {
        return Ok(Suggestions::empty());
    }

    let Some(range) = match_range(entries, prefix) else {
        return Ok(Suggestions::empty());
    };
    check_range_sound(entries, prefix, &range);
    check_range_complete(entries, prefix, &range);

    let mut matches = reserve_matches(range.len())?;
    matches.extend_from_slice(&entries[range.lowest..=range.highest]);

    rank_by_weight(&mut matches);
    check_ranked_by_weight(&matches);

    Ok(Suggestions::from_ranked(matches))
}

/// Empty buffer with room for exactly `requested` entries.
fn reserve_matches(requested: usize) -> Result<Vec<TermEntry>, QueryError> {
    let mut matches = Vec::new();
    matches
        .try_reserve_exact(requested)
        .map_err(|_| QueryError::Allocation { requested })?;
    Ok(matches)
}
