// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordering checks for term stores.
//!
//! The binary searches are only correct over entries sorted ascending by term
//! text. These helpers find the first place that promise is broken so callers
//! can reject the data instead of returning quietly wrong suggestions.

use crate::types::TermEntry;
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// `entries[position - 1].term > entries[position].term`.
    UnsortedStore {
        position: usize,
        previous: String,
        current: String,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::UnsortedStore {
                position,
                previous,
                current,
            } => {
                write!(
                    f,
                    "term store not sorted at position {}: '{}' > '{}'",
                    position, previous, current
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Position of the first entry that sorts before its predecessor, if any.
pub fn find_unsorted(entries: &[TermEntry]) -> Option<usize> {
    entries
        .windows(2)
        .position(|pair| pair[0].term.as_bytes() > pair[1].term.as_bytes())
        .map(|i| i + 1)
}

/// True if entries are ascending by term text. Duplicates are allowed.
pub fn is_sorted_by_term(entries: &[TermEntry]) -> bool {
    find_unsorted(entries).is_none()
}

/// Check sortedness, describing the first violation.
pub fn ensure_sorted(entries: &[TermEntry]) -> Result<(), InvariantError> {
    match find_unsorted(entries) {
        None => Ok(()),
        Some(position) => Err(InvariantError::UnsortedStore {
            position,
            previous: entries[position - 1].term.clone(),
            current: entries[position].term.clone(),
        }),
    }
}
