// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sorted term store construction.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **STORE_SORTED**: entries are ascending by term text, compared byte-wise.
//!    ASCII uppercase sorts before lowercase; duplicates sit next to each other.
//! 2. **STORE_IMMUTABLE**: no method hands out `&mut` access to the entries.
//!    Once built, a store can be shared across threads for reading.
//!
//! `TermStore::new` establishes (1) by sorting. `TermStore::from_sorted` checks
//! it instead, for callers whose data is already ordered.

use crate::search::{highest_match, lowest_match, match_range, query, QueryError};
use crate::types::{MatchRange, Suggestions, TermEntry};
use crate::verify::contracts::check_store_sorted;
use crate::verify::{ensure_sorted, InvariantError};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this many entries a parallel sort costs more than it saves.
#[cfg(feature = "parallel")]
const PARALLEL_SORT_THRESHOLD: usize = 1 << 14;

/// Immutable (term, weight) entries, ascending by term.
#[derive(Debug, Clone, Default)]
pub struct TermStore {
    entries: Vec<TermEntry>,
}

impl TermStore {
    /// Build a store from entries in any order.
    pub fn new(mut entries: Vec<TermEntry>) -> Self {
        sort_by_term(&mut entries);
        check_store_sorted(&entries);
        Self { entries }
    }

    /// Wrap entries that are already ascending by term.
    ///
    /// Returns `Err` at the first out-of-order pair rather than re-sorting.
    pub fn from_sorted(entries: Vec<TermEntry>) -> Result<Self, InvariantError> {
        ensure_sorted(&entries)?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TermEntry> {
        self.entries.get(index)
    }

    /// The sorted entries, for handing to the free search functions.
    pub fn entries(&self) -> &[TermEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TermEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<TermEntry> {
        self.entries
    }

    /// See [`lowest_match`].
    pub fn lowest_match(&self, prefix: &str) -> Option<usize> {
        lowest_match(&self.entries, prefix)
    }

    /// See [`highest_match`].
    pub fn highest_match(&self, prefix: &str) -> Option<usize> {
        highest_match(&self.entries, prefix)
    }

    /// See [`match_range`].
    pub fn match_range(&self, prefix: &str) -> Option<MatchRange> {
        match_range(&self.entries, prefix)
    }

    /// All entries starting with `prefix`, heaviest first. See [`query`].
    pub fn suggest(&self, prefix: &str) -> Result<Suggestions, QueryError> {
        query(&self.entries, prefix)
    }
}

impl From<Vec<TermEntry>> for TermStore {
    fn from(entries: Vec<TermEntry>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<TermEntry> for TermStore {
    fn from_iter<I: IntoIterator<Item = TermEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TermStore {
    type Item = &'a TermEntry;
    type IntoIter = std::slice::Iter<'a, TermEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Sort ascending by term bytes. Order among equal terms is unspecified.
fn sort_by_term(entries: &mut [TermEntry]) {
    #[cfg(feature = "parallel")]
    {
        if entries.len() >= PARALLEL_SORT_THRESHOLD {
            entries.par_sort_unstable_by(|a, b| a.term.as_bytes().cmp(b.term.as_bytes()));
            return;
        }
    }

    entries.sort_unstable_by(|a, b| a.term.as_bytes().cmp(b.term.as_bytes()));
}
