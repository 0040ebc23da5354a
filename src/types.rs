// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a suggestion query.
//!
//! Three shapes move through the crate: the `TermEntry` every store is made of,
//! the `MatchRange` the range locator hands to the ranker, and the `Suggestions`
//! the caller gets back.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **TermStore**: entries ascending by `term`, byte-wise. The binary searches
//!   assume it and never check it in release builds.
//!
//! - **MatchRange**: `lowest <= highest`, both inclusive and in bounds for the
//!   store that produced them.
//!
//! - **Suggestions**: descending by `weight`. Nothing is promised about the order
//!   of equal weights.

use serde::{Deserialize, Serialize};

/// A single (term, weight) pair.
///
/// Terms compare byte-wise and case-sensitively, so `"Zurich" < "amsterdam"`.
/// Weights only ever rank results; they play no part in locating them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermEntry {
    pub term: String,
    pub weight: f64,
}

impl TermEntry {
    pub fn new(term: impl Into<String>, weight: f64) -> Self {
        Self {
            term: term.into(),
            weight,
        }
    }

    /// True if this entry's text begins with the exact bytes of `prefix`.
    #[inline]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.term.as_bytes().starts_with(prefix.as_bytes())
    }
}

/// Inclusive index range of the entries matching a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRange {
    pub lowest: usize,
    pub highest: usize,
}

// A locator range always covers at least one entry; "no match" is `None`.
#[allow(clippy::len_without_is_empty)]
impl MatchRange {
    /// Number of entries covered. Never zero for a range the locator produced.
    pub fn len(&self) -> usize {
        self.highest - self.lowest + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.lowest <= index && index <= self.highest
    }
}

/// Matching entries for one query, heaviest first.
///
/// Owns copies of the store's entries, so it can outlive the store and be
/// moved to another thread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Suggestions {
    entries: Vec<TermEntry>,
}

impl Suggestions {
    /// An empty result (no match, or rejected input).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap entries already ranked by weight.
    pub(crate) fn from_ranked(entries: Vec<TermEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Alias for `len`, matching the "(matches, count)" shape of a query.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TermEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[TermEntry] {
        &self.entries
    }

    /// The `limit` heaviest entries (or all of them, if there are fewer).
    pub fn top(&self, limit: usize) -> &[TermEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn into_vec(self) -> Vec<TermEntry> {
        self.entries
    }
}

impl IntoIterator for Suggestions {
    type Item = TermEntry;
    type IntoIter = std::vec::IntoIter<TermEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Suggestions {
    type Item = &'a TermEntry;
    type IntoIter = std::slice::Iter<'a, TermEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
