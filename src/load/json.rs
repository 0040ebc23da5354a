// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON term files: `[{"term": "Bogota", "weight": 20.0}, ...]`.

use std::fs;
use std::path::Path;

use log::debug;

use super::LoadError;
use crate::store::TermStore;
use crate::types::TermEntry;

/// Parse a JSON array of term entries into a sorted store.
pub fn parse_terms_json(input: &str) -> Result<TermStore, LoadError> {
    let entries: Vec<TermEntry> = serde_json::from_str(input)?;
    debug!("parsed {} term entries from JSON", entries.len());
    Ok(TermStore::new(entries))
}

/// Read a JSON term file from disk.
pub fn read_terms_json(path: impl AsRef<Path>) -> Result<TermStore, LoadError> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_terms_json(&content)
}
