// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading term files into a `TermStore`.
//!
//! Two input shapes are supported:
//!
//! - **Text** (`text`): a count line, then one `<weight> <term>` per line.
//! - **JSON** (`json`): an array of `{"term": ..., "weight": ...}` objects.
//!
//! Either way the loader's job ends with a sorted store; the search code never
//! re-checks the order.

pub mod json;
pub mod text;

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

pub use json::{parse_terms_json, read_terms_json};
pub use text::parse_terms;

use crate::store::TermStore;

/// How forgiving the text loader is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Fail on malformed or missing lines instead of warning and skipping.
    pub strict: bool,
    /// The first non-blank line is the entry count. When false, every line is an entry.
    pub header: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            strict: false,
            header: true,
        }
    }
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

/// Why a term file could not be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// Reading failed (missing file, permissions, invalid UTF-8).
    Io(io::Error),
    /// The count line is missing, not a number, or zero.
    Header { found: String },
    /// An entry line lacks a weight or a term (strict mode only).
    Malformed { line: usize, content: String },
    /// The file ended before `expected` entries were read (strict mode only).
    Truncated { expected: usize, found: usize },
    /// The JSON document is not an array of term entries.
    Json(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read terms: {}", e),
            LoadError::Header { found } => {
                write!(f, "invalid entry count line: '{}'", found)
            }
            LoadError::Malformed { line, content } => {
                write!(f, "malformed entry on line {}: '{}'", line, content)
            }
            LoadError::Truncated { expected, found } => {
                write!(f, "expected {} entries but found {}", expected, found)
            }
            LoadError::Json(e) => write!(f, "invalid terms JSON: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

/// Load a text term file from disk.
pub fn read_terms(path: impl AsRef<Path>, options: &LoadOptions) -> Result<TermStore, LoadError> {
    let file = File::open(path.as_ref())?;
    parse_terms(BufReader::new(file), options)
}

/// Load a term file, picking the format from the extension (`.json` or text).
pub fn read_any(path: impl AsRef<Path>, options: &LoadOptions) -> Result<TermStore, LoadError> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        read_terms_json(path)
    } else {
        read_terms(path, options)
    }
}
