// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The plain-text term format.
//!
//! ```text
//! 3
//!     13076300    Buenos Aires, Argentina
//!     2606152     Bogota, Colombia
//!     -4.5        Nowhere
//! ```
//!
//! The count comes first. Each entry line is a weight, whitespace, and then the
//! rest of the line as the term (spaces included, line ending stripped). Terms
//! are kept whole; there is no length limit. A NaN weight makes the line
//! malformed.
//!
//! Lenient mode skips bad lines with a warning and keeps whatever it could
//! read. Strict mode turns the same situations into errors.

use std::io::BufRead;

use log::{debug, warn};

use super::{LoadError, LoadOptions};
use crate::store::TermStore;
use crate::types::TermEntry;

/// Cap on the up-front reservation, so a bogus count can't request gigabytes.
const MAX_PREALLOCATE: usize = 1 << 20;

/// Split an entry line into `(weight, term)`.
///
/// Returns `None` when the line has no parseable weight, a NaN weight, or no
/// term after it. NaN has no place in a descending ranking.
pub fn parse_line(line: &str) -> Option<TermEntry> {
    let line = line.trim_end_matches(['\n', '\r']);
    let rest = line.trim_start();

    let split = rest.find(char::is_whitespace)?;
    let (weight, term) = rest.split_at(split);
    let weight: f64 = weight.parse().ok()?;
    if weight.is_nan() {
        return None;
    }

    let term = term.trim_start();
    if term.is_empty() {
        return None;
    }

    Some(TermEntry::new(term, weight))
}

/// Parse the count line. Zero counts are rejected like non-numbers.
fn parse_header(line: &str) -> Result<usize, LoadError> {
    match line.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(LoadError::Header {
            found: line.trim().to_string(),
        }),
    }
}

/// Read a text term file into a sorted store.
pub fn parse_terms<R: BufRead>(reader: R, options: &LoadOptions) -> Result<TermStore, LoadError> {
    let mut lines = reader.lines().enumerate();

    let expected = if options.header {
        let mut header = None;
        for (_, line) in lines.by_ref() {
            let line = line?;
            if !line.trim().is_empty() {
                header = Some(parse_header(&line)?);
                break;
            }
        }
        let count = header.ok_or_else(|| LoadError::Header {
            found: String::new(),
        })?;
        Some(count)
    } else {
        None
    };

    let mut entries = Vec::with_capacity(expected.unwrap_or(0).min(MAX_PREALLOCATE));
    let mut consumed = 0usize;

    for (index, line) in lines {
        if expected.is_some_and(|count| consumed >= count) {
            debug!("ignoring input after {} declared entries", consumed);
            break;
        }

        let line = line?;
        let line_no = index + 1;

        if expected.is_none() && line.trim().is_empty() {
            continue;
        }
        consumed += 1;

        match parse_line(&line) {
            Some(entry) => entries.push(entry),
            None if options.strict => {
                return Err(LoadError::Malformed {
                    line: line_no,
                    content: line,
                });
            }
            None => warn!("skipping malformed line {}: '{}'", line_no, line),
        }
    }

    if let Some(count) = expected {
        if consumed < count {
            if options.strict {
                return Err(LoadError::Truncated {
                    expected: count,
                    found: consumed,
                });
            }
            warn!(
                "early end of input: expected {} entries, read {}",
                count, consumed
            );
        }
    }

    debug!("loaded {} term entries", entries.len());
    Ok(TermStore::new(entries))
}
