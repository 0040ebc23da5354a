// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! Two steps per query. The range locator binary-searches the sorted store for
//! the first and last entries carrying the prefix; the matches are contiguous,
//! so that pair of indices is the whole answer. The query step then copies
//! that slice out and ranks it by weight.

mod query;
mod range;

pub use query::*;
pub use range::*;
