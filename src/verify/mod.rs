// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: construction-time checks and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Construction-time checks** (`InvariantError`, `find_unsorted`) that
//!    `TermStore::from_sorted` runs once, so a store that exists is a store
//!    that is sorted.
//!
//! 2. **Runtime contracts** that panic in debug builds when the range locator
//!    or the ranker hands back something inconsistent. Zero-cost in release.

mod types;
pub mod contracts;

pub use types::*;
