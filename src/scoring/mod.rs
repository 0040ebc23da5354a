// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how matching terms get ordered.
//!
//! A term's weight is its whole score. There is no field hierarchy or position
//! bonus here; the loader's weights are taken as given.

pub mod ranking;

pub use ranking::*;
