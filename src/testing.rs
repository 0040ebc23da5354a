//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::store::TermStore;
use crate::types::TermEntry;

/// Create a single entry.
pub fn make_entry(term: &str, weight: f64) -> TermEntry {
    TermEntry::new(term, weight)
}

/// Build a store from `(term, weight)` pairs in any order.
pub fn make_store(pairs: &[(&str, f64)]) -> TermStore {
    pairs
        .iter()
        .map(|(term, weight)| make_entry(term, *weight))
        .collect()
}

/// The three-city store used throughout the docs:
/// sorted as Bogota (20), Bombay (5), Boston (10).
pub fn cities_store() -> TermStore {
    make_store(&[("Boston", 10.0), ("Bombay", 5.0), ("Bogota", 20.0)])
}

/// A larger store of world cities with populations as weights.
pub fn world_cities_store() -> TermStore {
    make_store(&[
        ("Buenos Aires, Argentina", 13_076_300.0),
        ("Bogota, Colombia", 7_866_106.0),
        ("Bombay, India", 12_691_836.0),
        ("Boston, Massachusetts, United States", 4_628_910.0),
        ("Bonn, Germany", 318_809.0),
        ("Cairo, Egypt", 7_734_614.0),
        ("Calgary, Alberta, Canada", 1_019_942.0),
        ("Cali, Colombia", 2_392_877.0),
        ("Dhaka, Bangladesh", 10_356_500.0),
        ("Dallas, Texas, United States", 1_197_816.0),
        ("Tokyo, Japan", 8_336_599.0),
        ("Toronto, Ontario, Canada", 2_503_281.0),
        ("toledo, Spain", 83_108.0),
    ])
}
