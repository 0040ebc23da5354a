//! Property tests for the range locator.
//!
//! Verifies that:
//! 1. Lowest and highest are found together or not at all, and lowest <= highest
//! 2. Both bounds agree with a linear scan
//! 3. Every entry inside the range matches, nothing outside does

use super::oracles::{oracle_highest, oracle_lowest};
use autosuggest::{highest_match, lowest_match, match_range, TermEntry, TermStore};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabet (mixed case) so prefixes collide often.
fn term_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB]{0,6}").unwrap()
}

fn store_strategy() -> impl Strategy<Value = TermStore> {
    prop::collection::vec((term_strategy(), -1000.0f64..1000.0), 0..60).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(term, weight)| TermEntry::new(term, weight))
            .collect()
    })
}

fn prefix_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB]{0,4}").unwrap()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_bounds_found_together(store in store_strategy(), prefix in prefix_strategy()) {
        let lo = lowest_match(store.entries(), &prefix);
        let hi = highest_match(store.entries(), &prefix);
        prop_assert_eq!(lo.is_some(), hi.is_some());
        if let (Some(lo), Some(hi)) = (lo, hi) {
            prop_assert!(lo <= hi);
        }
    }

    #[test]
    fn prop_bounds_match_oracle(store in store_strategy(), prefix in prefix_strategy()) {
        prop_assert_eq!(
            lowest_match(store.entries(), &prefix),
            oracle_lowest(store.entries(), &prefix)
        );
        prop_assert_eq!(
            highest_match(store.entries(), &prefix),
            oracle_highest(store.entries(), &prefix)
        );
    }

    #[test]
    fn prop_range_sound_and_complete(store in store_strategy(), prefix in prefix_strategy()) {
        match match_range(store.entries(), &prefix) {
            Some(range) => {
                for (i, entry) in store.iter().enumerate() {
                    prop_assert_eq!(
                        range.contains(i),
                        entry.has_prefix(&prefix),
                        "index {} ({:?}) vs range {:?}", i, entry.term, range
                    );
                }
            }
            None => {
                prop_assert!(prefix.is_empty() || store.iter().all(|e| !e.has_prefix(&prefix)));
            }
        }
    }

    #[test]
    fn prop_empty_prefix_never_matches(store in store_strategy()) {
        prop_assert_eq!(lowest_match(store.entries(), ""), None);
        prop_assert_eq!(highest_match(store.entries(), ""), None);
    }

    #[test]
    fn prop_existing_term_is_found(store in store_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!store.is_empty());
        let entry = &store.entries()[pick.index(store.len())];
        prop_assume!(!entry.term.is_empty());

        let range = match_range(store.entries(), &entry.term);
        prop_assert!(range.is_some());
        let range = range.unwrap();
        prop_assert!(store.entries()[range.lowest].term.starts_with(&entry.term));
    }
}
