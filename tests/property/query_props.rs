//! Property tests for query results.
//!
//! Verifies that:
//! 1. Results are ranked by non-increasing weight
//! 2. Results are exactly the entries carrying the prefix (as a multiset)
//! 3. Queries are idempotent
//! 4. Building from any permutation gives the same answers

use super::common::{canonical, oracle_matches};
use autosuggest::{query, TermEntry, TermStore};
use proptest::prelude::*;

fn pairs_strategy() -> impl Strategy<Value = Vec<(String, f64)>> {
    let term = prop::string::string_regex("[a-cA-C]{1,5}").unwrap();
    prop::collection::vec((term, -50.0f64..50.0), 0..50)
}

fn build(pairs: &[(String, f64)]) -> TermStore {
    pairs
        .iter()
        .map(|(t, w)| TermEntry::new(t.clone(), *w))
        .collect()
}

proptest! {
    #[test]
    fn prop_results_ranked(pairs in pairs_strategy(), prefix in "[a-cA-C]{1,3}") {
        let store = build(&pairs);
        let found = query(store.entries(), &prefix).unwrap();
        for pair in found.as_slice().windows(2) {
            prop_assert!(pair[0].weight >= pair[1].weight);
        }
    }

    #[test]
    fn prop_results_are_exactly_matches(pairs in pairs_strategy(), prefix in "[a-cA-C]{1,3}") {
        let store = build(&pairs);
        let found = query(store.entries(), &prefix).unwrap();
        for entry in &found {
            prop_assert!(entry.term.starts_with(&prefix));
        }
        prop_assert_eq!(
            canonical(found.into_vec()),
            canonical(oracle_matches(&store, &prefix))
        );
    }

    #[test]
    fn prop_query_idempotent(pairs in pairs_strategy(), prefix in "[a-cA-C]{0,3}") {
        let store = build(&pairs);
        let a = query(store.entries(), &prefix).unwrap();
        let b = query(store.entries(), &prefix).unwrap();
        prop_assert_eq!(a.count(), b.count());
        prop_assert_eq!(canonical(a.into_vec()), canonical(b.into_vec()));
    }

    #[test]
    fn prop_input_order_irrelevant(pairs in pairs_strategy(), prefix in "[a-cA-C]{1,2}") {
        let forward = build(&pairs);
        let mut reversed_pairs = pairs.clone();
        reversed_pairs.reverse();
        let reversed = build(&reversed_pairs);

        prop_assert_eq!(
            canonical(forward.suggest(&prefix).unwrap().into_vec()),
            canonical(reversed.suggest(&prefix).unwrap().into_vec())
        );
    }

    #[test]
    fn prop_overlong_prefix_matches_nothing(pairs in pairs_strategy()) {
        let store = build(&pairs);
        let prefix = "a".repeat(6);
        prop_assert!(query(store.entries(), &prefix).unwrap().is_empty());
    }
}
