//! Repeated queries return the same entries and leave the store alone.

use super::common::{canonical, world_cities_store};

#[test]
fn test_repeated_query_same_multiset() {
    let store = world_cities_store();
    for prefix in ["B", "Bo", "C", "T", "Zz"] {
        let first = store.suggest(prefix).unwrap().into_vec();
        let second = store.suggest(prefix).unwrap().into_vec();
        assert_eq!(canonical(first), canonical(second), "prefix {:?}", prefix);
    }
}

#[test]
fn test_query_leaves_store_untouched() {
    let store = world_cities_store();
    let before = store.entries().to_vec();
    for prefix in ["B", "Ca", "D", "x"] {
        let _ = store.suggest(prefix).unwrap();
    }
    assert_eq!(store.entries(), before.as_slice());
}

#[test]
fn test_results_outlive_store() {
    let found = {
        let store = world_cities_store();
        store.suggest("Da").unwrap()
    };
    assert_eq!(found.count(), 1);
    assert_eq!(found.as_slice()[0].term, "Dallas, Texas, United States");
}
