//! Boundary inputs: empty store, empty prefix, overlong prefix, odd bytes.

use super::common::{cities_store, make_store, terms};
use autosuggest::{highest_match, lowest_match, query, TermStore};

#[test]
fn test_empty_prefix_matches_nothing() {
    let store = cities_store();
    assert_eq!(lowest_match(store.entries(), ""), None);
    assert_eq!(highest_match(store.entries(), ""), None);
    assert_eq!(query(store.entries(), "").unwrap().count(), 0);
}

#[test]
fn test_empty_store() {
    let store = TermStore::new(Vec::new());
    assert_eq!(lowest_match(store.entries(), "x"), None);
    assert_eq!(query(store.entries(), "x").unwrap().count(), 0);
}

#[test]
fn test_prefix_longer_than_every_term() {
    let store = cities_store();
    assert!(query(store.entries(), "Bogota, Colombia").unwrap().is_empty());
    assert!(query(store.entries(), &"B".repeat(500)).unwrap().is_empty());
}

#[test]
fn test_prefix_before_and_after_all_terms() {
    let store = cities_store();
    assert!(store.suggest("A").unwrap().is_empty());
    assert!(store.suggest("~").unwrap().is_empty());
    // Between "Bombay" and "Boston"
    assert!(store.suggest("Bon").unwrap().is_empty());
}

#[test]
fn test_single_entry_store() {
    let store = make_store(&[("only", 1.0)]);
    assert_eq!(lowest_match(store.entries(), "o"), Some(0));
    assert_eq!(highest_match(store.entries(), "only"), Some(0));
    assert!(store.suggest("onlyx").unwrap().is_empty());
    assert!(store.suggest("n").unwrap().is_empty());
}

#[test]
fn test_whitespace_prefix_is_literal() {
    let store = make_store(&[(" padded", 1.0), ("plain", 2.0)]);
    assert_eq!(terms(store.suggest(" ").unwrap().as_slice()), vec![" padded"]);
}

#[test]
fn test_multibyte_terms() {
    let store = make_store(&[("Zürich", 3.0), ("Zagreb", 2.0), ("Zwolle", 1.0), ("東京", 9.0)]);
    assert_eq!(terms(store.suggest("Zü").unwrap().as_slice()), vec!["Zürich"]);
    assert_eq!(terms(store.suggest("東").unwrap().as_slice()), vec!["東京"]);
    assert_eq!(store.suggest("Z").unwrap().count(), 3);
}

#[test]
fn test_duplicate_terms_all_returned() {
    let store = make_store(&[("dup", 1.0), ("dup", 3.0), ("dup", 2.0)]);
    let found = store.suggest("du").unwrap();
    let weights: Vec<f64> = found.iter().map(|e| e.weight).collect();
    assert_eq!(weights, vec![3.0, 2.0, 1.0]);
}
