//! Integration tests for the in-memory nutrition store.

use std::collections::BTreeMap;

use tdt_core::errors::NutritionError;
use tdt_core::NutritionSet;
use tdt_nutrition::{MemoryNutritionStore, NutritionStore};

fn set(pairs: &[(&str, f64)]) -> NutritionSet {
    pairs.iter().map(|(t, w)| (t.to_string(), *w)).collect()
}

fn volume_store(range: std::ops::Range<i64>) -> MemoryNutritionStore<f64> {
    range.map(|ts| (ts, ts as f64)).collect()
}

#[test]
fn add_overwrites_existing_window() {
    let mut store = MemoryNutritionStore::new();
    store.add(10, set(&[("a", 1.0)]));
    store.add(10, set(&[("b", 2.0)]));

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(10).unwrap(), &set(&[("b", 2.0)]));
}

#[test]
fn get_missing_window_is_not_found() {
    let store: MemoryNutritionStore<NutritionSet> = MemoryNutritionStore::new();
    let err = store.get(10).unwrap_err();
    assert!(matches!(err, NutritionError::NotFound { timestamp: 10 }));
}

#[test]
fn all_returns_every_window_in_order() {
    let mut store = MemoryNutritionStore::new();
    store.add(20, 2.0);
    store.add(10, 1.0);
    let all: Vec<(i64, f64)> = store.all().into_iter().map(|(k, v)| (k, *v)).collect();
    assert_eq!(all, vec![(10, 1.0), (20, 2.0)]);
}

#[test]
fn between_is_start_inclusive_end_exclusive() {
    let store = volume_store(0..10);
    let keys: Vec<i64> = store.between(3, 7).unwrap().into_keys().collect();
    assert_eq!(keys, vec![3, 4, 5, 6]);
}

#[test]
fn between_rejects_empty_and_reversed_ranges() {
    let store = volume_store(0..10);
    assert!(matches!(
        store.between(5, 5),
        Err(NutritionError::InvalidRange { start: 5, end: 5 })
    ));
    assert!(matches!(
        store.between(7, 3),
        Err(NutritionError::InvalidRange { .. })
    ));
}

#[test]
fn since_includes_start() {
    let store = volume_store(0..10);
    let keys: Vec<i64> = store.since(7).into_keys().collect();
    assert_eq!(keys, vec![7, 8, 9]);
    assert!(store.since(10).is_empty());
}

#[test]
fn until_excludes_end() {
    let store = volume_store(0..10);
    let keys: Vec<i64> = store.until(3).into_keys().collect();
    assert_eq!(keys, vec![0, 1, 2]);
    assert!(store.until(0).is_empty());
}

#[test]
fn remove_ignores_missing_windows() {
    let mut store = volume_store(0..5);
    store.remove(&[1, 3, 42]);
    let keys: Vec<i64> = store.all().into_keys().collect();
    assert_eq!(keys, vec![0, 2, 4]);
}

#[test]
fn recent_returns_most_recent_first() {
    let store = volume_store(0..10);
    let recent: Vec<i64> = store.recent(3, 8).into_iter().map(|(k, _)| k).collect();
    assert_eq!(recent, vec![7, 6, 5]);

    let all: Vec<i64> = store.recent(20, 2).into_iter().map(|(k, _)| k).collect();
    assert_eq!(all, vec![1, 0]);
}

#[test]
fn remove_before_prunes_old_windows() {
    let mut store = volume_store(0..10);
    store.remove_before(6);
    assert_eq!(store.first_timestamp(), Some(6));
    assert_eq!(store.last_timestamp(), Some(9));
    assert_eq!(store.len(), 4);
}

#[test]
fn reads_do_not_mutate_the_store() {
    let store = volume_store(0..5);
    let before: BTreeMap<i64, f64> = store.all().into_iter().map(|(k, v)| (k, *v)).collect();
    let _ = store.between(1, 3);
    let _ = store.since(2);
    let _ = store.recent(2, 4);
    let after: BTreeMap<i64, f64> = store.all().into_iter().map(|(k, v)| (k, *v)).collect();
    assert_eq!(before, after);
}
