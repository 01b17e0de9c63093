//! Cataldi burst detection against golden cases.

use serde::Deserialize;
use tdt_burst::cataldi::{compute_burst, Cataldi};
use tdt_core::config::BurstConfig;
use tdt_core::errors::BurstError;
use tdt_core::NutritionSet;
use tdt_nutrition::{MemoryNutritionStore, NutritionStore};

#[derive(Deserialize)]
struct CataldiCase {
    name: String,
    current: NutritionSet,
    historic: Vec<NutritionSet>,
    expected: Vec<String>,
}

fn set(pairs: &[(&str, f64)]) -> NutritionSet {
    pairs.iter().map(|(t, w)| (t.to_string(), *w)).collect()
}

#[test]
fn golden_cases() {
    let cases: Vec<CataldiCase> = test_fixtures::load_fixture("burst/cataldi_cases.json");
    let cataldi = Cataldi::default();
    for case in &cases {
        let historic: Vec<&NutritionSet> = case.historic.iter().collect();
        let terms: Vec<String> = cataldi
            .detect(&case.current, &historic)
            .into_iter()
            .map(|t| t.term)
            .collect();
        assert_eq!(terms, case.expected, "case {}", case.name);
    }
}

#[test]
fn burst_weights_older_windows_less() {
    let current = set(&[("a", 30.0)]);
    let h1 = set(&[("a", 20.0)]);
    let h2 = set(&[("a", 10.0)]);
    let burst = compute_burst("a", &current, &[&h1, &h2]);
    assert!((burst - 3337.6866668751888).abs() < 1e-6);
}

#[test]
fn missing_terms_count_as_zero_nutrition() {
    let current = set(&[("a", 2.0)]);
    let empty = NutritionSet::new();
    let burst = compute_burst("a", &current, &[&empty]);
    assert!((burst - 4.0 / 2f64.log10()).abs() < 1e-9);
    assert_eq!(compute_burst("zzz", &current, &[&empty]), 0.0);
}

#[test]
fn min_nutrition_excludes_weak_terms() {
    let current = set(&[("x", 10.0), ("y", 9.0), ("z", 1.0)]);
    let historic = set(&[("x", 1.0), ("y", 1.0), ("z", 1.0)]);
    let cataldi = Cataldi::new(9.5, 0, 10);
    let ranked = cataldi.burstiness(&current, &[&historic]);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].term, "x");
}

#[test]
fn from_config_uses_breaking_bounds() {
    let config = BurstConfig {
        min_breaking: 1,
        max_breaking: 1,
        ..BurstConfig::default()
    };
    let cataldi = Cataldi::from_config(&config);
    let current = set(&[("x", 10.0), ("y", 9.0), ("z", 1.0)]);
    let historic = set(&[("x", 1.0), ("y", 1.0), ("z", 1.0)]);
    let terms = cataldi.detect(&current, &[&historic]);
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].term, "x");
}

#[test]
fn detect_in_store_reads_the_windows_before() {
    let mut store = MemoryNutritionStore::new();
    store.add(0, set(&[("a", 20.0), ("b", 8.0), ("d", 20.0), ("f", 7.0)]));
    store.add(60, set(&[("b", 7.0), ("d", 22.0), ("f", 2.0)]));
    store.add(120, set(&[("b", 100.0)]));

    let terms = Cataldi::default().detect_in_store(&store, 60, 10).unwrap();
    let terms: Vec<&str> = terms.iter().map(|t| t.term.as_str()).collect();
    assert_eq!(terms, vec!["d"]);
}

#[test]
fn detect_in_store_without_the_window_is_empty() {
    let store: MemoryNutritionStore<NutritionSet> = MemoryNutritionStore::new();
    let terms: Result<_, BurstError> = Cataldi::default().detect_in_store(&store, 60, 10);
    assert!(terms.unwrap().is_empty());
}
