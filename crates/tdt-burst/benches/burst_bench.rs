use criterion::{criterion_group, criterion_main, Criterion};

use tdt_burst::{Cataldi, Eld, FilteredCataldi, Zhao};
use tdt_core::NutritionSet;
use tdt_nutrition::MemoryNutritionStore;

/// Ten windows over a 2K-term vocabulary with slowly drifting weights.
fn build_windows() -> (NutritionSet, Vec<NutritionSet>) {
    let window = |offset: usize| -> NutritionSet {
        (0..2000)
            .map(|i| (format!("term{i}"), ((i * 7 + offset * 13) % 97) as f64 / 97.0))
            .collect()
    };
    let current = window(0);
    let historic = (1..=10).map(window).collect();
    (current, historic)
}

fn bench_cataldi(c: &mut Criterion) {
    let (current, historic) = build_windows();
    let historic: Vec<&NutritionSet> = historic.iter().collect();
    let cataldi = Cataldi::default();
    let filtered = FilteredCataldi::default();

    c.bench_function("cataldi_2k_terms_10_windows", |b| {
        b.iter(|| cataldi.detect(&current, &historic));
    });
    c.bench_function("filtered_cataldi_2k_terms_10_windows", |b| {
        b.iter(|| filtered.detect(&current, &historic));
    });
}

fn bench_eld(c: &mut Criterion) {
    let (current, historic) = build_windows();
    let historic: Vec<&NutritionSet> = historic.iter().collect();
    let eld = Eld::default();

    c.bench_function("eld_2k_terms_10_windows", |b| {
        b.iter(|| eld.detect(&current, &historic));
    });
}

fn bench_zhao(c: &mut Criterion) {
    let store: MemoryNutritionStore<f64> = (0..3600).map(|ts| (ts, (ts % 17) as f64)).collect();
    let zhao = Zhao::default();

    c.bench_function("zhao_one_hour_volume", |b| {
        b.iter(|| zhao.detect(&store, 3600));
    });
}

criterion_group!(benches, bench_cataldi, bench_eld, bench_zhao);
criterion_main!(benches);
