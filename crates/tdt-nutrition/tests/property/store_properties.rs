//! Property tests for nutrition store range queries.

use proptest::prelude::*;

use tdt_nutrition::{MemoryNutritionStore, NutritionStore};

fn arb_store() -> impl Strategy<Value = MemoryNutritionStore<f64>> {
    prop::collection::btree_map(-50i64..50, 0.0f64..100.0, 0..30)
        .prop_map(|windows| windows.into_iter().collect())
}

proptest! {
    #[test]
    fn between_returns_exactly_the_windows_in_range(
        store in arb_store(),
        start in -60i64..60,
        len in 1i64..60,
    ) {
        let end = start + len;
        let got: Vec<i64> = store.between(start, end).unwrap().into_keys().collect();
        let expected: Vec<i64> = store
            .all()
            .into_keys()
            .filter(|k| start <= *k && *k < end)
            .collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn between_with_reversed_bounds_always_fails(
        store in arb_store(),
        end in -60i64..60,
        back in 0i64..60,
    ) {
        let start = end + back;
        prop_assert!(store.between(start, end).is_err());
    }

    #[test]
    fn since_and_until_partition_the_store(store in arb_store(), pivot in -60i64..60) {
        let before = store.until(pivot).len();
        let after = store.since(pivot).len();
        prop_assert_eq!(before + after, store.len());
    }
}
