//! Property tests for burst detection invariants.

use proptest::prelude::*;

use tdt_burst::cataldi::{burst_drops, critical_drop_index};
use tdt_burst::{Cataldi, Eld, Zhao};
use tdt_core::NutritionSet;
use tdt_nutrition::MemoryNutritionStore;

fn arb_nutrition() -> impl Strategy<Value = NutritionSet> {
    prop::collection::btree_map("[a-e]{1,3}", 0.0f64..50.0, 1..20)
}

fn arb_unit_nutrition() -> impl Strategy<Value = NutritionSet> {
    prop::collection::btree_map("[a-e]{1,3}", 0.0f64..=1.0, 1..20)
}

proptest! {
    #[test]
    fn unchanged_history_has_no_breaking_terms(
        nutrition in arb_nutrition(),
        windows in 1usize..5,
    ) {
        let historic: Vec<&NutritionSet> = (0..windows).map(|_| &nutrition).collect();
        prop_assert!(Cataldi::default().detect(&nutrition, &historic).is_empty());
    }

    #[test]
    fn cataldi_returns_a_bounded_prefix_of_the_ranking(
        current in arb_nutrition(),
        previous in arb_nutrition(),
        max_breaking in 1usize..10,
    ) {
        let cataldi = Cataldi::new(0.0, 0, max_breaking);
        let ranked = cataldi.burstiness(&current, &[&previous]);
        let breaking = cataldi.detect(&current, &[&previous]);
        prop_assert!(breaking.len() <= max_breaking);
        prop_assert_eq!(&ranked[..breaking.len()], &breaking[..]);
    }

    #[test]
    fn critical_index_never_exceeds_the_drops(
        drops in prop::collection::vec(0.0f64..100.0, 0..30),
    ) {
        prop_assert!(critical_drop_index(&drops) <= drops.len());
    }

    #[test]
    fn drops_are_never_negative(bursts in prop::collection::vec(-100.0f64..100.0, 0..30)) {
        prop_assert!(burst_drops(&bursts).iter().all(|d| *d >= 0.0));
    }

    #[test]
    fn constant_volume_never_bursts(volume in 0.0f64..1000.0, end in 60i64..200) {
        let store: MemoryNutritionStore<f64> = (0..end).map(|ts| (ts, volume)).collect();
        prop_assert_eq!(Zhao::default().detect(&store, end).unwrap(), None);
    }

    #[test]
    fn eld_burst_of_unit_nutrition_is_bounded(
        current in arb_unit_nutrition(),
        historic in prop::collection::vec(arb_unit_nutrition(), 0..6),
    ) {
        let eld = Eld::default();
        let historic: Vec<&NutritionSet> = historic.iter().collect();
        for term in current.keys() {
            let burst = eld.burst(term, &current, &historic);
            prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&burst));
        }
    }
}
