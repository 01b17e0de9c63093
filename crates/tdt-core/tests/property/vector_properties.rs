//! Property tests for vector math.

use proptest::prelude::*;

use tdt_core::vector_math::{self, SimilarityMeasure};
use tdt_core::Vector;

fn arb_vector() -> impl Strategy<Value = Vector> {
    prop::collection::btree_map("[a-e]", 0.0f64..10.0, 0..5).prop_map(Vector::from)
}

proptest! {
    #[test]
    fn cosine_is_bounded_and_symmetric(a in arb_vector(), b in arb_vector()) {
        let ab = vector_math::cosine(&a, &b);
        let ba = vector_math::cosine(&b, &a);
        prop_assert!((-1.0..=1.0).contains(&ab));
        prop_assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn normalized_vectors_are_unit_or_zero(a in arb_vector()) {
        let n = a.normalized();
        let mag = n.magnitude();
        prop_assert!(mag.abs() < 1e-9 || (mag - 1.0).abs() < 1e-9);
    }

    #[test]
    fn concatenation_sums_weights(a in arb_vector(), b in arb_vector()) {
        let sum = vector_math::concatenate([&a, &b]);
        for (term, weight) in sum.iter() {
            prop_assert!((weight - (a.get(term) + b.get(term))).abs() < 1e-9);
        }
    }

    #[test]
    fn augmented_normalization_stays_in_range(a in arb_vector(), aug in 0.0f64..=1.0) {
        let v = vector_math::augmented_normalize(&a, aug).unwrap();
        let max = a.iter().map(|(_, w)| *w).fold(0.0_f64, f64::max);
        if max > 0.0 {
            for (_, w) in v.iter() {
                prop_assert!(*w >= aug - 1e-9 && *w <= 1.0 + 1e-9);
            }
        }
    }

    #[test]
    fn self_distance_is_zero(a in arb_vector()) {
        prop_assert!(vector_math::euclidean(&a, &a).abs() < 1e-9);
        prop_assert!((SimilarityMeasure::Manhattan.similarity(&a, &a) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn augmented_normalization_rejects_out_of_range() {
    let v: Vector = [("a", 1.0)].into_iter().collect();
    assert!(vector_math::augmented_normalize(&v, 1.5).is_err());
}
