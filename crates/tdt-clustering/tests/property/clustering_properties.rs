//! Property tests for cluster aging.

use std::collections::BTreeMap;

use proptest::prelude::*;

use tdt_clustering::NoKMeans;
use tdt_core::{Document, Vector};

fn arb_document() -> impl Strategy<Value = Document> {
    prop::collection::btree_map("[a-f]", 0.1f64..1.0, 1..4)
        .prop_map(|dims| Document::new(Vector::from(dims).normalized()))
}

proptest! {
    #[test]
    fn empty_batch_ages_active_clusters_by_exactly_one(
        documents in prop::collection::vec(arb_document(), 1..20),
        idle in 0i64..5,
    ) {
        let mut algo = NoKMeans::new(0.5, 10, false);
        algo.cluster(documents).unwrap();
        for _ in 0..idle {
            algo.cluster(vec![]).unwrap();
        }
        let before: BTreeMap<_, _> = algo.active().iter().map(|c| (c.id(), c.age())).collect();

        let changed = algo.cluster(vec![]).unwrap();
        prop_assert!(changed.is_empty());

        let after: BTreeMap<_, _> = algo.active().iter().map(|c| (c.id(), c.age())).collect();
        prop_assert_eq!(before.len(), after.len());
        for (id, age) in before {
            prop_assert_eq!(after[&id], age + 1);
        }
    }

    #[test]
    fn every_document_lands_in_exactly_one_cluster(
        documents in prop::collection::vec(arb_document(), 0..30),
        threshold in 0.0f64..1.0,
    ) {
        let count = documents.len();
        let mut algo = NoKMeans::new(threshold, 10, false);
        algo.cluster(documents).unwrap();
        let clustered: usize = algo.active().iter().map(|c| c.size()).sum();
        prop_assert_eq!(clustered, count);
    }
}
