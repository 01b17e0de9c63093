//! Property tests for timeline absorption.

use proptest::prelude::*;

use tdt_clustering::Cluster;
use tdt_core::config::NodeType;
use tdt_core::{Document, Vector};
use tdt_timeline::Timeline;

fn arb_cluster() -> impl Strategy<Value = Cluster> {
    prop::collection::btree_map("[a-f]", 0.1f64..1.0, 1..4)
        .prop_map(|dims| Cluster::new(vec![Document::new(Vector::from(dims))]))
}

proptest! {
    #[test]
    fn zero_similarity_absorbs_into_the_latest_node(
        clusters in prop::collection::vec(arb_cluster(), 1..20),
        gaps in prop::collection::vec(0i64..30, 20),
    ) {
        let mut timeline = Timeline::new(NodeType::Cluster, 0, 0.0, 600).unwrap();
        let mut timestamp = 0;
        for (cluster, gap) in clusters.iter().zip(&gaps) {
            timestamp += gap;
            timeline.add(timestamp, cluster, vec![]);
        }
        prop_assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn nodes_stay_ordered_by_creation(
        clusters in prop::collection::vec(arb_cluster(), 1..20),
        gaps in prop::collection::vec(0i64..200, 20),
        min_similarity in 0.0f64..=1.0,
    ) {
        let mut timeline = Timeline::new(NodeType::Cluster, 60, min_similarity, 600).unwrap();
        let mut timestamp = 0;
        for (cluster, gap) in clusters.iter().zip(&gaps) {
            timestamp += gap;
            timeline.add(timestamp, cluster, vec![]);
        }
        let created: Vec<i64> = timeline.nodes().iter().map(|n| n.created_at()).collect();
        prop_assert!(created.windows(2).all(|w| w[0] < w[1]));
    }
}
