//! Timeline absorption, expiry, and export.

use tdt_clustering::Cluster;
use tdt_core::config::{NodeType, TimelineConfig};
use tdt_core::errors::TimelineError;
use tdt_core::{Document, RankedTerm, SimilarityMeasure, Vector};
use tdt_timeline::Timeline;

fn cluster(pairs: &[(&str, f64)]) -> Cluster {
    let vector: Vector = pairs.iter().map(|(t, w)| (*t, *w)).collect();
    Cluster::new(vec![Document::new(vector.normalized()).with_timestamp(0)])
}

fn terms(pairs: &[(&str, f64)]) -> Vec<RankedTerm> {
    pairs.iter().map(|(t, s)| RankedTerm::new(*t, *s)).collect()
}

#[test]
fn negative_expiry_is_rejected() {
    let err = Timeline::new(NodeType::Cluster, -1, 0.5, 600).unwrap_err();
    assert!(matches!(err, TimelineError::InvalidExpiry { expiry: -1 }));
}

#[test]
fn min_similarity_must_be_a_proportion() {
    for value in [-0.1, 1.1] {
        let err = Timeline::new(NodeType::Cluster, 60, value, 600).unwrap_err();
        assert!(matches!(err, TimelineError::InvalidMinSimilarity { .. }));
    }
    assert!(Timeline::new(NodeType::Cluster, 0, 0.0, 600).is_ok());
    assert!(Timeline::new(NodeType::Cluster, 0, 1.0, 600).is_ok());
}

#[test]
fn max_time_must_cover_the_expiry() {
    let err = Timeline::new(NodeType::Cluster, 60, 0.5, 30).unwrap_err();
    assert!(matches!(
        err,
        TimelineError::InvalidMaxTime {
            max_time: 30,
            expiry: 60
        }
    ));
    assert!(matches!(
        Timeline::new(NodeType::Cluster, 0, 0.5, -1),
        Err(TimelineError::InvalidMaxTime { .. })
    ));
    assert!(Timeline::new(NodeType::Cluster, 60, 0.5, 60).is_ok());
}

#[test]
fn from_config_uses_defaults() {
    let timeline = Timeline::from_config(&TimelineConfig::default()).unwrap();
    assert_eq!(timeline.expiry(), 90);
    assert_eq!(timeline.measure(), SimilarityMeasure::Cosine);
    assert_eq!(timeline.max_time(), 600);
    assert!(timeline.is_empty());
}

#[test]
fn active_node_takes_everything() {
    let mut timeline = Timeline::new(NodeType::Cluster, 60, 0.9, 600).unwrap();
    timeline.add(0, &cluster(&[("goal", 1.0)]), vec![]);
    timeline.add(59, &cluster(&[("weather", 1.0)]), vec![]);
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline.nodes()[0].topics().len(), 2);
}

#[test]
fn dissimilar_topic_after_expiry_starts_a_node() {
    let mut timeline = Timeline::new(NodeType::Cluster, 60, 0.5, 600).unwrap();
    timeline.add(0, &cluster(&[("goal", 1.0)]), vec![]);
    let index = timeline.add(60, &cluster(&[("weather", 1.0)]), vec![]);
    assert_eq!(index, 1);
    assert_eq!(timeline.nodes()[1].created_at(), 60);
}

#[test]
fn similar_topic_after_expiry_is_absorbed() {
    let mut timeline = Timeline::new(NodeType::Cluster, 60, 0.5, 600).unwrap();
    timeline.add(0, &cluster(&[("goal", 1.0)]), vec![]);
    timeline.add(100, &cluster(&[("weather", 1.0)]), vec![]);
    let index = timeline.add(200, &cluster(&[("goal", 1.0), ("messi", 0.3)]), vec![]);
    assert_eq!(index, 0);
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline.nodes()[0].topics().len(), 2);
}

#[test]
fn absorption_uses_the_configured_measure() {
    let mut config = TimelineConfig {
        expiry: 60,
        min_similarity: 0.5,
        ..TimelineConfig::default()
    };
    let incoming = cluster(&[("goal", 1.0), ("messi", 1.0)]);

    // Cosine 0.71 with the first node, euclidean similarity 1 - 0.77.
    let mut cosine = Timeline::from_config(&config).unwrap();
    cosine.add(0, &cluster(&[("goal", 1.0)]), vec![]);
    cosine.add(100, &cluster(&[("weather", 1.0)]), vec![]);
    assert_eq!(cosine.add(200, &incoming, vec![]), 0);

    config.similarity = SimilarityMeasure::Euclidean;
    let mut euclidean = Timeline::from_config(&config).unwrap();
    assert_eq!(euclidean.measure(), SimilarityMeasure::Euclidean);
    euclidean.add(0, &cluster(&[("goal", 1.0)]), vec![]);
    euclidean.add(100, &cluster(&[("weather", 1.0)]), vec![]);
    assert_eq!(euclidean.add(200, &incoming, vec![]), 2);
    assert_eq!(euclidean.len(), 3);
}

#[test]
fn nodes_older_than_max_time_do_not_absorb() {
    let mut timeline = Timeline::new(NodeType::Cluster, 60, 0.5, 600).unwrap();
    timeline.add(0, &cluster(&[("goal", 1.0)]), vec![]);
    let index = timeline.add(601, &cluster(&[("goal", 1.0)]), vec![]);
    assert_eq!(index, 1);
}

#[test]
fn topical_nodes_compare_breaking_terms() {
    let mut timeline = Timeline::new(NodeType::Topical, 60, 0.5, 600).unwrap();
    timeline.add(0, &cluster(&[("goal", 1.0)]), terms(&[("goal", 3.0), ("messi", 1.0)]));
    timeline.add(100, &cluster(&[("other", 1.0)]), terms(&[("rain", 1.0)]));

    // Different centroid, same breaking terms.
    let index = timeline.add(200, &cluster(&[("zzz", 1.0)]), terms(&[("goal", 2.0)]));
    assert_eq!(index, 0);
}

#[test]
fn readding_a_cluster_keeps_one_topic() {
    let mut timeline = Timeline::new(NodeType::Cluster, 60, 0.5, 600).unwrap();
    let mut c = cluster(&[("goal", 1.0)]);
    timeline.add(0, &c, terms(&[("goal", 1.0)]));
    c.add_document(Document::new(Vector::from_iter([("goal", 1.0)])));
    timeline.add(30, &c, terms(&[("goal", 2.0)]));

    let node = &timeline.nodes()[0];
    assert_eq!(node.topics().len(), 1);
    assert_eq!(node.clusters().next().unwrap().size(), 2);
    assert_eq!(node.documents().count(), 2);
}

#[test]
fn export_round_trip_preserves_nodes() {
    let mut timeline = Timeline::new(NodeType::Topical, 60, 0.5, 600).unwrap();
    timeline.add(0, &cluster(&[("goal", 1.0)]), terms(&[("goal", 3.5)]));
    timeline.add(120, &cluster(&[("rain", 1.0)]), terms(&[("rain", 1.25)]));

    let json = timeline.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["nodes"][0]["type"], "topical");

    let back = Timeline::from_json(&json).unwrap();
    assert_eq!(back, timeline);
    assert_eq!(back.nodes()[1].created_at(), 120);
}

#[test]
fn import_validates_parameters() {
    let json = r#"{"node_type": "cluster", "expiry": -5, "min_similarity": 0.5, "nodes": []}"#;
    assert!(Timeline::from_json(json).is_err());

    let json = r#"{"node_type": "cluster", "expiry": 5, "min_similarity": 0.5}"#;
    let timeline = Timeline::from_json(json).unwrap();
    assert_eq!(timeline.max_time(), 600);
    assert_eq!(timeline.measure(), SimilarityMeasure::Cosine);

    let json = r#"{"node_type": "cluster", "expiry": 90, "min_similarity": 0.5, "max_time": 60}"#;
    assert!(matches!(
        Timeline::from_json(json),
        Err(TimelineError::Serialization { .. })
    ));
}
