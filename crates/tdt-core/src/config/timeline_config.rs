use serde::{Deserialize, Serialize};

use super::defaults;
use crate::vector_math::SimilarityMeasure;

/// How timeline nodes compare incoming topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    /// Compare cluster centroids.
    #[default]
    Cluster,
    /// Compare the ranked breaking terms.
    Topical,
}

/// Timeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub node_type: NodeType,
    /// Seconds during which a new node absorbs everything.
    pub expiry: i64,
    /// Similarity an expired node needs to absorb a topic.
    pub min_similarity: f64,
    /// Seconds after which a node is no longer considered for absorption.
    pub max_time: i64,
    /// Measure used to compare an incoming topic with a node's topics.
    pub similarity: SimilarityMeasure,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            node_type: NodeType::default(),
            expiry: defaults::DEFAULT_EXPIRY_SECS,
            min_similarity: defaults::DEFAULT_MIN_SIMILARITY,
            max_time: defaults::DEFAULT_MAX_TIME_SECS,
            similarity: SimilarityMeasure::default(),
        }
    }
}
