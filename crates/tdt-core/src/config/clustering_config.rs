use serde::{Deserialize, Serialize};

use super::defaults;
use crate::vector_math::SimilarityMeasure;

/// Which No-K-Means flavour ages the clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClusteringVariant {
    /// Age counts idle batches.
    #[default]
    NoKMeans,
    /// Age counts seconds since the last member.
    Temporal,
}

/// Incremental clustering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    pub variant: ClusteringVariant,
    /// Minimum similarity for a document to join an existing cluster.
    pub threshold: f64,
    /// Idle age at which an active cluster freezes.
    pub freeze_period: i64,
    /// Keep frozen clusters instead of discarding them.
    pub store_frozen: bool,
    pub similarity: SimilarityMeasure,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            variant: ClusteringVariant::default(),
            threshold: defaults::DEFAULT_CLUSTER_THRESHOLD,
            freeze_period: defaults::DEFAULT_FREEZE_PERIOD,
            store_frozen: defaults::DEFAULT_STORE_FROZEN,
            similarity: SimilarityMeasure::default(),
        }
    }
}
