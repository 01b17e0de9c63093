//! The timeline: an append-only sequence of nodes ordered by creation time.

use serde::{Deserialize, Serialize};
use tdt_clustering::Cluster;
use tdt_core::config::{defaults, NodeType, TimelineConfig};
use tdt_core::errors::TimelineError;
use tdt_core::{RankedTerm, SimilarityMeasure};
use tracing::debug;

use crate::node::Node;

/// Only the last node can be active. Older nodes may still absorb similar
/// topics for `max_time` seconds after their creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TimelineRecord")]
pub struct Timeline {
    node_type: NodeType,
    expiry: i64,
    min_similarity: f64,
    max_time: i64,
    #[serde(default)]
    measure: SimilarityMeasure,
    nodes: Vec<Node>,
}

/// Unvalidated form read back from an export.
#[derive(Deserialize)]
struct TimelineRecord {
    node_type: NodeType,
    expiry: i64,
    min_similarity: f64,
    #[serde(default = "default_max_time")]
    max_time: i64,
    #[serde(default)]
    measure: SimilarityMeasure,
    #[serde(default)]
    nodes: Vec<Node>,
}

fn default_max_time() -> i64 {
    defaults::DEFAULT_MAX_TIME_SECS
}

impl TryFrom<TimelineRecord> for Timeline {
    type Error = TimelineError;

    fn try_from(record: TimelineRecord) -> Result<Self, Self::Error> {
        let mut timeline = Timeline::new(
            record.node_type,
            record.expiry,
            record.min_similarity,
            record.max_time,
        )?
        .with_measure(record.measure);
        timeline.nodes = record.nodes;
        Ok(timeline)
    }
}

impl Timeline {
    pub fn new(
        node_type: NodeType,
        expiry: i64,
        min_similarity: f64,
        max_time: i64,
    ) -> Result<Self, TimelineError> {
        if expiry < 0 {
            return Err(TimelineError::InvalidExpiry { expiry });
        }
        if max_time < expiry {
            return Err(TimelineError::InvalidMaxTime { max_time, expiry });
        }
        if !(0.0..=1.0).contains(&min_similarity) {
            return Err(TimelineError::InvalidMinSimilarity {
                value: min_similarity,
            });
        }
        Ok(Self {
            node_type,
            expiry,
            min_similarity,
            max_time,
            measure: SimilarityMeasure::default(),
            nodes: Vec::new(),
        })
    }

    pub fn from_config(config: &TimelineConfig) -> Result<Self, TimelineError> {
        Ok(Self::new(
            config.node_type,
            config.expiry,
            config.min_similarity,
            config.max_time,
        )?
        .with_measure(config.similarity))
    }

    /// Compare topics with `measure` instead of cosine.
    pub fn with_measure(mut self, measure: SimilarityMeasure) -> Self {
        self.measure = measure;
        self
    }

    pub fn measure(&self) -> SimilarityMeasure {
        self.measure
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn expiry(&self) -> i64 {
        self.expiry
    }

    pub fn min_similarity(&self) -> f64 {
        self.min_similarity
    }

    pub fn max_time(&self) -> i64 {
        self.max_time
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a topic reported at `timestamp`. Returns the index of the node that took it.
    pub fn add(&mut self, timestamp: i64, cluster: &Cluster, terms: Vec<RankedTerm>) -> usize {
        if let Some(last) = self.nodes.last_mut() {
            if !last.expired(self.expiry, timestamp) {
                last.add(timestamp, cluster.clone(), terms);
                return self.nodes.len() - 1;
            }
        }

        let absorbing = self.nodes.iter().rposition(|node| {
            timestamp - node.created_at() <= self.max_time
                && node.similarity(cluster, &terms, self.measure) >= self.min_similarity
        });
        if let Some(index) = absorbing {
            debug!(node = index, timestamp, "topic absorbed by expired node");
            self.nodes[index].add(timestamp, cluster.clone(), terms);
            return index;
        }

        let mut node = Node::new(self.node_type, timestamp);
        node.add(timestamp, cluster.clone(), terms);
        self.nodes.push(node);
        debug!(nodes = self.nodes.len(), created_at = timestamp, "timeline node created");
        self.nodes.len() - 1
    }

    pub fn to_json(&self) -> Result<String, TimelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuild an exported timeline. The parameters are validated again.
    pub fn from_json(json: &str) -> Result<Self, TimelineError> {
        Ok(serde_json::from_str(json)?)
    }
}
