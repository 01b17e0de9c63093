//! Timeline nodes.

use serde::{Deserialize, Serialize};
use tdt_clustering::Cluster;
use tdt_core::config::NodeType;
use tdt_core::term::topic_vector;
use tdt_core::{Document, RankedTerm, SimilarityMeasure};

/// A cluster as it stood when it was reported, with its ranked breaking terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub timestamp: i64,
    pub cluster: Cluster,
    pub terms: Vec<RankedTerm>,
}

/// One development of the story: every topic reported while it was open.
///
/// `Cluster` nodes compare centroids, `Topical` nodes compare breaking terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    node_type: NodeType,
    created_at: i64,
    #[serde(default)]
    topics: Vec<Topic>,
}

impl Node {
    pub fn new(node_type: NodeType, created_at: i64) -> Self {
        Self {
            node_type,
            created_at,
            topics: Vec::new(),
        }
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.topics.iter().map(|t| &t.cluster)
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.clusters().flat_map(|c| c.documents())
    }

    /// Store a snapshot of `cluster`. A cluster the node already holds is
    /// replaced in place, keeping its position.
    pub fn add(&mut self, timestamp: i64, cluster: Cluster, terms: Vec<RankedTerm>) {
        let topic = Topic {
            timestamp,
            cluster,
            terms,
        };
        match self
            .topics
            .iter_mut()
            .find(|t| t.cluster.id() == topic.cluster.id())
        {
            Some(existing) => *existing = topic,
            None => self.topics.push(topic),
        }
    }

    /// Expired once `expiry` seconds have passed since creation.
    pub fn expired(&self, expiry: i64, timestamp: i64) -> bool {
        timestamp - self.created_at >= expiry
    }

    /// Highest similarity between the incoming topic and any stored one; 0 when empty.
    pub fn similarity(
        &self,
        cluster: &Cluster,
        terms: &[RankedTerm],
        measure: SimilarityMeasure,
    ) -> f64 {
        match self.node_type {
            NodeType::Cluster => self
                .topics
                .iter()
                .map(|t| measure.similarity(cluster.centroid(), t.cluster.centroid()))
                .fold(0.0, f64::max),
            NodeType::Topical => {
                let incoming = topic_vector(terms);
                self.topics
                    .iter()
                    .map(|t| measure.similarity(&incoming, &topic_vector(&t.terms)))
                    .fold(0.0, f64::max)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdt_core::Vector;

    fn cluster(pairs: &[(&str, f64)]) -> Cluster {
        let vector: Vector = pairs.iter().map(|(t, w)| (*t, *w)).collect();
        Cluster::new(vec![Document::new(vector)])
    }

    #[test]
    fn expiry_is_inclusive() {
        let node = Node::new(NodeType::Cluster, 100);
        assert!(!node.expired(60, 159));
        assert!(node.expired(60, 160));
        assert!(node.expired(0, 100));
    }

    #[test]
    fn empty_node_has_zero_similarity() {
        let node = Node::new(NodeType::Topical, 0);
        let terms = [RankedTerm::new("a", 1.0)];
        assert_eq!(node.similarity(&cluster(&[("a", 1.0)]), &terms, SimilarityMeasure::Cosine), 0.0);
    }

    #[test]
    fn readding_a_cluster_replaces_its_snapshot() {
        let mut node = Node::new(NodeType::Cluster, 0);
        let mut c = cluster(&[("a", 1.0)]);
        node.add(10, c.clone(), vec![RankedTerm::new("a", 2.0)]);
        c.add_document(Document::new(Vector::from_iter([("b", 1.0)])));
        node.add(20, c, vec![RankedTerm::new("b", 3.0)]);

        assert_eq!(node.topics().len(), 1);
        assert_eq!(node.topics()[0].timestamp, 20);
        assert_eq!(node.topics()[0].cluster.size(), 2);
        assert_eq!(node.topics()[0].terms[0].term, "b");
    }
}
