//! Clusters of documents around a lazily computed centroid.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tdt_core::vector_math::{self, SimilarityMeasure};
use tdt_core::{Document, Vector};
use uuid::Uuid;

/// Stable identity of a cluster across batches and timeline exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterId(Uuid);

impl ClusterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClusterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterState {
    #[default]
    Active,
    Frozen,
}

/// A group of documents about one topic.
///
/// The centroid is the normalized mean of the member vectors. It is computed on
/// first use and recomputed after any change to the members.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cluster {
    id: ClusterId,
    documents: Vec<Document>,
    #[serde(default)]
    age: i64,
    #[serde(default)]
    state: ClusterState,
    #[serde(default)]
    bursty: bool,
    #[serde(skip)]
    centroid: OnceLock<Vector>,
}

impl PartialEq for Cluster {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.documents == other.documents
            && self.age == other.age
            && self.state == other.state
            && self.bursty == other.bursty
    }
}

impl Cluster {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents,
            ..Self::default()
        }
    }

    pub fn id(&self) -> ClusterId {
        self.id
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn add_document(&mut self, document: Document) {
        self.documents.push(document);
        self.centroid = OnceLock::new();
    }

    pub fn size(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn centroid(&self) -> &Vector {
        self.centroid.get_or_init(|| {
            if self.documents.is_empty() {
                return Vector::new();
            }
            let sum = vector_math::concatenate(self.documents.iter().map(Document::vector));
            let n = self.documents.len() as f64;
            sum.iter()
                .map(|(term, weight)| (term.clone(), weight / n))
                .collect::<Vector>()
                .normalized()
        })
    }

    /// Similarity between `vector` and the centroid under `measure`.
    pub fn similarity(&self, vector: &Vector, measure: SimilarityMeasure) -> f64 {
        measure.similarity(self.centroid(), vector)
    }

    /// Mean similarity of the members to the centroid; 0 for an empty cluster.
    pub fn intra_similarity(&self, measure: SimilarityMeasure) -> f64 {
        if self.documents.is_empty() {
            return 0.0;
        }
        let centroid = self.centroid();
        let total: f64 = self
            .documents
            .iter()
            .map(|d| measure.similarity(centroid, d.vector()))
            .sum();
        total / self.documents.len() as f64
    }

    /// The `count` members closest to the centroid, closest first.
    pub fn representative_documents(&self, count: usize) -> Vec<&Document> {
        let centroid = self.centroid();
        let mut ranked: Vec<(f64, &Document)> = self
            .documents
            .iter()
            .map(|d| (vector_math::cosine(centroid, d.vector()), d))
            .collect();
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
        ranked.into_iter().take(count).map(|(_, d)| d).collect()
    }

    /// The last document added.
    pub fn last_document(&self) -> Option<&Document> {
        self.documents.last()
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn set_age(&mut self, age: i64) {
        self.age = age;
    }

    pub fn state(&self) -> ClusterState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == ClusterState::Active
    }

    pub fn is_frozen(&self) -> bool {
        self.state == ClusterState::Frozen
    }

    pub(crate) fn freeze(&mut self) {
        self.state = ClusterState::Frozen;
    }

    /// Whether the cluster has already been reported as a topic.
    pub fn is_bursty(&self) -> bool {
        self.bursty
    }

    pub fn set_bursty(&mut self, bursty: bool) {
        self.bursty = bursty;
    }
}
