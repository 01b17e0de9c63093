//! No-K-Means (Azzopardi et al.): single-pass clustering without a fixed `k`.

use std::collections::HashSet;

use tdt_core::config::{defaults, ClusteringConfig};
use tdt_core::errors::ClusteringError;
use tdt_core::{Document, SimilarityMeasure};
use tracing::debug;

use crate::cluster::{Cluster, ClusterId};

/// Count-based No-K-Means: a cluster's age is the number of batches since it
/// last received a document.
#[derive(Debug, Clone)]
pub struct NoKMeans {
    threshold: f64,
    freeze_period: i64,
    store_frozen: bool,
    measure: SimilarityMeasure,
    clusters: Vec<Cluster>,
    frozen: Vec<Cluster>,
}

impl Default for NoKMeans {
    fn default() -> Self {
        Self::new(
            defaults::DEFAULT_CLUSTER_THRESHOLD,
            defaults::DEFAULT_FREEZE_PERIOD,
            defaults::DEFAULT_STORE_FROZEN,
        )
    }
}

impl NoKMeans {
    pub fn new(threshold: f64, freeze_period: i64, store_frozen: bool) -> Self {
        Self {
            threshold,
            freeze_period,
            store_frozen,
            measure: SimilarityMeasure::default(),
            clusters: Vec::new(),
            frozen: Vec::new(),
        }
    }

    pub fn from_config(config: &ClusteringConfig) -> Self {
        Self::new(config.threshold, config.freeze_period, config.store_frozen)
            .with_measure(config.similarity)
    }

    pub fn with_measure(mut self, measure: SimilarityMeasure) -> Self {
        self.measure = measure;
        self
    }

    /// Start from existing active clusters.
    pub fn with_clusters(mut self, clusters: Vec<Cluster>) -> Self {
        self.clusters = clusters;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn freeze_period(&self) -> i64 {
        self.freeze_period
    }

    pub fn measure(&self) -> SimilarityMeasure {
        self.measure
    }

    pub fn active(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Clusters that froze while `store_frozen` was set.
    pub fn frozen(&self) -> &[Cluster] {
        &self.frozen
    }

    pub fn cluster_mut(&mut self, id: ClusterId) -> Option<&mut Cluster> {
        self.clusters.iter_mut().find(|c| c.id() == id)
    }

    /// Cluster a batch in arrival order, then age and freeze the idle clusters.
    ///
    /// When several clusters tie for the best similarity the choice is
    /// unspecified (currently the oldest); callers must not rely on it.
    ///
    /// Returns the clusters that received a document and are still active.
    pub fn cluster(&mut self, documents: Vec<Document>) -> Result<Vec<&Cluster>, ClusteringError> {
        let changed = self.assign_all(documents);
        for cluster in self.clusters.iter_mut().filter(|c| !changed.contains(&c.id())) {
            cluster.set_age(cluster.age() + 1);
        }
        self.freeze_expired();
        Ok(self.changed(&changed))
    }

    /// Add every document to its closest cluster, or a new one.
    pub(crate) fn assign_all(&mut self, documents: Vec<Document>) -> HashSet<ClusterId> {
        let mut changed = HashSet::new();
        let created_before = self.clusters.len();
        for document in documents {
            changed.insert(self.assign(document));
        }
        debug!(
            changed = changed.len(),
            created = self.clusters.len() - created_before,
            active = self.clusters.len(),
            "no-k-means batch assigned"
        );
        changed
    }

    fn assign(&mut self, document: Document) -> ClusterId {
        let mut best: Option<(usize, f64)> = None;
        for (i, cluster) in self.clusters.iter().enumerate() {
            let similarity = cluster.similarity(document.vector(), self.measure);
            if best.map_or(true, |(_, s)| similarity > s) {
                best = Some((i, similarity));
            }
        }

        match best {
            Some((i, similarity)) if similarity >= self.threshold => {
                let cluster = &mut self.clusters[i];
                cluster.add_document(document);
                cluster.set_age(0);
                cluster.id()
            }
            _ => {
                let cluster = Cluster::new(vec![document]);
                let id = cluster.id();
                self.clusters.push(cluster);
                id
            }
        }
    }

    /// Move every cluster whose age reached the freeze period out of the active list.
    pub(crate) fn freeze_expired(&mut self) {
        let freeze_period = self.freeze_period;
        let (expired, active): (Vec<Cluster>, Vec<Cluster>) = std::mem::take(&mut self.clusters)
            .into_iter()
            .partition(|c| c.age() >= freeze_period);
        self.clusters = active;

        if expired.is_empty() {
            return;
        }
        debug!(
            frozen = expired.len(),
            stored = self.store_frozen,
            "clusters frozen"
        );
        if self.store_frozen {
            self.frozen.extend(expired.into_iter().map(|mut c| {
                c.freeze();
                c
            }));
        }
    }

    pub(crate) fn clusters_mut(&mut self) -> &mut [Cluster] {
        &mut self.clusters
    }

    pub(crate) fn changed(&self, changed: &HashSet<ClusterId>) -> Vec<&Cluster> {
        self.clusters
            .iter()
            .filter(|c| changed.contains(&c.id()))
            .collect()
    }
}
