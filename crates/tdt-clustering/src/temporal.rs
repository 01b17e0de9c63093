//! Temporal No-K-Means: idle clusters age by the seconds since their last member.

use std::collections::HashMap;

use tdt_core::config::ClusteringConfig;
use tdt_core::errors::ClusteringError;
use tdt_core::{Document, SimilarityMeasure};

use crate::cluster::{Cluster, ClusterId};
use crate::no_k_means::NoKMeans;

const TIMESTAMP_ATTRIBUTE: &str = "timestamp";

/// No-K-Means whose clock is the latest document timestamp seen.
///
/// Ages and the freeze period are in seconds.
#[derive(Debug, Clone, Default)]
pub struct TemporalNoKMeans {
    inner: NoKMeans,
    clock: Option<i64>,
}

impl TemporalNoKMeans {
    pub fn new(threshold: f64, freeze_period: i64, store_frozen: bool) -> Self {
        Self {
            inner: NoKMeans::new(threshold, freeze_period, store_frozen),
            clock: None,
        }
    }

    pub fn from_config(config: &ClusteringConfig) -> Self {
        Self {
            inner: NoKMeans::from_config(config),
            clock: None,
        }
    }

    pub fn with_clusters(mut self, clusters: Vec<Cluster>) -> Self {
        self.inner = self.inner.with_clusters(clusters);
        self
    }

    pub fn clock(&self) -> Option<i64> {
        self.clock
    }

    /// Move the clock forward to `timestamp`. It never moves back.
    pub fn advance(&mut self, timestamp: i64) {
        self.clock = Some(self.clock.map_or(timestamp, |c| c.max(timestamp)));
    }

    pub fn measure(&self) -> SimilarityMeasure {
        self.inner.measure()
    }

    pub fn active(&self) -> &[Cluster] {
        self.inner.active()
    }

    pub fn frozen(&self) -> &[Cluster] {
        self.inner.frozen()
    }

    pub fn cluster_mut(&mut self, id: ClusterId) -> Option<&mut Cluster> {
        self.inner.cluster_mut(id)
    }

    /// Cluster a batch in timestamp order, then age and freeze the idle clusters.
    ///
    /// Fails before touching any cluster or the clock if a document or an
    /// active cluster's last member has no timestamp, or a cluster is empty.
    pub fn cluster(&mut self, mut documents: Vec<Document>) -> Result<Vec<&Cluster>, ClusteringError> {
        let mut latest = None;
        for document in &documents {
            let timestamp = document.timestamp().ok_or_else(missing_timestamp)?;
            latest = Some(latest.map_or(timestamp, |l: i64| l.max(timestamp)));
        }
        let last_seen = if self.clock.is_some() || latest.is_some() {
            self.last_seen()?
        } else {
            HashMap::new()
        };

        documents.sort_by_key(|d| d.timestamp());
        if let Some(latest) = latest {
            self.advance(latest);
        }

        let changed = self.inner.assign_all(documents);
        if let Some(clock) = self.clock {
            for cluster in self.inner.clusters_mut() {
                match last_seen.get(&cluster.id()) {
                    Some(last) if !changed.contains(&cluster.id()) => cluster.set_age(clock - last),
                    _ => cluster.set_age(0),
                }
            }
        }
        self.inner.freeze_expired();
        Ok(self.inner.changed(&changed))
    }

    /// Timestamp of each active cluster's newest member.
    fn last_seen(&self) -> Result<HashMap<ClusterId, i64>, ClusteringError> {
        self.inner
            .active()
            .iter()
            .map(|cluster| {
                let last = cluster
                    .last_document()
                    .ok_or_else(|| ClusteringError::EmptyCluster {
                        cluster_id: cluster.id().to_string(),
                    })?;
                let timestamp = last.timestamp().ok_or_else(missing_timestamp)?;
                Ok((cluster.id(), timestamp))
            })
            .collect()
    }
}

fn missing_timestamp() -> ClusteringError {
    ClusteringError::MissingAttribute {
        attribute: TIMESTAMP_ATTRIBUTE.to_string(),
    }
}
