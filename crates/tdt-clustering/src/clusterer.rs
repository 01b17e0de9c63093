//! The closed set of clustering algorithms, chosen once from configuration.

use tdt_core::config::{ClusteringConfig, ClusteringVariant};
use tdt_core::errors::ClusteringError;
use tdt_core::{Document, SimilarityMeasure};

use crate::cluster::{Cluster, ClusterId};
use crate::{NoKMeans, TemporalNoKMeans};

#[derive(Debug, Clone)]
pub enum Clusterer {
    NoKMeans(NoKMeans),
    Temporal(TemporalNoKMeans),
}

impl Clusterer {
    pub fn from_config(config: &ClusteringConfig) -> Self {
        match config.variant {
            ClusteringVariant::NoKMeans => Self::NoKMeans(NoKMeans::from_config(config)),
            ClusteringVariant::Temporal => Self::Temporal(TemporalNoKMeans::from_config(config)),
        }
    }

    pub fn variant(&self) -> ClusteringVariant {
        match self {
            Self::NoKMeans(_) => ClusteringVariant::NoKMeans,
            Self::Temporal(_) => ClusteringVariant::Temporal,
        }
    }

    pub fn cluster(&mut self, documents: Vec<Document>) -> Result<Vec<&Cluster>, ClusteringError> {
        match self {
            Self::NoKMeans(c) => c.cluster(documents),
            Self::Temporal(c) => c.cluster(documents),
        }
    }

    /// Tell the clusterer that time reached `timestamp`. Only temporal clustering keeps a clock.
    pub fn advance(&mut self, timestamp: i64) {
        if let Self::Temporal(c) = self {
            c.advance(timestamp);
        }
    }

    pub fn active(&self) -> &[Cluster] {
        match self {
            Self::NoKMeans(c) => c.active(),
            Self::Temporal(c) => c.active(),
        }
    }

    pub fn frozen(&self) -> &[Cluster] {
        match self {
            Self::NoKMeans(c) => c.frozen(),
            Self::Temporal(c) => c.frozen(),
        }
    }

    pub fn cluster_mut(&mut self, id: ClusterId) -> Option<&mut Cluster> {
        match self {
            Self::NoKMeans(c) => c.cluster_mut(id),
            Self::Temporal(c) => c.cluster_mut(id),
        }
    }

    pub fn measure(&self) -> SimilarityMeasure {
        match self {
            Self::NoKMeans(c) => c.measure(),
            Self::Temporal(c) => c.measure(),
        }
    }
}
