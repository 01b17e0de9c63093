//! # tdt-clustering
//!
//! No-K-Means: documents join the most similar active cluster or start their
//! own. Clusters that stop receiving documents age and eventually freeze.
//!
//! - [`NoKMeans`]: age counts idle batches.
//! - [`TemporalNoKMeans`]: age counts seconds since the last member.

pub mod cluster;
pub mod clusterer;
pub mod no_k_means;
pub mod temporal;

pub use cluster::{Cluster, ClusterId, ClusterState};
pub use clusterer::Clusterer;
pub use no_k_means::NoKMeans;
pub use temporal::TemporalNoKMeans;
