//! Clustering errors.

/// Errors raised while clustering or aging clusters.
#[derive(Debug, thiserror::Error)]
pub enum ClusteringError {
    #[error("document is missing the {attribute} attribute")]
    MissingAttribute { attribute: String },

    #[error("cluster {cluster_id} has no documents")]
    EmptyCluster { cluster_id: String },
}
