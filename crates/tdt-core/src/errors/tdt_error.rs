//! Top-level error aggregating every subsystem.

use super::{
    BurstError, ClusteringError, ConfigError, ConsumerError, NutritionError, TimelineError,
    WeightingError,
};

/// Errors surfaced by the pipeline. Subsystem errors convert via `From`.
#[derive(Debug, thiserror::Error)]
pub enum TdtError {
    #[error("nutrition error: {0}")]
    Nutrition(#[from] NutritionError),

    #[error("burst detection error: {0}")]
    Burst(#[from] BurstError),

    #[error("clustering error: {0}")]
    Clustering(#[from] ClusteringError),

    #[error("timeline error: {0}")]
    Timeline(#[from] TimelineError),

    #[error("consumer error: {0}")]
    Consumer(#[from] ConsumerError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("term weighting error: {0}")]
    Weighting(#[from] WeightingError),
}

/// Convenience alias used across the workspace.
pub type TdtResult<T> = Result<T, TdtError>;
