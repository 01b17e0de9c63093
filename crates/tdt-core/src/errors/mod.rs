//! Error handling for the TDT engine.
//! One error enum per subsystem, `thiserror` only.

pub mod burst_error;
pub mod clustering_error;
pub mod config_error;
pub mod consumer_error;
pub mod nutrition_error;
pub mod tdt_error;
pub mod timeline_error;
pub mod weighting_error;

pub use burst_error::BurstError;
pub use clustering_error::ClusteringError;
pub use config_error::ConfigError;
pub use consumer_error::ConsumerError;
pub use nutrition_error::NutritionError;
pub use tdt_error::{TdtError, TdtResult};
pub use timeline_error::TimelineError;
pub use weighting_error::WeightingError;
