//! Configuration system for the TDT engine.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod burst_config;
pub mod clustering_config;
pub mod consumer_config;
pub mod defaults;
pub mod nutrition_config;
pub mod observability_config;
pub mod tdt_config;
pub mod timeline_config;
pub mod tokenizer_config;

pub use burst_config::{BurstAlgorithm, BurstConfig};
pub use clustering_config::{ClusteringConfig, ClusteringVariant};
pub use consumer_config::{ConsumerConfig, PostFilter};
pub use nutrition_config::NutritionConfig;
pub use observability_config::ObservabilityConfig;
pub use tdt_config::TdtConfig;
pub use timeline_config::{NodeType, TimelineConfig};
pub use tokenizer_config::TokenizerConfig;
