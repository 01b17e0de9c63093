//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    BurstConfig, ClusteringConfig, ConsumerConfig, NutritionConfig, ObservabilityConfig,
    PostFilter, TimelineConfig, TokenizerConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TDT_*`)
/// 2. TOML file passed to [`TdtConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TdtConfig {
    pub nutrition: NutritionConfig,
    pub burst: BurstConfig,
    pub clustering: ClusteringConfig,
    pub timeline: TimelineConfig,
    pub consumer: ConsumerConfig,
    pub tokenizer: TokenizerConfig,
    pub observability: ObservabilityConfig,
}

impl TdtConfig {
    /// Load configuration: defaults, then the optional TOML file, then `TDT_*` overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &TdtConfig) -> Result<(), ConfigError> {
        let fail = |field: &str, message: &str| {
            Err(ConfigError::ValidationFailed {
                field: field.to_string(),
                message: message.to_string(),
            })
        };

        if config.nutrition.window_secs <= 0 {
            return fail("nutrition.window_secs", "must be greater than 0");
        }
        if config.nutrition.sets == 0 {
            return fail("nutrition.sets", "must be greater than 0");
        }

        let burst = &config.burst;
        if burst.significance <= 0.0 || burst.significance >= 1.0 {
            return fail("burst.significance", "must be between 0.0 and 1.0 (exclusive)");
        }
        if burst.decay_rate <= 0.0 {
            return fail("burst.decay_rate", "must be greater than 0");
        }
        if burst.post_rate <= 1.0 {
            return fail("burst.post_rate", "must be greater than 1.0");
        }
        if burst.windows.is_empty() || burst.windows.iter().any(|w| *w < 2) {
            return fail("burst.windows", "must list window sizes of at least 2 seconds");
        }
        if burst.min_breaking > burst.max_breaking {
            return fail("burst.min_breaking", "must not exceed burst.max_breaking");
        }

        if !(0.0..=1.0).contains(&config.clustering.threshold) {
            return fail("clustering.threshold", "must be between 0.0 and 1.0");
        }
        if config.clustering.freeze_period <= 0 {
            return fail("clustering.freeze_period", "must be greater than 0");
        }

        let timeline = &config.timeline;
        if timeline.expiry < 0 {
            return fail("timeline.expiry", "must be non-negative");
        }
        if !(0.0..=1.0).contains(&timeline.min_similarity) {
            return fail("timeline.min_similarity", "must be between 0.0 and 1.0");
        }
        if timeline.max_time < timeline.expiry {
            return fail("timeline.max_time", "must not be lower than timeline.expiry");
        }

        if !(0.0..=1.0).contains(&config.consumer.max_intra_similarity) {
            return fail("consumer.max_intra_similarity", "must be between 0.0 and 1.0");
        }
        for filter in &config.consumer.filters {
            match filter {
                PostFilter::Language { lang } if lang.trim().is_empty() => {
                    return fail("consumer.filters", "language rule needs a language code");
                }
                PostFilter::MinFollowerRatio { ratio } if !ratio.is_finite() || *ratio < 0.0 => {
                    return fail("consumer.filters", "follower ratio must be a non-negative number");
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Apply environment variable overrides (`TDT_*`). Unparseable values are ignored.
    fn apply_env_overrides(config: &mut TdtConfig) {
        if let Some(v) = env_parse("TDT_NUTRITION_WINDOW_SECS") {
            config.nutrition.window_secs = v;
        }
        if let Some(v) = env_parse("TDT_NUTRITION_SETS") {
            config.nutrition.sets = v;
        }
        if let Some(v) = env_parse("TDT_BURST_ALGORITHM") {
            config.burst.algorithm = v;
        }
        if let Some(v) = env_parse("TDT_BURST_SIGNIFICANCE") {
            config.burst.significance = v;
        }
        if let Some(v) = env_parse("TDT_BURST_POST_RATE") {
            config.burst.post_rate = v;
        }
        if let Some(v) = env_parse("TDT_CLUSTERING_THRESHOLD") {
            config.clustering.threshold = v;
        }
        if let Some(v) = env_parse("TDT_CLUSTERING_FREEZE_PERIOD") {
            config.clustering.freeze_period = v;
        }
        if let Some(v) = env_parse("TDT_TIMELINE_EXPIRY") {
            config.timeline.expiry = v;
        }
        if let Some(v) = env_parse("TDT_TIMELINE_MIN_SIMILARITY") {
            config.timeline.min_similarity = v;
        }
        if let Some(v) = env_parse("TDT_TIMELINE_MAX_TIME") {
            config.timeline.max_time = v;
        }
        if let Some(v) = env_parse("TDT_CONSUMER_MAX_INACTIVITY_SECS") {
            config.consumer.max_inactivity_secs = Some(v);
        }
        if let Ok(val) = std::env::var("TDT_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|val| val.parse().ok())
}
