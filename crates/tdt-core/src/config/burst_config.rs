use serde::{Deserialize, Serialize};

use super::defaults;

/// The burst detection algorithms the engine ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BurstAlgorithm {
    #[default]
    Cataldi,
    FilteredCataldi,
    Zhao,
    Eld,
}

impl BurstAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cataldi => "cataldi",
            Self::FilteredCataldi => "filtered_cataldi",
            Self::Zhao => "zhao",
            Self::Eld => "eld",
        }
    }
}

impl std::str::FromStr for BurstAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cataldi" => Ok(Self::Cataldi),
            "filtered_cataldi" => Ok(Self::FilteredCataldi),
            "zhao" => Ok(Self::Zhao),
            "eld" => Ok(Self::Eld),
            other => Err(format!("unknown burst algorithm: {other}")),
        }
    }
}

/// Burst detection configuration.
///
/// Every algorithm reads only the fields it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    pub algorithm: BurstAlgorithm,
    /// Terms with less nutrition than this in the current window are ignored.
    pub min_nutrition: f64,
    /// Lower clamp on the Cataldi critical drop index.
    pub min_breaking: usize,
    /// Upper clamp on the Cataldi critical drop index.
    pub max_breaking: usize,
    /// Upper-tail significance `p` of the filtered Cataldi variant.
    pub significance: f64,
    /// ELD exponential decay rate.
    pub decay_rate: f64,
    /// ELD terms must burst strictly above this value.
    pub min_burst: f64,
    /// ELD clusters with at least this many breaking terms are bursty.
    pub min_terms: usize,
    /// ELD clusters whose mean burst exceeds this value are bursty.
    pub min_mean_burst: f64,
    /// Zhao volume ratio that signals a burst.
    pub post_rate: f64,
    /// Zhao window sizes (seconds), scanned smallest first.
    pub windows: Vec<i64>,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            algorithm: BurstAlgorithm::default(),
            min_nutrition: defaults::DEFAULT_MIN_NUTRITION,
            min_breaking: defaults::DEFAULT_MIN_BREAKING,
            max_breaking: defaults::DEFAULT_MAX_BREAKING,
            significance: defaults::DEFAULT_SIGNIFICANCE,
            decay_rate: defaults::DEFAULT_DECAY_RATE,
            min_burst: defaults::DEFAULT_MIN_BURST,
            min_terms: defaults::DEFAULT_ELD_MIN_TERMS,
            min_mean_burst: defaults::DEFAULT_ELD_MIN_MEAN_BURST,
            post_rate: defaults::DEFAULT_POST_RATE,
            windows: defaults::DEFAULT_ZHAO_WINDOWS.to_vec(),
        }
    }
}
