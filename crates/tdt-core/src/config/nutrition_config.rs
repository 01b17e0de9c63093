use serde::{Deserialize, Serialize};

use super::defaults;

/// Nutrition windowing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionConfig {
    /// Length of one nutrition window (seconds).
    pub window_secs: i64,
    /// Number of historical windows the burst detectors look back on.
    pub sets: usize,
    /// Rescale closed windows so the heaviest term weighs 1.
    pub rescale: bool,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            window_secs: defaults::DEFAULT_WINDOW_SECS,
            sets: defaults::DEFAULT_SETS,
            rescale: defaults::DEFAULT_RESCALE_NUTRITION,
        }
    }
}
