//! Burst detection errors.

use super::NutritionError;

/// Errors raised by the burst detectors.
#[derive(Debug, thiserror::Error)]
pub enum BurstError {
    #[error("the number of windows must be non-negative, got {windows}")]
    NegativeWindows { windows: i64 },

    #[error("invalid burst parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("nutrition lookup failed: {0}")]
    Nutrition(#[from] NutritionError),
}
