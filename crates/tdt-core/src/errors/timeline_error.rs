//! Timeline errors.

/// Errors raised when building or importing a timeline.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("expiry must be non-negative, got {expiry}")]
    InvalidExpiry { expiry: i64 },

    #[error("minimum similarity must be between 0 and 1, got {value}")]
    InvalidMinSimilarity { value: f64 },

    #[error("max time must be non-negative and at least the expiry ({expiry}), got {max_time}")]
    InvalidMaxTime { max_time: i64, expiry: i64 },

    #[error("timeline export failed: {reason}")]
    Serialization { reason: String },
}

impl From<serde_json::Error> for TimelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
