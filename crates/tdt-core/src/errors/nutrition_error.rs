//! Nutrition store errors.

/// Errors raised by nutrition store lookups and persistence.
#[derive(Debug, thiserror::Error)]
pub enum NutritionError {
    #[error("no nutrition stored at timestamp {timestamp}")]
    NotFound { timestamp: i64 },

    #[error("invalid range: start {start} must be lower than end {end}")]
    InvalidRange { start: i64, end: i64 },

    #[error("malformed nutrition record on line {line}: {reason}")]
    Serialization { line: usize, reason: String },

    #[error("nutrition i/o failed: {reason}")]
    Io { reason: String },
}

impl From<std::io::Error> for NutritionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            reason: err.to_string(),
        }
    }
}
