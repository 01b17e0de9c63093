//! Term-weighting errors.

/// Errors raised when building a term-weighting scheme or rescaling weights.
#[derive(Debug, thiserror::Error)]
pub enum WeightingError {
    #[error("document frequency of {term} ({frequency}) exceeds the {documents} documents in the idf table")]
    InvalidIdf {
        term: String,
        frequency: u64,
        documents: u64,
    },

    #[error("augmentation must be between 0 and 1, got {value}")]
    InvalidAugmentation { value: f64 },
}
