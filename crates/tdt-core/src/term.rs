//! Ranked terms, as produced by burst detection.

use serde::{Deserialize, Serialize};

use crate::vector::Vector;

/// A term with the score it was ranked by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTerm {
    pub term: String,
    pub score: f64,
}

impl RankedTerm {
    pub fn new(term: impl Into<String>, score: f64) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }
}

/// Build a topic vector from ranked terms. Non-positive scores are dropped.
pub fn topic_vector(terms: &[RankedTerm]) -> Vector {
    terms
        .iter()
        .filter(|t| t.score > 0.0)
        .map(|t| (t.term.clone(), t.score))
        .collect::<Vector>()
        .normalized()
}
