//! Term-weighting schemes that turn tokens into vectors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::WeightingError;
use crate::vector::Vector;

/// Local and global term-weighting schemes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum TermWeighting {
    /// Raw term frequency.
    #[default]
    Tf,
    /// Term frequency scaled by `log10(N / (df + 1))`.
    TfIdf {
        /// Document frequency per term.
        idf: HashMap<String, u64>,
        /// Number of documents the table was built from.
        documents: u64,
    },
}

impl TermWeighting {
    /// Build a TF-IDF scheme, rejecting tables with frequencies above `documents`.
    pub fn tf_idf(idf: HashMap<String, u64>, documents: u64) -> Result<Self, WeightingError> {
        if let Some((term, frequency)) = idf.iter().find(|(_, df)| **df > documents) {
            return Err(WeightingError::InvalidIdf {
                term: term.clone(),
                frequency: *frequency,
                documents,
            });
        }
        Ok(Self::TfIdf { idf, documents })
    }

    /// Weigh the tokens. The vector is not normalized.
    pub fn weigh(&self, tokens: &[String]) -> Vector {
        let mut tf: HashMap<&str, f64> = HashMap::new();
        for token in tokens {
            *tf.entry(token.as_str()).or_insert(0.0) += 1.0;
        }

        match self {
            Self::Tf => tf.into_iter().collect(),
            Self::TfIdf { idf, documents } => tf
                .into_iter()
                .map(|(term, count)| {
                    let df = idf.get(term).copied().unwrap_or(0) as f64;
                    (term, count * (*documents as f64 / (df + 1.0)).log10())
                })
                .collect(),
        }
    }
}
