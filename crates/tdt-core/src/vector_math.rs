//! Vector math over sparse term vectors: norms, distances, similarity.

use serde::{Deserialize, Serialize};

use crate::errors::WeightingError;
use crate::vector::Vector;

/// Euclidean length of the vector.
pub fn magnitude(v: &Vector) -> f64 {
    v.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
}

/// Unit-length copy of the vector. Zero vectors are returned unchanged.
pub fn normalize(v: &Vector) -> Vector {
    let mag = magnitude(v);
    if mag < f64::EPSILON {
        return v.clone();
    }
    v.iter().map(|(t, w)| (t.clone(), w / mag)).collect()
}

/// Augmented normalization: `a + (1 − a) · w / max(w)`.
///
/// Keeps every weight in `[a, 1]`, damping the advantage of long documents.
pub fn augmented_normalize(v: &Vector, a: f64) -> Result<Vector, WeightingError> {
    if !(0.0..=1.0).contains(&a) {
        return Err(WeightingError::InvalidAugmentation { value: a });
    }
    let max = v.iter().map(|(_, w)| *w).fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return Ok(v.clone());
    }
    Ok(v.iter().map(|(t, w)| (t.clone(), a + (1.0 - a) * w / max)).collect())
}

/// Sum the vectors dimension by dimension.
pub fn concatenate<'a>(vectors: impl IntoIterator<Item = &'a Vector>) -> Vector {
    let mut sum = Vector::new();
    for v in vectors {
        for (term, weight) in v.iter() {
            let total = sum.get(term) + weight;
            sum.set(term.clone(), total);
        }
    }
    sum
}

/// Euclidean distance over the union of both vectors' dimensions.
pub fn euclidean(a: &Vector, b: &Vector) -> f64 {
    union_terms(a, b)
        .map(|t| (a.get(t) - b.get(t)).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Manhattan distance over the union of both vectors' dimensions.
pub fn manhattan(a: &Vector, b: &Vector) -> f64 {
    union_terms(a, b).map(|t| (a.get(t) - b.get(t)).abs()).sum()
}

/// Cosine similarity between two vectors.
/// Returns 0.0 when either vector has zero magnitude.
pub fn cosine(a: &Vector, b: &Vector) -> f64 {
    let denom = magnitude(a) * magnitude(b);
    if denom < f64::EPSILON {
        return 0.0;
    }
    // Iterate the smaller vector; missing dimensions contribute nothing.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small.iter().map(|(t, w)| w * large.get(t)).sum();
    (dot / denom).clamp(-1.0, 1.0)
}

pub fn cosine_distance(a: &Vector, b: &Vector) -> f64 {
    1.0 - cosine(a, b)
}

fn union_terms<'a>(a: &'a Vector, b: &'a Vector) -> impl Iterator<Item = &'a String> {
    a.dimensions()
        .keys()
        .chain(b.dimensions().keys().filter(move |t| !a.contains(t)))
}

/// Similarity functions available to the clusterers.
///
/// Distances are turned into similarities as `1 − distance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMeasure {
    #[default]
    Cosine,
    Euclidean,
    Manhattan,
}

impl SimilarityMeasure {
    pub fn similarity(&self, a: &Vector, b: &Vector) -> f64 {
        match self {
            Self::Cosine => cosine(a, b),
            Self::Euclidean => 1.0 - euclidean(a, b),
            Self::Manhattan => 1.0 - manhattan(a, b),
        }
    }
}
