//! Sparse weighted term vectors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::vector_math;

/// A sparse mapping from term to weight.
///
/// Dimensions are kept ordered so iteration, ranking ties and exports are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    dimensions: BTreeMap<String, f64>,
}

impl Vector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dimensions(&self) -> &BTreeMap<String, f64> {
        &self.dimensions
    }

    pub fn into_dimensions(self) -> BTreeMap<String, f64> {
        self.dimensions
    }

    /// Weight of `term`, 0 when the vector does not have that dimension.
    pub fn get(&self, term: &str) -> f64 {
        self.dimensions.get(term).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.dimensions.contains_key(term)
    }

    pub fn set(&mut self, term: impl Into<String>, weight: f64) {
        self.dimensions.insert(term.into(), weight);
    }

    pub fn remove(&mut self, term: &str) -> Option<f64> {
        self.dimensions.remove(term)
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.dimensions.iter()
    }

    pub fn magnitude(&self) -> f64 {
        vector_math::magnitude(self)
    }

    /// Unit-length copy. A zero vector is returned unchanged.
    pub fn normalized(&self) -> Vector {
        vector_math::normalize(self)
    }

    /// Terms sorted by descending weight; ties keep term order.
    pub fn ranked_terms(&self) -> Vec<(String, f64)> {
        let mut terms: Vec<(String, f64)> = self
            .dimensions
            .iter()
            .map(|(term, weight)| (term.clone(), *weight))
            .collect();
        terms.sort_by(|a, b| b.1.total_cmp(&a.1));
        terms
    }
}

impl From<BTreeMap<String, f64>> for Vector {
    fn from(dimensions: BTreeMap<String, f64>) -> Self {
        Self { dimensions }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Vector {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            dimensions: iter.into_iter().map(|(t, w)| (t.into(), w)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dimension_weighs_zero() {
        let v: Vector = [("a", 1.0)].into_iter().collect();
        assert_eq!(v.get("a"), 1.0);
        assert_eq!(v.get("b"), 0.0);
    }

    #[test]
    fn ranked_terms_sort_by_weight() {
        let v: Vector = [("a", 1.0), ("b", 3.0), ("c", 2.0)].into_iter().collect();
        let ranked: Vec<String> = v.ranked_terms().into_iter().map(|(t, _)| t).collect();
        assert_eq!(ranked, vec!["b", "c", "a"]);
    }
}
