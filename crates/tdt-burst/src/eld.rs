//! ELD: nutrition change against exponentially decayed history.
//!
//! Scores are continuous. With nutrition rescaled to `[0, 1]` a burst lies in `[−1, 1]`.

use tdt_core::config::{defaults, BurstConfig};
use tdt_core::errors::BurstError;
use tdt_core::{NutritionSet, RankedTerm};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Eld {
    decay_rate: f64,
    min_burst: f64,
    min_nutrition: f64,
}

impl Default for Eld {
    fn default() -> Self {
        Self::new(
            defaults::DEFAULT_DECAY_RATE,
            defaults::DEFAULT_MIN_BURST,
            defaults::DEFAULT_MIN_NUTRITION,
        )
    }
}

impl Eld {
    pub fn new(decay_rate: f64, min_burst: f64, min_nutrition: f64) -> Self {
        Self {
            decay_rate,
            min_burst,
            min_nutrition,
        }
    }

    pub fn from_config(config: &BurstConfig) -> Self {
        Self::new(config.decay_rate, config.min_burst, config.min_nutrition)
    }

    pub fn min_burst(&self) -> f64 {
        self.min_burst
    }

    /// `e^(−rate·Δ)`.
    pub fn decay(&self, delta: f64) -> f64 {
        (-self.decay_rate * delta).exp()
    }

    /// Sum of the decay over `windows` windows; 1 when there are none.
    pub fn coefficient(&self, windows: i64) -> Result<f64, BurstError> {
        if windows < 0 {
            return Err(BurstError::NegativeWindows { windows });
        }
        if windows == 0 {
            return Ok(1.0);
        }
        Ok((1..=windows).map(|delta| self.decay(delta as f64)).sum())
    }

    /// Decayed change of `term` against `historic` (most recent first).
    pub fn burst(&self, term: &str, nutrition: &NutritionSet, historic: &[&NutritionSet]) -> f64 {
        let current = nutrition.get(term).copied().unwrap_or(0.0);
        let change: f64 = historic
            .iter()
            .enumerate()
            .map(|(c, window)| {
                let past = window.get(term).copied().unwrap_or(0.0);
                (current - past) * self.decay((c + 1) as f64)
            })
            .sum();
        // A slice length is never negative.
        let coefficient = self.coefficient(historic.len() as i64).unwrap_or(1.0);
        change / coefficient
    }

    /// Burst of every term with enough nutrition, highest first.
    pub fn score(&self, nutrition: &NutritionSet, historic: &[&NutritionSet]) -> Vec<RankedTerm> {
        let mut ranked: Vec<RankedTerm> = nutrition
            .iter()
            .filter(|(_, n)| **n >= self.min_nutrition)
            .map(|(term, _)| RankedTerm::new(term.clone(), self.burst(term, nutrition, historic)))
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Terms bursting strictly above `min_burst`, highest first.
    pub fn detect(&self, nutrition: &NutritionSet, historic: &[&NutritionSet]) -> Vec<RankedTerm> {
        let mut ranked = self.score(nutrition, historic);
        ranked.retain(|t| t.score > self.min_burst);
        debug!(
            breaking = ranked.len(),
            windows = historic.len(),
            "eld burst computed"
        );
        ranked
    }
}
