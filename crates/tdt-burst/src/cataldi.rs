//! Cataldi et al. (2010): terms whose nutrition grows quadratically faster than
//! their history, ranked and cut at the critical drop in burstiness.

use tdt_core::config::{defaults, BurstConfig};
use tdt_core::errors::{BurstError, NutritionError};
use tdt_core::{NutritionSet, RankedTerm};
use tdt_nutrition::NutritionStore;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Cataldi {
    min_nutrition: f64,
    min_breaking: usize,
    max_breaking: usize,
}

impl Default for Cataldi {
    fn default() -> Self {
        Self {
            min_nutrition: defaults::DEFAULT_MIN_NUTRITION,
            min_breaking: defaults::DEFAULT_MIN_BREAKING,
            max_breaking: defaults::DEFAULT_MAX_BREAKING,
        }
    }
}

impl Cataldi {
    pub fn new(min_nutrition: f64, min_breaking: usize, max_breaking: usize) -> Self {
        Self {
            min_nutrition,
            min_breaking,
            max_breaking,
        }
    }

    pub fn from_config(config: &BurstConfig) -> Self {
        Self::new(config.min_nutrition, config.min_breaking, config.max_breaking)
    }

    /// Burstiness of every term with enough nutrition, highest first.
    ///
    /// `historic` is ordered most recent first.
    pub fn burstiness(&self, nutrition: &NutritionSet, historic: &[&NutritionSet]) -> Vec<RankedTerm> {
        let mut ranked: Vec<RankedTerm> = nutrition
            .iter()
            .filter(|(_, n)| **n >= self.min_nutrition)
            .map(|(term, _)| RankedTerm::new(term.clone(), compute_burst(term, nutrition, historic)))
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Breaking terms in descending order of burstiness.
    pub fn detect(&self, nutrition: &NutritionSet, historic: &[&NutritionSet]) -> Vec<RankedTerm> {
        let mut ranked = self.burstiness(nutrition, historic);
        let critical = self.critical_index(&ranked);
        debug!(
            terms = ranked.len(),
            windows = historic.len(),
            critical,
            "cataldi burstiness computed"
        );
        ranked.truncate(critical);
        ranked
    }

    /// Detect at `timestamp` against the `sets` windows stored before it.
    /// A window with no stored nutrition has no breaking terms.
    pub fn detect_in_store<S: NutritionStore<NutritionSet>>(
        &self,
        store: &S,
        timestamp: i64,
        sets: usize,
    ) -> Result<Vec<RankedTerm>, BurstError> {
        let nutrition = match store.get(timestamp) {
            Ok(nutrition) => nutrition,
            Err(NutritionError::NotFound { .. }) => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let historic: Vec<&NutritionSet> = store
            .recent(sets, timestamp)
            .into_iter()
            .map(|(_, n)| n)
            .collect();
        Ok(self.detect(nutrition, &historic))
    }

    /// Number of leading terms in `ranked` that are breaking.
    pub(crate) fn critical_index(&self, ranked: &[RankedTerm]) -> usize {
        let scores: Vec<f64> = ranked.iter().map(|t| t.score).collect();
        match critical_drop_index(&burst_drops(&scores)) {
            0 => 0,
            index => index
                .clamp(self.min_breaking, self.max_breaking)
                .min(ranked.len()),
        }
    }
}

/// `Σ_i (n(t)² − h_i(t)²) / log10(i + 2)`, with `historic` most recent first.
pub fn compute_burst(term: &str, nutrition: &NutritionSet, historic: &[&NutritionSet]) -> f64 {
    let current = nutrition.get(term).copied().unwrap_or(0.0).powi(2);
    historic
        .iter()
        .enumerate()
        .map(|(i, window)| {
            let past = window.get(term).copied().unwrap_or(0.0).powi(2);
            (current - past) / ((i + 2) as f64).log10()
        })
        .sum()
}

/// Differences between consecutive values, after sorting them in descending order.
pub fn burst_drops(bursts: &[f64]) -> Vec<f64> {
    let mut sorted = bursts.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    sorted.windows(2).map(|pair| pair[0] - pair[1]).collect()
}

/// The critical drop index: how many terms precede the critical drop.
///
/// The drops up to and including the last occurrence of the largest drop are
/// averaged; the critical drop is the first of them at or above the average.
/// Returns 0 when there are no drops or the largest drop is not positive.
pub fn critical_drop_index(drops: &[f64]) -> usize {
    let Some(max) = drops.iter().copied().reduce(f64::max) else {
        return 0;
    };
    if max <= 0.0 {
        return 0;
    }

    let max_drop_index = drops.len() - drops.iter().rev().position(|d| *d == max).unwrap_or(0);
    let considered = &drops[..max_drop_index];
    let average = considered.iter().sum::<f64>() / considered.len() as f64;

    considered
        .iter()
        .position(|d| *d >= average)
        .map_or(max_drop_index, |i| i + 1)
}
