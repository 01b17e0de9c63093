//! Cataldi with a significance filter: breaking terms must also sit in the
//! upper tail of a skew-normal fitted to the window's burstiness.

use tdt_core::config::{defaults, BurstConfig};
use tdt_core::{NutritionSet, RankedTerm};
use tracing::debug;

use crate::cataldi::Cataldi;
use crate::skew_normal::SkewNormal;

#[derive(Debug, Clone, PartialEq)]
pub struct FilteredCataldi {
    cataldi: Cataldi,
    significance: f64,
}

impl Default for FilteredCataldi {
    fn default() -> Self {
        Self::new(Cataldi::default(), defaults::DEFAULT_SIGNIFICANCE)
    }
}

impl FilteredCataldi {
    pub fn new(cataldi: Cataldi, significance: f64) -> Self {
        Self {
            cataldi,
            significance,
        }
    }

    pub fn from_config(config: &BurstConfig) -> Self {
        Self::new(Cataldi::from_config(config), config.significance)
    }

    pub fn significance(&self) -> f64 {
        self.significance
    }

    /// Cataldi's breaking terms whose upper-tail probability is below the significance level.
    pub fn detect(&self, nutrition: &NutritionSet, historic: &[&NutritionSet]) -> Vec<RankedTerm> {
        let mut ranked = self.cataldi.burstiness(nutrition, historic);
        let critical = self.cataldi.critical_index(&ranked);

        let scores: Vec<f64> = ranked.iter().map(|t| t.score).collect();
        let Some(distribution) = SkewNormal::fit(&scores) else {
            return Vec::new();
        };

        ranked.truncate(critical);
        ranked.retain(|t| distribution.sf(t.score) < self.significance);
        debug!(
            critical,
            significant = ranked.len(),
            p = self.significance,
            "filtered cataldi burstiness computed"
        );
        ranked
    }
}
