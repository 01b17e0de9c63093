//! The closed set of burst detectors, chosen once from configuration.

use tdt_core::config::{BurstAlgorithm, BurstConfig};
use tdt_core::{NutritionSet, RankedTerm};

use crate::{Cataldi, Eld, FilteredCataldi, Zhao};

#[derive(Debug, Clone, PartialEq)]
pub enum BurstDetector {
    Cataldi(Cataldi),
    FilteredCataldi(FilteredCataldi),
    Zhao(Zhao),
    Eld(Eld),
}

impl BurstDetector {
    pub fn from_config(config: &BurstConfig) -> Self {
        match config.algorithm {
            BurstAlgorithm::Cataldi => Self::Cataldi(Cataldi::from_config(config)),
            BurstAlgorithm::FilteredCataldi => {
                Self::FilteredCataldi(FilteredCataldi::from_config(config))
            }
            BurstAlgorithm::Zhao => Self::Zhao(Zhao::from_config(config)),
            BurstAlgorithm::Eld => Self::Eld(Eld::from_config(config)),
        }
    }

    pub fn algorithm(&self) -> BurstAlgorithm {
        match self {
            Self::Cataldi(_) => BurstAlgorithm::Cataldi,
            Self::FilteredCataldi(_) => BurstAlgorithm::FilteredCataldi,
            Self::Zhao(_) => BurstAlgorithm::Zhao,
            Self::Eld(_) => BurstAlgorithm::Eld,
        }
    }

    /// Ranked breaking terms of a window for the term-based detectors.
    /// `None` for Zhao, which reads stream volume instead of term nutrition.
    pub fn breaking_terms(
        &self,
        nutrition: &NutritionSet,
        historic: &[&NutritionSet],
    ) -> Option<Vec<RankedTerm>> {
        match self {
            Self::Cataldi(d) => Some(d.detect(nutrition, historic)),
            Self::FilteredCataldi(d) => Some(d.detect(nutrition, historic)),
            Self::Eld(d) => Some(d.detect(nutrition, historic)),
            Self::Zhao(_) => None,
        }
    }
}
