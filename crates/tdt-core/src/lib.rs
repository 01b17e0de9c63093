//! Shared types for the TDT engine: term vectors, documents, vector math,
//! text processing, errors, and configuration.

pub mod config;
pub mod constants;
pub mod document;
pub mod errors;
pub mod nlp;
pub mod term;
pub mod vector;
pub mod vector_math;

pub use config::TdtConfig;
pub use document::Document;
pub use errors::{TdtError, TdtResult};
pub use term::RankedTerm;
pub use vector::Vector;
pub use vector_math::SimilarityMeasure;

use std::collections::BTreeMap;

/// Aggregated term weights of one time window.
pub type NutritionSet = BTreeMap<String, f64>;
