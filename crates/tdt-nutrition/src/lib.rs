//! # tdt-nutrition
//!
//! Keyed storage of per-window nutrition: term weights for the feature-pivot
//! detectors, stream volume for Zhao. The store never buckets timestamps itself;
//! callers pass window-aligned keys.

pub mod memory;
pub mod persist;
pub mod store;

pub use memory::MemoryNutritionStore;
pub use persist::NutritionRecord;
pub use store::NutritionStore;
