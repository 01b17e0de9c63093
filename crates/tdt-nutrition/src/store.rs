//! The `NutritionStore` trait.

use std::collections::BTreeMap;

use tdt_core::errors::NutritionError;

/// Mapping from window-start timestamp to that window's nutrition.
///
/// `add` overwrites: two writes to the same window keep only the second.
pub trait NutritionStore<T> {
    /// Store `nutrition` at `timestamp`, replacing whatever was there.
    fn add(&mut self, timestamp: i64, nutrition: T);

    /// The nutrition stored at `timestamp`.
    fn get(&self, timestamp: i64) -> Result<&T, NutritionError>;

    /// Every stored window, ordered by timestamp.
    fn all(&self) -> BTreeMap<i64, &T>;

    /// Windows with `start <= timestamp < end`.
    fn between(&self, start: i64, end: i64) -> Result<BTreeMap<i64, &T>, NutritionError>;

    /// Delete the given windows. Missing timestamps are ignored.
    fn remove(&mut self, timestamps: &[i64]);

    fn first_timestamp(&self) -> Option<i64>;

    fn last_timestamp(&self) -> Option<i64>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Windows at or after `start`.
    fn since(&self, start: i64) -> BTreeMap<i64, &T> {
        match self.last_timestamp() {
            Some(last) if start <= last => self.between(start, last + 1).unwrap_or_default(),
            _ => BTreeMap::new(),
        }
    }

    /// Windows strictly before `end`.
    fn until(&self, end: i64) -> BTreeMap<i64, &T> {
        match self.first_timestamp() {
            Some(first) if first < end => self.between(first, end).unwrap_or_default(),
            _ => BTreeMap::new(),
        }
    }

    /// The `sets` most recent windows before `before`, most recent first.
    fn recent(&self, sets: usize, before: i64) -> Vec<(i64, &T)> {
        self.until(before).into_iter().rev().take(sets).collect()
    }

    /// Drop every window older than `timestamp`.
    fn remove_before(&mut self, timestamp: i64) {
        let stale: Vec<i64> = self.until(timestamp).into_keys().collect();
        self.remove(&stale);
    }
}
