//! In-process nutrition store backed by a `BTreeMap`.

use std::collections::BTreeMap;

use tdt_core::errors::NutritionError;

use crate::store::NutritionStore;

/// Nutrition store kept in memory, ordered by timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryNutritionStore<T> {
    windows: BTreeMap<i64, T>,
}

impl<T> Default for MemoryNutritionStore<T> {
    fn default() -> Self {
        Self {
            windows: BTreeMap::new(),
        }
    }
}

impl<T> MemoryNutritionStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to a stored window, for in-place accumulation.
    pub fn get_mut(&mut self, timestamp: i64) -> Option<&mut T> {
        self.windows.get_mut(&timestamp)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&i64, &T)> {
        self.windows.iter()
    }
}

impl<T> FromIterator<(i64, T)> for MemoryNutritionStore<T> {
    fn from_iter<I: IntoIterator<Item = (i64, T)>>(iter: I) -> Self {
        Self {
            windows: iter.into_iter().collect(),
        }
    }
}

impl<T> NutritionStore<T> for MemoryNutritionStore<T> {
    fn add(&mut self, timestamp: i64, nutrition: T) {
        self.windows.insert(timestamp, nutrition);
    }

    fn get(&self, timestamp: i64) -> Result<&T, NutritionError> {
        self.windows
            .get(&timestamp)
            .ok_or(NutritionError::NotFound { timestamp })
    }

    fn all(&self) -> BTreeMap<i64, &T> {
        self.windows.iter().map(|(k, v)| (*k, v)).collect()
    }

    fn between(&self, start: i64, end: i64) -> Result<BTreeMap<i64, &T>, NutritionError> {
        if start >= end {
            return Err(NutritionError::InvalidRange { start, end });
        }
        Ok(self.windows.range(start..end).map(|(k, v)| (*k, v)).collect())
    }

    fn remove(&mut self, timestamps: &[i64]) {
        for timestamp in timestamps {
            self.windows.remove(timestamp);
        }
    }

    fn first_timestamp(&self) -> Option<i64> {
        self.windows.keys().next().copied()
    }

    fn last_timestamp(&self) -> Option<i64> {
        self.windows.keys().next_back().copied()
    }

    fn len(&self) -> usize {
        self.windows.len()
    }
}
