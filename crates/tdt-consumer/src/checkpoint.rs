//! Window bookkeeping: term nutrition per window, stream volume per second,
//! and the documents waiting for their window to close.

use std::collections::BTreeMap;

use tdt_core::config::NutritionConfig;
use tdt_core::{Document, NutritionSet};
use tdt_nutrition::{MemoryNutritionStore, NutritionStore};

/// Whether a document was counted in its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Open,
    /// Older than the open window: only the volume was updated.
    Late,
}

/// A window that has closed, with the documents it received.
#[derive(Debug, Clone)]
pub struct ClosedWindow {
    pub start: i64,
    pub end: i64,
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone)]
pub struct Checkpoints {
    window_secs: i64,
    sets: usize,
    rescale: bool,
    volume_horizon: i64,
    nutrition: MemoryNutritionStore<NutritionSet>,
    volume: MemoryNutritionStore<f64>,
    pending: BTreeMap<i64, Vec<Document>>,
    open: Option<i64>,
}

impl Checkpoints {
    /// `volume_horizon` is how many seconds of volume to keep behind a closed window.
    pub fn new(config: &NutritionConfig, volume_horizon: i64) -> Self {
        Self {
            window_secs: config.window_secs.max(1),
            sets: config.sets,
            rescale: config.rescale,
            volume_horizon,
            nutrition: MemoryNutritionStore::new(),
            volume: MemoryNutritionStore::new(),
            pending: BTreeMap::new(),
            open: None,
        }
    }

    pub fn window_secs(&self) -> i64 {
        self.window_secs
    }

    pub fn window_start(&self, timestamp: i64) -> i64 {
        timestamp.div_euclid(self.window_secs) * self.window_secs
    }

    pub fn open_window(&self) -> Option<i64> {
        self.open
    }

    pub fn nutrition(&self) -> &MemoryNutritionStore<NutritionSet> {
        &self.nutrition
    }

    pub fn volume(&self) -> &MemoryNutritionStore<f64> {
        &self.volume
    }

    pub fn nutrition_at(&self, start: i64) -> Option<&NutritionSet> {
        self.nutrition.get(start).ok()
    }

    /// Nutrition of the `sets` windows before `start`, most recent first.
    pub fn historic(&self, start: i64) -> Vec<&NutritionSet> {
        self.nutrition
            .recent(self.sets, start)
            .into_iter()
            .map(|(_, n)| n)
            .collect()
    }

    /// Move the open window up to the one containing `timestamp`.
    ///
    /// Returns the starts of the windows this closes, oldest first.
    pub fn advance(&mut self, timestamp: i64) -> Vec<i64> {
        let window = self.window_start(timestamp);
        match self.open {
            None => {
                self.open = Some(window);
                Vec::new()
            }
            Some(open) if window > open => {
                self.open = Some(window);
                (open..window).step_by(self.window_secs as usize).collect()
            }
            Some(_) => Vec::new(),
        }
    }

    /// Count the document in the volume and, unless it is late, in the open window.
    pub fn record(&mut self, timestamp: i64, document: Document) -> Admission {
        let volume = self.volume.get(timestamp).copied().unwrap_or(0.0);
        self.volume.add(timestamp, volume + 1.0);

        let window = self.window_start(timestamp);
        if self.open.map_or(true, |open| window < open) {
            return Admission::Late;
        }

        let mut nutrition = self.nutrition.get(window).cloned().unwrap_or_default();
        for (term, weight) in document.vector().iter() {
            *nutrition.entry(term.clone()).or_insert(0.0) += weight;
        }
        self.nutrition.add(window, nutrition);
        self.pending.entry(window).or_default().push(document);
        Admission::Open
    }

    /// Close the window at `start`: rescale its nutrition and hand back its documents.
    pub fn close(&mut self, start: i64) -> ClosedWindow {
        let mut nutrition = self.nutrition.get(start).cloned().unwrap_or_default();
        if self.rescale {
            rescale(&mut nutrition);
        }
        self.nutrition.add(start, nutrition);

        ClosedWindow {
            start,
            end: start + self.window_secs,
            documents: self.pending.remove(&start).unwrap_or_default(),
        }
    }

    /// Take the open window so it can be closed when the stream ends.
    pub fn flush(&mut self) -> Option<i64> {
        self.open.take()
    }

    /// Forget nutrition the detectors no longer look back on once the window
    /// `[start, end)` is done, and volume older than the horizon.
    pub fn prune(&mut self, start: i64, end: i64) {
        self.nutrition
            .remove_before(start - self.sets as i64 * self.window_secs);
        self.volume.remove_before(end - self.volume_horizon);
    }
}

/// Scale so that the heaviest term weighs 1.
pub fn rescale(nutrition: &mut NutritionSet) {
    let max = nutrition.values().copied().fold(0.0, f64::max);
    if max > 0.0 {
        for weight in nutrition.values_mut() {
            *weight /= max;
        }
    }
}
