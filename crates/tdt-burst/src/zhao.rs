//! Zhao et al. (2011): a burst is a jump in stream volume between the two
//! halves of a time window, checked over progressively larger windows.

use tdt_core::config::{defaults, BurstConfig};
use tdt_core::errors::BurstError;
use tdt_nutrition::NutritionStore;
use tracing::debug;

/// The recent half-window in which the volume burst happened, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstWindow {
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Zhao {
    post_rate: f64,
    windows: Vec<i64>,
}

impl Default for Zhao {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_POST_RATE, defaults::DEFAULT_ZHAO_WINDOWS.to_vec())
    }
}

impl Zhao {
    /// Window sizes are scanned smallest first whatever order they are given in.
    pub fn new(post_rate: f64, mut windows: Vec<i64>) -> Self {
        windows.sort_unstable();
        windows.dedup();
        Self { post_rate, windows }
    }

    pub fn from_config(config: &BurstConfig) -> Self {
        Self::new(config.post_rate, config.windows.clone())
    }

    pub fn post_rate(&self) -> f64 {
        self.post_rate
    }

    /// Look for a burst ending just before `timestamp` (exclusive).
    ///
    /// `store` holds the stream volume per second; seconds without a record
    /// count as zero. The scan ends at the first window reaching back past the
    /// oldest record, since larger windows lack history too.
    pub fn detect<S: NutritionStore<f64>>(
        &self,
        store: &S,
        timestamp: i64,
    ) -> Result<Option<BurstWindow>, BurstError> {
        for &window in &self.windows {
            match store.first_timestamp() {
                Some(first) if first <= timestamp - window => {}
                _ => break,
            }
            let half = window / 2;
            let first = store.between(timestamp - window, timestamp - half)?;
            let first_rate = first.values().copied().sum::<f64>() / (window - half) as f64;
            if first_rate == 0.0 {
                continue;
            }

            let second = store.between(timestamp - half, timestamp)?;
            let second_rate = second.values().copied().sum::<f64>() / half as f64;
            let ratio = second_rate / first_rate;
            debug!(window, ratio, "zhao volume ratio");

            if ratio >= self.post_rate {
                if let (Some(start), Some(end)) = (second.keys().next(), second.keys().next_back()) {
                    return Ok(Some(BurstWindow {
                        start: *start,
                        end: *end,
                    }));
                }
            }
        }
        Ok(None)
    }
}
