//! JSON-lines export and import: one `{"timestamp", "nutrition"}` record per window.

use std::io::{BufRead, Write};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tdt_core::errors::NutritionError;
use tracing::debug;

use crate::memory::MemoryNutritionStore;
use crate::store::NutritionStore;

/// One persisted window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord<T> {
    pub timestamp: i64,
    pub nutrition: T,
}

impl<T: Serialize> MemoryNutritionStore<T> {
    /// Write every window as one JSON line, oldest first.
    pub fn write_jsonl<W: Write>(&self, mut writer: W) -> Result<(), NutritionError> {
        for (line, (timestamp, nutrition)) in self.iter().enumerate() {
            let record = NutritionRecord {
                timestamp: *timestamp,
                nutrition,
            };
            serde_json::to_writer(&mut writer, &record).map_err(|e| {
                NutritionError::Serialization {
                    line: line + 1,
                    reason: e.to_string(),
                }
            })?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl<T: DeserializeOwned> MemoryNutritionStore<T> {
    /// Rebuild a store from JSON lines. Blank lines are skipped; later records
    /// overwrite earlier ones at the same timestamp.
    pub fn read_jsonl<R: BufRead>(reader: R) -> Result<Self, NutritionError> {
        let mut store = Self::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: NutritionRecord<T> =
                serde_json::from_str(&line).map_err(|e| NutritionError::Serialization {
                    line: index + 1,
                    reason: e.to_string(),
                })?;
            store.add(record.timestamp, record.nutrition);
        }
        debug!(windows = store.len(), "nutrition store loaded");
        Ok(store)
    }
}
