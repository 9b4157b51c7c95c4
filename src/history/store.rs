use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{EmotionSample, MAX_CONFIDENCE};

/// Maximum number of samples retained; older entries are dropped.
pub const HISTORY_CAPACITY: usize = 50;

/// Newest-first, capped sequence of samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<EmotionSample>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from restored entries. Later repeats of an id are
    /// dropped, confidences are clamped to 100 and only the newest
    /// `HISTORY_CAPACITY` are kept.
    pub fn from_entries(entries: Vec<EmotionSample>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.id.clone()))
            .map(|mut entry| {
                entry.confidence = entry.confidence.min(MAX_CONFIDENCE);
                entry
            })
            .take(HISTORY_CAPACITY)
            .collect();
        Self { entries }
    }

    /// Returns a new log with `sample` in front. Any older entry sharing its id
    /// is dropped so ids stay unique.
    pub fn append(&self, sample: EmotionSample) -> HistoryLog {
        let mut entries = Vec::with_capacity(HISTORY_CAPACITY);
        let id = sample.id.clone();
        entries.push(sample);
        entries.extend(
            self.entries
                .iter()
                .filter(|existing| existing.id != id)
                .take(HISTORY_CAPACITY - 1)
                .cloned(),
        );
        HistoryLog { entries }
    }

    pub fn clear(&self) -> HistoryLog {
        HistoryLog::new()
    }

    pub fn entries(&self) -> &[EmotionSample] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&EmotionSample> {
        self.entries.first()
    }

    pub fn recent(&self, count: usize) -> &[EmotionSample] {
        &self.entries[..count.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
