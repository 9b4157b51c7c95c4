//! Read-only analytics over a newest-first slice of samples: dashboard
//! numbers, filtered/sorted views, and JSON export.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Emotion, EmotionSample};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionCount {
    pub label: Emotion,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    pub total: usize,
    pub today: usize,
    pub most_frequent: Option<Emotion>,
    pub average_confidence: f64,
    /// Sorted by count, highest first.
    pub counts: Vec<EmotionCount>,
}

/// Per-label counts, highest first. Ties keep first-seen (newest-first) order.
pub fn label_counts(samples: &[EmotionSample]) -> Vec<EmotionCount> {
    let mut counts: Vec<EmotionCount> = Vec::new();
    for sample in samples {
        match counts.iter_mut().find(|entry| entry.label == sample.label) {
            Some(entry) => entry.count += 1,
            None => counts.push(EmotionCount {
                label: sample.label,
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// `today` is a calendar date in the local timezone.
pub fn compute_stats(samples: &[EmotionSample], today: NaiveDate) -> HistoryStats {
    let counts = label_counts(samples);
    let today_count = samples
        .iter()
        .filter(|sample| sample.captured_at.with_timezone(&Local).date_naive() == today)
        .count();
    let average_confidence = if samples.is_empty() {
        0.0
    } else {
        samples
            .iter()
            .map(|sample| f64::from(sample.confidence))
            .sum::<f64>()
            / samples.len() as f64
    };

    HistoryStats {
        total: samples.len(),
        today: today_count,
        most_frequent: counts.first().map(|entry| entry.label),
        average_confidence,
        counts,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Date,
    Emotion,
    Confidence,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryQuery {
    pub emotion: Option<Emotion>,
    pub sort_by: SortKey,
}

pub fn query_history(samples: &[EmotionSample], query: &HistoryQuery) -> Vec<EmotionSample> {
    let mut selected: Vec<EmotionSample> = samples
        .iter()
        .filter(|sample| query.emotion.map_or(true, |emotion| sample.label == emotion))
        .cloned()
        .collect();

    match query.sort_by {
        SortKey::Date => selected.sort_by(|a, b| b.captured_at.cmp(&a.captured_at)),
        SortKey::Emotion => selected.sort_by(|a, b| a.label.as_str().cmp(b.label.as_str())),
        SortKey::Confidence => selected.sort_by(|a, b| b.confidence.cmp(&a.confidence)),
    }

    selected
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportRecord {
    pub emotion: Emotion,
    pub confidence: u8,
    pub timestamp: DateTime<Utc>,
}

pub fn export_records(samples: &[EmotionSample]) -> Vec<ExportRecord> {
    samples
        .iter()
        .map(|sample| ExportRecord {
            emotion: sample.label,
            confidence: sample.confidence,
            timestamp: sample.captured_at,
        })
        .collect()
}

pub fn export_json(samples: &[EmotionSample]) -> Result<String> {
    serde_json::to_string_pretty(&export_records(samples))
        .context("failed to serialize emotion history export")
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("emotion_history_{}.json", date.format("%Y-%m-%d"))
}
