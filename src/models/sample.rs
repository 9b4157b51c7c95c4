use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Emotion;

pub const MAX_CONFIDENCE: u8 = 100;

/// One simulated analysis result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionSample {
    pub id: String,
    pub label: Emotion,
    /// Percentage in [0, 100]; the sampler only emits [65, 95].
    pub confidence: u8,
    pub captured_at: DateTime<Utc>,
}

impl EmotionSample {
    pub fn new(label: Emotion, confidence: u8, captured_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            label,
            confidence: confidence.min(MAX_CONFIDENCE),
            captured_at,
        }
    }
}
