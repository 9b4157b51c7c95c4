use std::{fmt, str::FromStr};

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// Closed set of emotion labels the analyzer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Fearful,
    Surprised,
    Neutral,
    Disgusted,
    Confused,
    Relaxed,
    Excited,
}

impl Emotion {
    /// Every label in catalog order.
    pub const ALL: [Emotion; 10] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Fearful,
        Emotion::Surprised,
        Emotion::Neutral,
        Emotion::Disgusted,
        Emotion::Confused,
        Emotion::Relaxed,
        Emotion::Excited,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Fearful => "fearful",
            Emotion::Surprised => "surprised",
            Emotion::Neutral => "neutral",
            Emotion::Disgusted => "disgusted",
            Emotion::Confused => "confused",
            Emotion::Relaxed => "relaxed",
            Emotion::Excited => "excited",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Emotion::Happy => "Feeling joyful and content",
            Emotion::Sad => "Experiencing sadness or melancholy",
            Emotion::Angry => "Feeling frustrated or irritated",
            Emotion::Fearful => "Experiencing anxiety or worry",
            Emotion::Surprised => "Feeling amazed or startled",
            Emotion::Neutral => "Balanced emotional state",
            Emotion::Disgusted => "Feeling repulsed or revolted",
            Emotion::Confused => "Feeling uncertain or puzzled",
            Emotion::Relaxed => "Feeling calm and peaceful",
            Emotion::Excited => "Feeling energetic and enthusiastic",
        }
    }

    /// Labels counted as positive by trend and streak detection.
    pub fn is_positive(&self) -> bool {
        matches!(self, Emotion::Happy | Emotion::Excited | Emotion::Relaxed)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .iter()
            .copied()
            .find(|emotion| emotion.as_str() == value)
            .ok_or_else(|| anyhow!("unknown emotion label '{value}'"))
    }
}

/// Catalog entry handed to the frontend for legends and filters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionInfo {
    pub label: Emotion,
    pub description: &'static str,
    pub positive: bool,
}

impl From<Emotion> for EmotionInfo {
    fn from(label: Emotion) -> Self {
        Self {
            label,
            description: label.description(),
            positive: label.is_positive(),
        }
    }
}

pub fn emotion_catalog() -> Vec<EmotionInfo> {
    Emotion::ALL.iter().copied().map(EmotionInfo::from).collect()
}
