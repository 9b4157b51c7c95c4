use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::{Emotion, EmotionSample};

use super::WeightTable;

pub const CONFIDENCE_MIN: f64 = 65.0;
pub const CONFIDENCE_MAX: f64 = 95.0;
const CONFIDENCE_JITTER: f64 = 10.0;

/// Label used when the table has no positive weight or the walk falls off the end.
pub const FALLBACK_EMOTION: Emotion = Emotion::Neutral;

/// Simulated analyzer. It never looks at the recording: the label is a
/// weighted draw and the confidence is derived from the drawn weight.
#[derive(Debug, Clone, Default)]
pub struct EmotionSampler {
    table: WeightTable,
}

impl EmotionSampler {
    pub fn new(table: WeightTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &WeightTable {
        &self.table
    }

    pub fn sample(&self) -> EmotionSample {
        self.sample_with(&mut rand::thread_rng(), Utc::now())
    }

    pub fn sample_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        captured_at: DateTime<Utc>,
    ) -> EmotionSample {
        let label = self.draw_label(rng);
        let confidence = self.confidence_for(label, rng);
        EmotionSample::new(label, confidence, captured_at)
    }

    pub fn draw_label<R: Rng + ?Sized>(&self, rng: &mut R) -> Emotion {
        let total = self.table.total();
        if total == 0 {
            return FALLBACK_EMOTION;
        }
        self.label_at(rng.gen_range(0.0..total as f64))
    }

    /// Cumulative-weight walk for a point `r` in `[0, total)`. A point on a
    /// boundary belongs to the earlier entry; zero weights own no points.
    pub fn label_at(&self, r: f64) -> Emotion {
        let mut remaining = r;
        for (emotion, weight) in self.table.entries() {
            if *weight == 0 {
                continue;
            }
            remaining -= f64::from(*weight);
            if remaining <= 0.0 {
                return *emotion;
            }
        }

        FALLBACK_EMOTION
    }

    fn confidence_for<R: Rng + ?Sized>(&self, label: Emotion, rng: &mut R) -> u8 {
        let base = f64::from(self.table.weight_of(label)) * 2.0;
        let jitter = rng.gen_range(-CONFIDENCE_JITTER..CONFIDENCE_JITTER);
        (base + jitter)
            .clamp(CONFIDENCE_MIN, CONFIDENCE_MAX)
            .round() as u8
    }
}

/// Draw a sample from the default weight table with thread-local randomness.
pub fn sample() -> EmotionSample {
    EmotionSampler::default().sample()
}
