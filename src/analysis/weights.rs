use crate::models::Emotion;

/// Label weights walked in a fixed order by the sampler.
///
/// Order matters: when the running value lands exactly on a boundary the
/// earlier entry wins.
#[derive(Debug, Clone)]
pub struct WeightTable {
    entries: Vec<(Emotion, u32)>,
}

impl WeightTable {
    pub fn new(entries: Vec<(Emotion, u32)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(Emotion, u32)] {
        &self.entries
    }

    /// Sum of all weights, widened so large tables cannot overflow.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, weight)| u64::from(*weight)).sum()
    }

    /// Weight of the first entry for `label`, zero when absent.
    pub fn weight_of(&self, label: Emotion) -> u32 {
        self.entries
            .iter()
            .find(|(emotion, _)| *emotion == label)
            .map(|(_, weight)| *weight)
            .unwrap_or(0)
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            entries: vec![
                (Emotion::Happy, 20),
                (Emotion::Neutral, 18),
                (Emotion::Relaxed, 15),
                (Emotion::Excited, 12),
                (Emotion::Confused, 10),
                (Emotion::Sad, 8),
                (Emotion::Surprised, 6),
                (Emotion::Fearful, 4),
                (Emotion::Angry, 4),
                (Emotion::Disgusted, 3),
            ],
        }
    }
}
