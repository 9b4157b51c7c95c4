use serde::{Deserialize, Serialize};

use crate::models::{Emotion, EmotionSample};

const TREND_WINDOW: usize = 3;
const PATTERN_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

/// Classify the three newest samples (`samples` is newest first).
pub fn classify_trend(samples: &[EmotionSample]) -> Trend {
    if samples.len() < TREND_WINDOW {
        return Trend::Stable;
    }

    let positive = samples[..TREND_WINDOW]
        .iter()
        .filter(|sample| sample.label.is_positive())
        .count();

    match positive {
        0 => Trend::Declining,
        1 => Trend::Stable,
        _ => Trend::Improving,
    }
}

/// Labels of the five newest samples.
pub fn mood_pattern(samples: &[EmotionSample]) -> Vec<Emotion> {
    samples
        .iter()
        .take(PATTERN_WINDOW)
        .map(|sample| sample.label)
        .collect()
}

/// More than two recent samples and the newest two are both positive.
pub fn positive_streak(samples: &[EmotionSample]) -> bool {
    let recent = &samples[..samples.len().min(PATTERN_WINDOW)];
    recent.len() > 2 && recent[..2].iter().all(|sample| sample.label.is_positive())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn samples(labels: &[Emotion]) -> Vec<EmotionSample> {
        labels
            .iter()
            .map(|label| EmotionSample::new(*label, 65, Utc::now()))
            .collect()
    }

    #[test]
    fn two_positive_of_three_is_improving() {
        let log = samples(&[Emotion::Happy, Emotion::Excited, Emotion::Sad]);
        assert_eq!(classify_trend(&log), Trend::Improving);
    }

    #[test]
    fn no_positive_is_declining() {
        let log = samples(&[Emotion::Sad, Emotion::Angry, Emotion::Fearful]);
        assert_eq!(classify_trend(&log), Trend::Declining);
    }

    #[test]
    fn one_positive_is_stable() {
        let log = samples(&[Emotion::Happy, Emotion::Sad, Emotion::Neutral]);
        assert_eq!(classify_trend(&log), Trend::Stable);
    }

    #[test]
    fn short_history_is_stable() {
        assert_eq!(classify_trend(&[]), Trend::Stable);
        let log = samples(&[Emotion::Sad, Emotion::Angry]);
        assert_eq!(classify_trend(&log), Trend::Stable);
    }

    #[test]
    fn only_the_newest_three_count() {
        let log = samples(&[
            Emotion::Sad,
            Emotion::Angry,
            Emotion::Fearful,
            Emotion::Happy,
            Emotion::Excited,
        ]);
        assert_eq!(classify_trend(&log), Trend::Declining);
    }

    #[test]
    fn pattern_and_streak() {
        let log = samples(&[
            Emotion::Relaxed,
            Emotion::Happy,
            Emotion::Sad,
            Emotion::Neutral,
            Emotion::Angry,
            Emotion::Confused,
        ]);
        assert_eq!(
            mood_pattern(&log),
            vec![
                Emotion::Relaxed,
                Emotion::Happy,
                Emotion::Sad,
                Emotion::Neutral,
                Emotion::Angry
            ]
        );
        assert!(positive_streak(&log));
        assert!(!positive_streak(&log[..2]));
        assert!(!positive_streak(&log[1..]));
    }
}
