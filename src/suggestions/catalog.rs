use serde::Serialize;

use crate::models::Emotion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<&'static str>,
}

const fn timed(title: &'static str, description: &'static str, duration: &'static str) -> Suggestion {
    Suggestion {
        title,
        description,
        duration: Some(duration),
    }
}

const fn open(title: &'static str, description: &'static str) -> Suggestion {
    Suggestion {
        title,
        description,
        duration: None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Breathing,
    Music,
    Reading,
    Activity,
    Mindfulness,
}

impl SuggestionCategory {
    pub const ALL: [SuggestionCategory; 5] = [
        SuggestionCategory::Breathing,
        SuggestionCategory::Music,
        SuggestionCategory::Reading,
        SuggestionCategory::Activity,
        SuggestionCategory::Mindfulness,
    ];
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SuggestionSet {
    pub breathing: &'static [Suggestion],
    pub music: &'static [Suggestion],
    pub reading: &'static [Suggestion],
    pub activity: &'static [Suggestion],
    pub mindfulness: &'static [Suggestion],
}

impl SuggestionSet {
    pub fn category(&self, category: SuggestionCategory) -> &'static [Suggestion] {
        match category {
            SuggestionCategory::Breathing => self.breathing,
            SuggestionCategory::Music => self.music,
            SuggestionCategory::Reading => self.reading,
            SuggestionCategory::Activity => self.activity,
            SuggestionCategory::Mindfulness => self.mindfulness,
        }
    }
}

static HAPPY: SuggestionSet = SuggestionSet {
    breathing: &[
        timed("Celebratory Breathing", "Deep breaths to savor this positive moment", "2 minutes"),
        timed("Energy Breath", "Energizing breath work to maintain your good mood", "3 minutes"),
    ],
    music: &[
        open("Upbeat Playlist", "Listen to energetic music that matches your mood"),
        open("Feel-Good Classics", "Classic songs that enhance positive emotions"),
    ],
    reading: &[
        open("Inspirational Quotes", "Read motivational quotes that resonate with joy"),
        open("Success Stories", "Stories of achievement and positive outcomes"),
    ],
    activity: &[
        open("Share Your Joy", "Call a friend or family member to share good news"),
        open("Creative Expression", "Draw, write, or create something inspired by your mood"),
    ],
    mindfulness: &[
        timed("Gratitude Practice", "Take a moment to appreciate what made you happy", "5 minutes"),
        timed("Loving-Kindness Meditation", "Send positive thoughts to yourself and others", "10 minutes"),
    ],
};

static SAD: SuggestionSet = SuggestionSet {
    breathing: &[
        timed("Comforting Breath Work", "Gentle breathing to soothe difficult emotions", "5 minutes"),
        timed("4-7-8 Breathing", "Calming technique to ease sadness", "4 minutes"),
    ],
    music: &[
        open("Healing Music", "Soft, therapeutic music for emotional processing"),
        open("Nature Sounds", "Calming sounds of rain, ocean, or forest"),
    ],
    reading: &[
        open("Comfort Poetry", "Gentle poems that validate your feelings"),
        open("Self-Compassion Articles", "Reading about being kind to yourself during tough times"),
    ],
    activity: &[
        open("Gentle Movement", "Light stretching or yoga to release tension"),
        open("Warm Bath", "Take a relaxing bath with essential oils"),
    ],
    mindfulness: &[
        timed("Emotion Acceptance", "Practice accepting your feelings without judgment", "8 minutes"),
        timed("Body Scan Meditation", "Connect with your body and release tension", "15 minutes"),
    ],
};

static ANGRY: SuggestionSet = SuggestionSet {
    breathing: &[
        timed("Cooling Breath", "Breathing technique to reduce anger and heat", "3 minutes"),
        timed("Box Breathing", "Structured breathing to regain control", "5 minutes"),
    ],
    music: &[
        open("Calming Instrumentals", "Peaceful music to cool down intense emotions"),
        open("Classical Relaxation", "Soothing classical pieces for emotional regulation"),
    ],
    reading: &[
        open("Anger Management Tips", "Quick strategies for handling anger constructively"),
        open("Mindful Communication", "Learning to express anger in healthy ways"),
    ],
    activity: &[
        open("Physical Release", "Go for a brisk walk or do jumping jacks"),
        open("Progressive Muscle Relaxation", "Tense and release muscle groups systematically"),
    ],
    mindfulness: &[
        timed("Anger Observation", "Notice anger without being consumed by it", "6 minutes"),
        timed("Compassion Practice", "Find understanding for yourself and the situation", "10 minutes"),
    ],
};

static FEARFUL: SuggestionSet = SuggestionSet {
    breathing: &[
        timed("Grounding Breath", "Breathing technique to feel more anchored and safe", "4 minutes"),
        timed("Confidence Breathing", "Build courage through intentional breathing", "3 minutes"),
    ],
    music: &[
        open("Empowering Songs", "Music that builds confidence and reduces fear"),
        open("Gentle Affirmation Music", "Soft music with positive affirmations"),
    ],
    reading: &[
        open("Courage Quotes", "Inspiring words about overcoming fear"),
        open("Anxiety Relief Techniques", "Practical methods for managing worry"),
    ],
    activity: &[
        open("Safe Space Visualization", "Imagine yourself in a completely safe environment"),
        open("Gentle Self-Care", "Do something nurturing and comforting for yourself"),
    ],
    mindfulness: &[
        timed("Fear Acknowledgment", "Recognize fear without letting it control you", "7 minutes"),
        timed("Safety Meditation", "Connect with feelings of security and protection", "12 minutes"),
    ],
};

static NEUTRAL: SuggestionSet = SuggestionSet {
    breathing: &[
        timed("Energizing Breath", "Breathing to add some vitality to your day", "3 minutes"),
        timed("Mindful Breathing", "Simple awareness of breath to stay present", "5 minutes"),
    ],
    music: &[
        open("Mood-Lifting Playlist", "Upbeat music to add some sparkle to your day"),
        open("Focus Music", "Background music for productivity and concentration"),
    ],
    reading: &[
        open("Daily Inspiration", "Short motivational reading to brighten your day"),
        open("Interesting Articles", "Engaging content to stimulate your mind"),
    ],
    activity: &[
        open("Try Something New", "Learn a new skill or hobby for 10 minutes"),
        open("Connect with Nature", "Spend time outdoors or tend to plants"),
    ],
    mindfulness: &[
        timed("Present Moment Awareness", "Simple meditation to enhance mindfulness", "10 minutes"),
        timed("Intention Setting", "Set a positive intention for your day", "5 minutes"),
    ],
};

/// Returned for every label without its own entry.
pub static DEFAULT_SUGGESTIONS: SuggestionSet = SuggestionSet {
    breathing: &[
        timed("Deep Breathing", "Basic breathing exercise for emotional balance", "3 minutes"),
        timed("Mindful Breath", "Focus on your breath to center yourself", "5 minutes"),
    ],
    music: &[
        open("Relaxing Music", "Gentle music to support emotional well-being"),
        open("Nature Sounds", "Peaceful sounds from nature for relaxation"),
    ],
    reading: &[
        open("Mindfulness Tips", "Quick tips for staying present and aware"),
        open("Positive Affirmations", "Uplifting statements to support your well-being"),
    ],
    activity: &[
        open("Gentle Movement", "Light exercise or stretching for emotional release"),
        open("Creative Expression", "Engage in art, writing, or other creative activities"),
    ],
    mindfulness: &[
        timed("Emotion Awareness", "Practice observing your emotions with kindness", "8 minutes"),
        timed("Self-Compassion", "Treat yourself with understanding and care", "10 minutes"),
    ],
};

pub fn suggestions_for(emotion: Emotion) -> &'static SuggestionSet {
    match emotion {
        Emotion::Happy => &HAPPY,
        Emotion::Sad => &SAD,
        Emotion::Angry => &ANGRY,
        Emotion::Fearful => &FEARFUL,
        Emotion::Neutral => &NEUTRAL,
        _ => &DEFAULT_SUGGESTIONS,
    }
}

/// Lookup by wire name; unparseable labels get the default set.
pub fn suggestions_for_label(label: &str) -> &'static SuggestionSet {
    label
        .parse::<Emotion>()
        .map(suggestions_for)
        .unwrap_or(&DEFAULT_SUGGESTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_labels_get_the_default_set() {
        for emotion in [
            Emotion::Surprised,
            Emotion::Disgusted,
            Emotion::Confused,
            Emotion::Relaxed,
            Emotion::Excited,
        ] {
            assert_eq!(suggestions_for(emotion), &DEFAULT_SUGGESTIONS);
        }
        assert_eq!(suggestions_for_label("surprised"), &DEFAULT_SUGGESTIONS);
        assert_eq!(suggestions_for_label("melancholic"), &DEFAULT_SUGGESTIONS);
    }

    #[test]
    fn mapped_labels_have_their_own_entries() {
        assert_eq!(suggestions_for(Emotion::Happy).breathing[0].title, "Celebratory Breathing");
        assert_eq!(suggestions_for_label("sad").breathing[1].title, "4-7-8 Breathing");
        assert_eq!(suggestions_for(Emotion::Angry).activity[0].title, "Physical Release");
        assert_eq!(suggestions_for(Emotion::Fearful).mindfulness[1].duration, Some("12 minutes"));
        assert_eq!(suggestions_for(Emotion::Neutral).music[1].title, "Focus Music");
    }

    #[test]
    fn every_category_is_populated() {
        for emotion in Emotion::ALL {
            let set = suggestions_for(emotion);
            for category in SuggestionCategory::ALL {
                assert!(!set.category(category).is_empty(), "{emotion} {category:?}");
            }
        }
    }

    #[test]
    fn durations_are_omitted_when_absent() {
        let json = serde_json::to_value(suggestions_for(Emotion::Happy)).unwrap();
        assert_eq!(json["breathing"][0]["duration"], "2 minutes");
        assert!(json["music"][0].get("duration").is_none());
        assert_eq!(json.as_object().unwrap().len(), 5);
    }
}
