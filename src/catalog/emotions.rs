//! The emotion wheel and mood context tags
//!
//! Two-level wheel: six primary emotions, each with five secondary feelings.
//! Mood check-ins store the primary id plus any number of secondary ids.

/// Emotional polarity, used to filter context tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// A secondary feeling under a primary emotion
#[derive(Debug, Clone, Copy)]
pub struct SecondaryFeeling {
    pub id: &'static str,
    pub label: &'static str,
}

/// A primary emotion on the wheel
#[derive(Debug, Clone, Copy)]
pub struct Emotion {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub polarity: Polarity,
    pub secondary: &'static [SecondaryFeeling],
}

macro_rules! feelings {
    ($(($id:literal, $label:literal)),* $(,)?) => {
        &[$(SecondaryFeeling { id: $id, label: $label }),*]
    };
}

/// The six primary emotions
pub static EMOTIONS: &[Emotion] = &[
    Emotion {
        id: "happy",
        label: "Happy",
        emoji: "😊",
        polarity: Polarity::Positive,
        secondary: feelings![
            ("joyful", "Joyful"),
            ("content", "Content"),
            ("peaceful", "Peaceful"),
            ("excited", "Excited"),
            ("grateful", "Grateful"),
        ],
    },
    Emotion {
        id: "sad",
        label: "Sad",
        emoji: "😢",
        polarity: Polarity::Negative,
        secondary: feelings![
            ("down", "Down"),
            ("lonely", "Lonely"),
            ("disappointed", "Disappointed"),
            ("hurt", "Hurt"),
            ("hopeless", "Hopeless"),
        ],
    },
    Emotion {
        id: "angry",
        label: "Angry",
        emoji: "😠",
        polarity: Polarity::Negative,
        secondary: feelings![
            ("frustrated", "Frustrated"),
            ("annoyed", "Annoyed"),
            ("irritated", "Irritated"),
            ("mad", "Mad"),
            ("furious", "Furious"),
        ],
    },
    Emotion {
        id: "anxious",
        label: "Anxious",
        emoji: "😰",
        polarity: Polarity::Negative,
        secondary: feelings![
            ("worried", "Worried"),
            ("nervous", "Nervous"),
            ("stressed", "Stressed"),
            ("overwhelmed", "Overwhelmed"),
            ("scared", "Scared"),
        ],
    },
    Emotion {
        id: "tired",
        label: "Tired",
        emoji: "😴",
        polarity: Polarity::Negative,
        secondary: feelings![
            ("exhausted", "Exhausted"),
            ("drained", "Drained"),
            ("low-energy", "Low Energy"),
            ("burnt-out", "Burnt Out"),
            ("fatigued", "Fatigued"),
        ],
    },
    Emotion {
        id: "neutral",
        label: "Neutral",
        emoji: "😐",
        polarity: Polarity::Neutral,
        secondary: feelings![
            ("calm", "Calm"),
            ("okay", "Okay"),
            ("meh", "Meh"),
            ("indifferent", "Indifferent"),
            ("balanced", "Balanced"),
        ],
    },
];

impl Emotion {
    /// Look up a primary emotion by id
    pub fn get(id: &str) -> Option<&'static Emotion> {
        EMOTIONS.iter().find(|e| e.id == id)
    }

    /// Check whether `feeling` is a secondary feeling of this emotion
    pub fn has_feeling(&self, feeling: &str) -> bool {
        self.secondary.iter().any(|f| f.id == feeling)
    }
}

/// A hashtag-style context tag attached to mood check-ins
///
/// `contexts` restricts which moods a tag is suggested for: polarity names,
/// specific emotion ids, or "all".
#[derive(Debug, Clone, Copy)]
pub struct ContextTag {
    pub id: &'static str,
    pub label: &'static str,
    pub contexts: &'static [&'static str],
}

pub static CONTEXT_TAGS: &[ContextTag] = &[
    ContextTag { id: "win", label: "#win", contexts: &["positive"] },
    ContextTag { id: "gratitude", label: "#gratitude", contexts: &["positive", "neutral"] },
    ContextTag { id: "progress", label: "#progress", contexts: &["positive", "neutral"] },
    ContextTag { id: "connection", label: "#connection", contexts: &["positive", "neutral"] },
    ContextTag { id: "trigger", label: "#trigger", contexts: &["negative"] },
    ContextTag {
        id: "overstimulation",
        label: "#overstimulation",
        contexts: &["negative", "anxious", "tired"],
    },
    ContextTag { id: "conflict", label: "#conflict", contexts: &["negative", "angry"] },
    ContextTag { id: "setback", label: "#setback", contexts: &["negative", "sad"] },
    ContextTag { id: "reflection", label: "#reflection", contexts: &["all"] },
    ContextTag { id: "health", label: "#health", contexts: &["all"] },
    ContextTag { id: "energy", label: "#energy", contexts: &["all"] },
];

impl ContextTag {
    pub fn get(id: &str) -> Option<&'static ContextTag> {
        CONTEXT_TAGS.iter().find(|t| t.id == id)
    }

    /// Tags suggested for the given emotion
    pub fn for_emotion(emotion: &Emotion) -> Vec<&'static ContextTag> {
        CONTEXT_TAGS
            .iter()
            .filter(|t| {
                t.contexts.iter().any(|c| {
                    *c == "all" || *c == emotion.id || *c == emotion.polarity.as_str()
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_shape() {
        assert_eq!(EMOTIONS.len(), 6);
        for emotion in EMOTIONS {
            assert_eq!(emotion.secondary.len(), 5, "{} wheel slice", emotion.id);
        }
    }

    #[test]
    fn test_lookup_and_feelings() {
        let happy = Emotion::get("happy").unwrap();
        assert!(happy.has_feeling("grateful"));
        assert!(!happy.has_feeling("furious"));
        assert!(Emotion::get("elated").is_none());
    }

    #[test]
    fn test_tags_for_emotion() {
        let anxious = Emotion::get("anxious").unwrap();
        let tags: Vec<_> = ContextTag::for_emotion(anxious).iter().map(|t| t.id).collect();
        assert!(tags.contains(&"overstimulation"));
        assert!(tags.contains(&"reflection"));
        assert!(!tags.contains(&"win"));
    }
}
