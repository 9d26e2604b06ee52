use serde::{Deserialize, Serialize};

/// A mood check-in, as stored
///
/// `mood` is a primary-emotion id from the emotion wheel; `feelings` are
/// secondary-feeling ids under that emotion. Both are validated against the
/// catalog when the entry is recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: i64,
    pub mood: String,
    pub feelings: Vec<String>,
    pub note: Option<String>,
    pub tags: Vec<String>,
    /// Unix timestamp in milliseconds
    pub created_at: i64,
}

/// A mood check-in about to be recorded
#[derive(Debug, Clone, Default)]
pub struct NewMood {
    pub mood: String,
    pub feelings: Vec<String>,
    pub note: Option<String>,
    pub tags: Vec<String>,
}

impl NewMood {
    pub fn new(mood: impl Into<String>) -> Self {
        Self {
            mood: mood.into(),
            ..Default::default()
        }
    }

    pub fn with_feelings(mut self, feelings: Vec<String>) -> Self {
        self.feelings = feelings;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}
