use serde::{Deserialize, Serialize};

/// The kind of logged win
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinType {
    /// A free-form activity ("went for a run")
    Activity,
    /// A mood check-in
    Mood,
    /// A journal entry
    Journal,
    /// A gratitude journal entry
    Gratitude,
    /// A self-care activity from the catalog
    SelfCare,
    /// A completed challenge-day task
    ChallengeTask,
    /// A completed self-assessment screening
    Screening,
}

impl WinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Mood => "mood",
            Self::Journal => "journal",
            Self::Gratitude => "gratitude",
            Self::SelfCare => "self_care",
            Self::ChallengeTask => "challenge_task",
            Self::Screening => "screening",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "activity" => Some(Self::Activity),
            "mood" => Some(Self::Mood),
            "journal" => Some(Self::Journal),
            "gratitude" => Some(Self::Gratitude),
            "self_care" => Some(Self::SelfCare),
            "challenge_task" => Some(Self::ChallengeTask),
            "screening" => Some(Self::Screening),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Activity => "Activity",
            Self::Mood => "Mood Check-In",
            Self::Journal => "Journal",
            Self::Gratitude => "Gratitude",
            Self::SelfCare => "Self-Care",
            Self::ChallengeTask => "Challenge Task",
            Self::Screening => "Screening",
        }
    }

    /// Default icon shown next to wins of this type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Activity => "⚡",
            Self::Mood => "🌤️",
            Self::Journal => "📓",
            Self::Gratitude => "🙏",
            Self::SelfCare => "🧘",
            Self::ChallengeTask => "🎯",
            Self::Screening => "📋",
        }
    }

    pub fn all() -> &'static [WinType] {
        &[
            Self::Activity,
            Self::Mood,
            Self::Journal,
            Self::Gratitude,
            Self::SelfCare,
            Self::ChallengeTask,
            Self::Screening,
        ]
    }
}

impl std::fmt::Display for WinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logged win, as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Win {
    pub id: i64,
    pub win_type: WinType,
    pub label: String,
    pub icon: String,
    /// XP awarded by this win. Always non-negative; XP only accumulates.
    pub xp: u32,
    /// Free-form content (journal text, gratitude entry, reflection)
    pub content: Option<String>,
    pub tags: Vec<String>,
    /// Unix timestamp in milliseconds
    pub created_at: i64,
}

/// A win about to be recorded
#[derive(Debug, Clone)]
pub struct NewWin {
    pub win_type: WinType,
    pub label: String,
    pub icon: Option<String>,
    pub xp: u32,
    pub content: Option<String>,
    pub tags: Vec<String>,
}

impl NewWin {
    pub fn new(win_type: WinType, label: impl Into<String>, xp: u32) -> Self {
        Self {
            win_type,
            label: label.into(),
            icon: None,
            xp,
            content: None,
            tags: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Icon to store: explicit icon, or the type default
    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or_else(|| self.win_type.icon())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_type_roundtrip() {
        for t in WinType::all() {
            assert_eq!(WinType::from_str(t.as_str()), Some(*t));
        }
        assert_eq!(WinType::from_str("nope"), None);
    }

    #[test]
    fn test_new_win_default_icon() {
        let win = NewWin::new(WinType::Gratitude, "Evening gratitude", 10);
        assert_eq!(win.icon_or_default(), "🙏");

        let win = win.with_icon("✨");
        assert_eq!(win.icon_or_default(), "✨");
    }
}
