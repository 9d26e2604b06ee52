//! Data models for persisted progress
//!
//! These structures represent rows stored in and queried from the wellness
//! database. Domain-facing types live in [`crate::domain`]; these add the
//! storage-side fields (ids, buckets, timestamps).

use serde::{Deserialize, Serialize};

/// A stored screening result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningResultRecord {
    pub id: i64,
    pub screening_id: String,
    pub score: u32,
    pub level: String,
    /// Unix timestamp in milliseconds
    pub taken_at: i64,
}

/// A started (possibly completed) challenge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeState {
    pub challenge_id: String,
    /// 0 = started, nothing completed yet; duration = complete
    pub current_day: u32,
    pub started_at: i64,
    pub completed_at: Option<i64>,
}

impl ChallengeState {
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// A stored challenge-day completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub challenge_id: String,
    pub day: u32,
    pub task_title: Option<String>,
    pub xp: u32,
    pub reflection: Option<String>,
    pub completed_at: i64,
}

/// What can be marked as a favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    SelfCare,
    Skill,
}

impl FavoriteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfCare => "self_care",
            Self::Skill => "skill",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "self_care" => Some(Self::SelfCare),
            "skill" => Some(Self::Skill),
            _ => None,
        }
    }
}

/// Time range for report queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    AllTime,
}

impl TimeRange {
    /// Days to look back (None for all time)
    pub fn days(&self) -> Option<u32> {
        match self {
            Self::Last7Days => Some(7),
            Self::Last30Days => Some(30),
            Self::Last90Days => Some(90),
            Self::AllTime => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::Last90Days => "Last 90 days",
            Self::AllTime => "All time",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "7" | "7d" | "week" => Some(Self::Last7Days),
            "30" | "30d" | "month" => Some(Self::Last30Days),
            "90" | "90d" => Some(Self::Last90Days),
            "all" => Some(Self::AllTime),
            _ => None,
        }
    }
}

/// One day of aggregated activity
#[derive(Debug, Clone, Default)]
pub struct DailyActivityView {
    pub day: String,
    pub total_wins: u64,
    pub total_xp: u64,
    pub moods_logged: u64,
}

/// Summary for the report view
#[derive(Debug, Clone, Default)]
pub struct WellnessSummary {
    pub total_wins: u64,
    pub total_xp_earned: u64,

    /// (win type, count)
    pub wins_by_type: Vec<(String, u64)>,

    /// (primary mood, count)
    pub mood_counts: Vec<(String, u64)>,

    /// Time series over the requested range
    pub daily: Vec<DailyActivityView>,

    /// Recent screening results, newest first
    pub screenings: Vec<ScreeningResultRecord>,
}

impl WellnessSummary {
    /// Most frequently logged primary mood, if any moods were logged
    pub fn dominant_mood(&self) -> Option<&str> {
        self.mood_counts
            .iter()
            .max_by_key(|(_, count)| *count)
            .map(|(mood, _)| mood.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_parse() {
        assert_eq!(TimeRange::from_str("7d"), Some(TimeRange::Last7Days));
        assert_eq!(TimeRange::from_str("month"), Some(TimeRange::Last30Days));
        assert_eq!(TimeRange::from_str("all"), Some(TimeRange::AllTime));
        assert_eq!(TimeRange::from_str("yesterday"), None);
    }

    #[test]
    fn test_dominant_mood() {
        let summary = WellnessSummary {
            mood_counts: vec![("happy".into(), 2), ("anxious".into(), 5)],
            ..Default::default()
        };
        assert_eq!(summary.dominant_mood(), Some("anxious"));
    }
}
