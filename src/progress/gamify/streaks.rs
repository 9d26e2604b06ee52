//! Streak tracking
//!
//! Tracks consecutive-day streaks for mood check-ins and for wins of any
//! kind. A streak extends when the previous activity was yesterday, holds
//! when today is already counted, and resets to 1 otherwise.

use crate::progress::time_bucket::{days_between, today_bucket};

/// Type of streak being tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakType {
    /// Consecutive days with at least one mood check-in
    Mood,
    /// Consecutive days with at least one win of any kind
    Win,
}

impl StreakType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mood => "mood",
            Self::Win => "win",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "mood" => Some(Self::Mood),
            "win" => Some(Self::Win),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mood => "Mood Streak",
            Self::Win => "Win Streak",
        }
    }
}

/// Streak data loaded from the database
#[derive(Debug, Clone, Default)]
pub struct Streaks {
    pub mood: StreakInfo,
    pub win: StreakInfo,
}

/// Info for a single streak type
#[derive(Debug, Clone, Default)]
pub struct StreakInfo {
    pub current: u32,
    pub best: u32,
    pub last_activity_day: Option<String>,
}

impl StreakInfo {
    /// Whether the streak is still alive (activity today or yesterday)
    pub fn is_active(&self) -> bool {
        let Some(last_day) = &self.last_activity_day else {
            return false;
        };
        match days_between(last_day, &today_bucket()) {
            Some(days) => days <= 1,
            None => false,
        }
    }

    /// Whether logging today would extend (or start) the streak
    pub fn can_extend(&self) -> bool {
        let Some(last_day) = &self.last_activity_day else {
            return true; // No activity yet
        };
        match days_between(last_day, &today_bucket()) {
            Some(days) => days >= 1, // Not already counted today
            None => true,
        }
    }

    /// The count after an activity today: extended, unchanged, or reset
    pub fn next_count(&self) -> u32 {
        let Some(last_day) = &self.last_activity_day else {
            return 1;
        };
        match days_between(last_day, &today_bucket()) {
            Some(0) => self.current, // Already counted today
            Some(1) => self.current + 1,
            _ => 1, // Gap: reset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::time_bucket::bucket_days_ago;

    #[test]
    fn test_streak_type_roundtrip() {
        assert_eq!(StreakType::from_str("mood"), Some(StreakType::Mood));
        assert_eq!(StreakType::from_str("win"), Some(StreakType::Win));
        assert_eq!(StreakType::from_str("daily"), None);
    }

    #[test]
    fn test_fresh_streak() {
        let info = StreakInfo::default();
        assert!(!info.is_active());
        assert!(info.can_extend());
        assert_eq!(info.next_count(), 1);
    }

    #[test]
    fn test_same_day_does_not_double_count() {
        let info = StreakInfo {
            current: 3,
            best: 5,
            last_activity_day: Some(today_bucket()),
        };
        assert!(info.is_active());
        assert!(!info.can_extend());
        assert_eq!(info.next_count(), 3);
    }

    #[test]
    fn test_yesterday_extends() {
        let info = StreakInfo {
            current: 3,
            best: 5,
            last_activity_day: Some(bucket_days_ago(1)),
        };
        assert!(info.is_active());
        assert!(info.can_extend());
        assert_eq!(info.next_count(), 4);
    }

    #[test]
    fn test_gap_resets() {
        let info = StreakInfo {
            current: 9,
            best: 9,
            last_activity_day: Some(bucket_days_ago(3)),
        };
        assert!(!info.is_active());
        assert_eq!(info.next_count(), 1);
    }
}
