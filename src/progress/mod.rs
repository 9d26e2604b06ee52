//! Progress tracking and gamification
//!
//! Everything the user logs - wins, moods, screening results, challenge
//! progress - lands in a SQLite database (`~/.bloom/wellness.db`), with the
//! gamification layer (XP, levels, streaks, badges) on top.
//!
//! # Usage
//!
//! ```ignore
//! let progress = ProgressManager::new()?;
//!
//! // Record a win and apply gamification effects
//! let win = progress.recorder().record_win(&new_win)?;
//! let events = progress.gamify().apply_win(win.win_type, &win.label, win.xp)?;
//!
//! // Query for the report view
//! let summary = progress.query().summary(TimeRange::Last30Days)?;
//! ```

pub mod db;
pub mod gamify;
pub mod models;
pub mod progression;
pub mod queries;
pub mod recorder;
pub mod time_bucket;

pub use db::WellnessDb;
pub use gamify::{
    GamificationManager, LevelUp, ProfileStats, StreakType, Streaks, UnlockedBadge, WellnessEvent,
    XpRewards, XP_PER_LEVEL,
};
pub use models::{
    ChallengeState, CompletionRecord, DailyActivityView, FavoriteKind, ScreeningResultRecord,
    TimeRange, WellnessSummary,
};
pub use progression::{ChallengeTracker, DayCompletion, ProgressionError};
pub use queries::ProgressQuery;
pub use recorder::{default_xp_for, ProgressRecorder};

use anyhow::Result;

/// Central manager for progress tracking
///
/// Coordinates recording, querying, gamification, and challenge
/// progression over one shared database connection.
#[derive(Clone)]
pub struct ProgressManager {
    db: WellnessDb,
}

impl ProgressManager {
    /// Open at the default database location
    pub fn new() -> Result<Self> {
        let db = WellnessDb::open_default()?;
        Ok(Self { db })
    }

    /// Open at a custom database path
    pub fn with_path(path: &std::path::Path) -> Result<Self> {
        let db = WellnessDb::open(path)?;
        Ok(Self { db })
    }

    /// Recorder for writing activity
    pub fn recorder(&self) -> ProgressRecorder {
        ProgressRecorder::new(self.db.clone())
    }

    /// Query interface for reading activity
    pub fn query(&self) -> ProgressQuery {
        ProgressQuery::new(self.db.clone())
    }

    /// Gamification manager (XP, streaks, badges)
    pub fn gamify(&self) -> GamificationManager {
        GamificationManager::new(self.db.conn.clone())
    }

    /// Challenge-day progression tracker
    pub fn challenges(&self) -> ChallengeTracker {
        ChallengeTracker::new(self.db.conn.clone())
    }

    /// Delete all logged data (keeps XP and badges)
    pub fn reset_all(&self) -> Result<()> {
        self.db.reset_all()
    }

    /// Delete gamification state (XP, level, streaks, badges)
    pub fn reset_gamification(&self) -> Result<()> {
        self.db.reset_gamification()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewWin, WinType};
    use tempfile::tempdir;

    #[test]
    fn test_manager_roundtrip() {
        let dir = tempdir().unwrap();
        let manager = ProgressManager::with_path(&dir.path().join("test.db")).unwrap();

        let win = manager
            .recorder()
            .record_win(&NewWin::new(WinType::Journal, "Wrote about today", 15))
            .unwrap();
        let events = manager.gamify().apply_win(win.win_type, &win.label, win.xp).unwrap();
        assert!(!events.is_empty());

        let summary = manager.query().summary(TimeRange::AllTime).unwrap();
        assert_eq!(summary.total_wins, 1);
        assert_eq!(summary.total_xp_earned, 15);

        let profile = manager.gamify().profile().unwrap();
        assert_eq!(profile.total_xp, 15);
    }

    #[test]
    fn test_challenge_flow_through_manager() {
        let dir = tempdir().unwrap();
        let manager = ProgressManager::with_path(&dir.path().join("test.db")).unwrap();

        manager.challenges().start("physiology_first").unwrap();
        let completion = manager.challenges().complete_current_day("physiology_first", None).unwrap();
        assert_eq!(completion.day, 1);

        // Day task XP flows through the same win pipeline
        let task = completion.task.unwrap();
        let win = manager
            .recorder()
            .record_win(&NewWin::new(WinType::ChallengeTask, task.title, completion.xp))
            .unwrap();
        manager.gamify().apply_win(win.win_type, &win.label, win.xp).unwrap();
        assert_eq!(manager.gamify().profile().unwrap().total_xp, 20);
    }
}
