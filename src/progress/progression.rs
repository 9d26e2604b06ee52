//! Challenge-day progression
//!
//! A started challenge is a single day pointer in `[0, duration]`.
//! Completing the current day is the only transition: the pointer advances
//! by exactly one, never decreases, and never passes `duration`. There is
//! no skipping, branching, or rollback.

use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{Connection, OptionalExtension};
use thiserror::Error;

use crate::catalog::badges::Badge;
use crate::catalog::challenges::{ChallengeProgram, DayTask};
use crate::progress::models::{ChallengeState, CompletionRecord};

#[derive(Debug, Error)]
pub enum ProgressionError {
    #[error("unknown challenge '{0}'")]
    UnknownChallenge(String),

    #[error("challenge '{0}' has not been started")]
    NotStarted(String),

    #[error("challenge '{0}' is already in progress")]
    AlreadyStarted(String),

    #[error("challenge '{0}' is already complete")]
    AlreadyComplete(String),

    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),
}

/// The outcome of completing a challenge day
#[derive(Debug, Clone)]
pub struct DayCompletion {
    pub challenge: &'static ChallengeProgram,
    pub day: u32,
    /// None on rest days of sparse programs
    pub task: Option<&'static DayTask>,
    pub xp: u32,
    /// Badge named by the day's task, if any
    pub badge: Option<&'static Badge>,
    pub challenge_completed: bool,
}

/// Tracks per-challenge day pointers in the database
pub struct ChallengeTracker {
    conn: Arc<Mutex<Connection>>,
}

impl ChallengeTracker {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn now_ms() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Start a challenge at day 0
    ///
    /// Restarting a completed challenge resets its state and completions;
    /// starting one that is still in progress is an error.
    pub fn start(&self, challenge_id: &str) -> Result<ChallengeState, ProgressionError> {
        let program = ChallengeProgram::get(challenge_id)
            .ok_or_else(|| ProgressionError::UnknownChallenge(challenge_id.to_string()))?;

        if let Some(state) = self.state(program.id)? {
            if !state.is_complete() {
                return Err(ProgressionError::AlreadyStarted(program.id.to_string()));
            }
            let conn = self.conn.lock().expect("lock");
            conn.execute("DELETE FROM user_challenges WHERE challenge_id = ?1", [program.id])?;
            conn.execute(
                "DELETE FROM challenge_completions WHERE challenge_id = ?1",
                [program.id],
            )?;
        }

        let now = Self::now_ms();
        let conn = self.conn.lock().expect("lock");
        conn.execute(
            "INSERT INTO user_challenges (challenge_id, current_day, started_at) VALUES (?1, 0, ?2)",
            (program.id, now),
        )?;

        Ok(ChallengeState {
            challenge_id: program.id.to_string(),
            current_day: 0,
            started_at: now,
            completed_at: None,
        })
    }

    /// Current state for a challenge, if started
    pub fn state(&self, challenge_id: &str) -> Result<Option<ChallengeState>, ProgressionError> {
        let conn = self.conn.lock().expect("lock");
        let state = conn
            .query_row(
                "SELECT challenge_id, current_day, started_at, completed_at
                 FROM user_challenges WHERE challenge_id = ?1",
                [challenge_id],
                |r| {
                    Ok(ChallengeState {
                        challenge_id: r.get(0)?,
                        current_day: r.get(1)?,
                        started_at: r.get(2)?,
                        completed_at: r.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(state)
    }

    /// All started challenges, active first
    pub fn all(&self) -> Result<Vec<ChallengeState>, ProgressionError> {
        let conn = self.conn.lock().expect("lock");
        let mut stmt = conn.prepare(
            "SELECT challenge_id, current_day, started_at, completed_at
             FROM user_challenges ORDER BY completed_at IS NOT NULL, started_at",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok(ChallengeState {
                challenge_id: r.get(0)?,
                current_day: r.get(1)?,
                started_at: r.get(2)?,
                completed_at: r.get(3)?,
            })
        })?;
        Ok(rows.filter_map(|r| r.ok()).collect())
    }

    /// Complete the current day of a challenge and advance the pointer
    pub fn complete_current_day(
        &self,
        challenge_id: &str,
        reflection: Option<&str>,
    ) -> Result<DayCompletion, ProgressionError> {
        let program = ChallengeProgram::get(challenge_id)
            .ok_or_else(|| ProgressionError::UnknownChallenge(challenge_id.to_string()))?;
        let state = self
            .state(program.id)?
            .ok_or_else(|| ProgressionError::NotStarted(program.id.to_string()))?;
        if state.is_complete() || state.current_day >= program.duration {
            return Err(ProgressionError::AlreadyComplete(program.id.to_string()));
        }

        let day = state.current_day + 1;
        let task = program.task_for_day(day);
        let xp = task.map(|t| t.xp).unwrap_or(0);
        let badge = task.and_then(|t| t.badge).and_then(Badge::get);
        let challenge_completed = day == program.duration;
        let now = Self::now_ms();

        let conn = self.conn.lock().expect("lock");
        conn.execute(
            r#"INSERT OR IGNORE INTO challenge_completions
               (challenge_id, day, task_title, xp, reflection, completed_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
            (program.id, day, task.map(|t| t.title), xp, reflection, now),
        )?;
        conn.execute(
            "UPDATE user_challenges SET current_day = ?1, completed_at = ?2 WHERE challenge_id = ?3",
            (day, challenge_completed.then_some(now), program.id),
        )?;

        Ok(DayCompletion {
            challenge: program,
            day,
            task,
            xp,
            badge,
            challenge_completed,
        })
    }

    /// Stored completions for a challenge, in day order
    pub fn completions(&self, challenge_id: &str) -> Result<Vec<CompletionRecord>, ProgressionError> {
        let conn = self.conn.lock().expect("lock");
        let mut stmt = conn.prepare(
            "SELECT challenge_id, day, task_title, xp, reflection, completed_at
             FROM challenge_completions WHERE challenge_id = ?1 ORDER BY day",
        )?;
        let rows = stmt.query_map([challenge_id], |r| {
            Ok(CompletionRecord {
                challenge_id: r.get(0)?,
                day: r.get(1)?,
                task_title: r.get(2)?,
                xp: r.get(3)?,
                reflection: r.get(4)?,
                completed_at: r.get(5)?,
            })
        })?;
        Ok(rows.filter_map(|r| r.ok()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::db::WellnessDb;
    use tempfile::tempdir;

    fn tracker() -> (tempfile::TempDir, ChallengeTracker) {
        let dir = tempdir().unwrap();
        let db = WellnessDb::open(&dir.path().join("test.db")).unwrap();
        (dir, ChallengeTracker::new(db.conn.clone()))
    }

    #[test]
    fn test_unknown_challenge() {
        let (_dir, tracker) = tracker();
        assert!(matches!(
            tracker.start("not_a_challenge"),
            Err(ProgressionError::UnknownChallenge(_))
        ));
    }

    #[test]
    fn test_linear_progression_to_completion() {
        let (_dir, tracker) = tracker();
        let state = tracker.start("social_navigator").unwrap();
        assert_eq!(state.current_day, 0);

        // Day 1 and 2: plain tasks
        let day1 = tracker.complete_current_day("social_navigator", None).unwrap();
        assert_eq!(day1.day, 1);
        assert_eq!(day1.xp, 20);
        assert!(day1.badge.is_none());
        assert!(!day1.challenge_completed);

        let day2 = tracker
            .complete_current_day("social_navigator", Some("boundaries at work"))
            .unwrap();
        assert_eq!(day2.day, 2);

        // Day 3 is terminal and carries the badge
        let day3 = tracker.complete_current_day("social_navigator", None).unwrap();
        assert_eq!(day3.day, 3);
        assert!(day3.challenge_completed);
        assert_eq!(day3.badge.unwrap().id, "social_navigator");

        let state = tracker.state("social_navigator").unwrap().unwrap();
        assert_eq!(state.current_day, 3);
        assert!(state.is_complete());

        // No transition past the terminal state
        assert!(matches!(
            tracker.complete_current_day("social_navigator", None),
            Err(ProgressionError::AlreadyComplete(_))
        ));
    }

    #[test]
    fn test_pointer_never_decreases() {
        let (_dir, tracker) = tracker();
        tracker.start("physiology_first").unwrap();
        let mut last = 0;
        for _ in 0..5 {
            let completion = tracker.complete_current_day("physiology_first", None).unwrap();
            assert_eq!(completion.day, last + 1);
            last = completion.day;
        }
        assert_eq!(last, 5);
    }

    #[test]
    fn test_rest_days_award_no_xp() {
        let (_dir, tracker) = tracker();
        tracker.start("foundations_theory").unwrap();

        let day1 = tracker.complete_current_day("foundations_theory", None).unwrap();
        assert_eq!(day1.xp, 30);
        let day2 = tracker.complete_current_day("foundations_theory", None).unwrap();
        assert!(day2.task.is_none());
        assert_eq!(day2.xp, 0);
    }

    #[test]
    fn test_reflection_is_stored() {
        let (_dir, tracker) = tracker();
        tracker.start("thought_detective").unwrap();
        tracker
            .complete_current_day("thought_detective", Some("caught an ANT about work"))
            .unwrap();

        let completions = tracker.completions("thought_detective").unwrap();
        assert_eq!(completions.len(), 1);
        assert_eq!(completions[0].reflection.as_deref(), Some("caught an ANT about work"));
    }

    #[test]
    fn test_double_start_rejected_and_restart_after_completion() {
        let (_dir, tracker) = tracker();
        tracker.start("social_navigator").unwrap();
        assert!(matches!(
            tracker.start("social_navigator"),
            Err(ProgressionError::AlreadyStarted(_))
        ));

        for _ in 0..3 {
            tracker.complete_current_day("social_navigator", None).unwrap();
        }
        // Completed: restart resets to day 0 and clears completions
        let state = tracker.start("social_navigator").unwrap();
        assert_eq!(state.current_day, 0);
        assert!(tracker.completions("social_navigator").unwrap().is_empty());
    }
}
