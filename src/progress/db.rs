//! SQLite database connection and schema management for user progress
//!
//! Manages the `~/.bloom/wellness.db` database with automatic schema
//! migration. Everything the user logs lives here; the catalogs stay in
//! code.

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::config::Config;

/// Database wrapper shared by the recorder, queries, and gamification
#[derive(Clone)]
pub struct WellnessDb {
    pub(crate) conn: Arc<Mutex<Connection>>,
}

impl WellnessDb {
    /// Open or create the database at the default location (~/.bloom/wellness.db)
    pub fn open_default() -> Result<Self> {
        let db_path = Config::global_config_dir().join("wellness.db");
        Self::open(&db_path)
    }

    /// Open or create the database at a specific path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data dir: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open wellness db: {}", path.display()))?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Get a reference to the connection (for queries)
    pub fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().expect("Wellness DB lock poisoned")
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(SCHEMA_SQL)?;
        drop(conn);
        self.run_migrations()?;
        Ok(())
    }

    /// Run any pending migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn();

        let version: i32 = conn
            .query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |r| r.get(0))
            .unwrap_or(0);

        // Migration 2: favorites table (self-care favorites came later)
        if version < 2 {
            conn.execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS favorites (
                    kind TEXT NOT NULL,
                    item_id TEXT NOT NULL,
                    added_at INTEGER NOT NULL,
                    PRIMARY KEY (kind, item_id)
                );
                "#,
            )?;
            conn.execute("INSERT OR REPLACE INTO schema_version VALUES (2)", [])?;
        }

        // Migration 3: coach-generated quizzes are kept alongside results
        if version < 3 {
            conn.execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS generated_quizzes (
                    id TEXT PRIMARY KEY,
                    topic TEXT NOT NULL,
                    payload TEXT NOT NULL,
                    created_at INTEGER NOT NULL
                );
                "#,
            )?;
            conn.execute("INSERT OR REPLACE INTO schema_version VALUES (3)", [])?;
        }

        Ok(())
    }

    /// Delete all logged data (wins, moods, screenings, challenge progress)
    /// Note: This does NOT reset XP/badges - use reset_gamification() for that
    pub fn reset_all(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(
            r#"
            DELETE FROM wins;
            DELETE FROM moods;
            DELETE FROM screening_results;
            DELETE FROM user_challenges;
            DELETE FROM challenge_completions;
            DELETE FROM daily_activity;
            DELETE FROM favorites;
            DELETE FROM generated_quizzes;
            "#,
        )?;
        Ok(())
    }

    /// Delete all gamification data (XP, level, streaks, badges)
    pub fn reset_gamification(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(
            r#"
            DELETE FROM streaks;
            DELETE FROM badges;
            UPDATE user_profile SET xp = 0, level = 1 WHERE id = 1;
            "#,
        )?;
        Ok(())
    }
}

/// SQL schema for the wellness database
const SCHEMA_SQL: &str = r#"
-- Logged wins (one row per win, append-only)
CREATE TABLE IF NOT EXISTS wins (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    win_type TEXT NOT NULL,
    label TEXT NOT NULL,
    icon TEXT,
    xp INTEGER NOT NULL DEFAULT 0,
    content TEXT,
    tags TEXT,
    created_at INTEGER NOT NULL,
    day_bucket TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_wins_day ON wins(day_bucket);
CREATE INDEX IF NOT EXISTS idx_wins_type ON wins(win_type);
CREATE INDEX IF NOT EXISTS idx_wins_created_at ON wins(created_at);

-- Mood check-ins
CREATE TABLE IF NOT EXISTS moods (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    mood TEXT NOT NULL,
    feelings TEXT,
    note TEXT,
    tags TEXT,
    created_at INTEGER NOT NULL,
    day_bucket TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_moods_day ON moods(day_bucket);
CREATE INDEX IF NOT EXISTS idx_moods_mood ON moods(mood);

-- User profile (XP, level) - singleton row
CREATE TABLE IF NOT EXISTS user_profile (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    xp INTEGER DEFAULT 0,
    level INTEGER DEFAULT 1
);
INSERT OR IGNORE INTO user_profile (id) VALUES (1);

-- Streak tracking (mood check-in streak, daily win streak)
CREATE TABLE IF NOT EXISTS streaks (
    streak_type TEXT PRIMARY KEY,
    current_count INTEGER DEFAULT 0,
    best_count INTEGER DEFAULT 0,
    last_activity_day TEXT,
    updated_at INTEGER
);

-- Unlocked badges
CREATE TABLE IF NOT EXISTS badges (
    id TEXT PRIMARY KEY,
    unlocked_at INTEGER NOT NULL
);

-- One row per started challenge; current_day advances 0..=duration
CREATE TABLE IF NOT EXISTS user_challenges (
    challenge_id TEXT PRIMARY KEY,
    current_day INTEGER NOT NULL DEFAULT 0,
    started_at INTEGER NOT NULL,
    completed_at INTEGER
);

-- One row per completed challenge day
CREATE TABLE IF NOT EXISTS challenge_completions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    challenge_id TEXT NOT NULL,
    day INTEGER NOT NULL,
    task_title TEXT,
    xp INTEGER NOT NULL DEFAULT 0,
    reflection TEXT,
    completed_at INTEGER NOT NULL,
    UNIQUE (challenge_id, day)
);
CREATE INDEX IF NOT EXISTS idx_completions_challenge ON challenge_completions(challenge_id);

-- Screening results
CREATE TABLE IF NOT EXISTS screening_results (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    screening_id TEXT NOT NULL,
    score INTEGER NOT NULL,
    level TEXT NOT NULL,
    taken_at INTEGER NOT NULL,
    day_bucket TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_results_screening ON screening_results(screening_id);

-- Daily aggregates (for fast report queries)
CREATE TABLE IF NOT EXISTS daily_activity (
    day_bucket TEXT PRIMARY KEY,
    total_wins INTEGER DEFAULT 0,
    total_xp INTEGER DEFAULT 0,
    moods_logged INTEGER DEFAULT 0,
    last_updated INTEGER NOT NULL
);

-- Favorites (self-care activities, wellness skills)
CREATE TABLE IF NOT EXISTS favorites (
    kind TEXT NOT NULL,
    item_id TEXT NOT NULL,
    added_at INTEGER NOT NULL,
    PRIMARY KEY (kind, item_id)
);

-- Coach-generated quizzes, stored as JSON payloads
CREATE TABLE IF NOT EXISTS generated_quizzes (
    id TEXT PRIMARY KEY,
    topic TEXT NOT NULL,
    payload TEXT NOT NULL,
    created_at INTEGER NOT NULL
);

-- Schema version
CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY);
INSERT OR IGNORE INTO schema_version VALUES (3);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_and_init() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test_wellness.db");
        let db = WellnessDb::open(&db_path).unwrap();

        let conn = db.conn();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap();
        let tables: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"wins".to_string()));
        assert!(tables.contains(&"moods".to_string()));
        assert!(tables.contains(&"user_challenges".to_string()));
        assert!(tables.contains(&"favorites".to_string()));

        // Profile singleton exists
        let xp: u32 = conn
            .query_row("SELECT xp FROM user_profile WHERE id = 1", [], |r| r.get(0))
            .unwrap();
        assert_eq!(xp, 0);
    }

    #[test]
    fn test_reopen_is_idempotent() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test_wellness.db");
        drop(WellnessDb::open(&db_path).unwrap());
        // Second open must not fail or duplicate the singleton
        let db = WellnessDb::open(&db_path).unwrap();
        let count: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM user_profile", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
