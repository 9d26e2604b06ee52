//! Progress recorder - writes user activity to the database
//!
//! Handles recording of wins, mood check-ins, screening results, and
//! favorites, keeping the daily aggregate table in sync.

use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

use super::db::WellnessDb;
use super::models::{FavoriteKind, ScreeningResultRecord};
use super::time_bucket::day_bucket;
use crate::domain::{MoodEntry, NewMood, NewWin, Win, WinType};

/// Records user activity to the database
#[derive(Clone)]
pub struct ProgressRecorder {
    db: WellnessDb,
}

impl ProgressRecorder {
    pub fn new(db: WellnessDb) -> Self {
        Self { db }
    }

    /// Record a win and return it with its assigned id
    pub fn record_win(&self, new: &NewWin) -> Result<Win> {
        let now = Utc::now().timestamp_millis();
        let day = day_bucket(now);
        let tags = join_tags(&new.tags);

        let conn = self.db.conn();
        conn.execute(
            r#"INSERT INTO wins (win_type, label, icon, xp, content, tags, created_at, day_bucket)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"#,
            rusqlite::params![
                new.win_type.as_str(),
                new.label,
                new.icon_or_default(),
                new.xp,
                new.content,
                tags,
                now,
                day,
            ],
        )?;
        let id = conn.last_insert_rowid();
        Self::bump_daily(&conn, &day, 1, new.xp, 0)?;

        Ok(Win {
            id,
            win_type: new.win_type,
            label: new.label.clone(),
            icon: new.icon_or_default().to_string(),
            xp: new.xp,
            content: new.content.clone(),
            tags: new.tags.clone(),
            created_at: now,
        })
    }

    /// Record a mood check-in and return it with its assigned id
    pub fn record_mood(&self, new: &NewMood) -> Result<MoodEntry> {
        let now = Utc::now().timestamp_millis();
        let day = day_bucket(now);

        let conn = self.db.conn();
        conn.execute(
            r#"INSERT INTO moods (mood, feelings, note, tags, created_at, day_bucket)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
            rusqlite::params![
                new.mood,
                join_tags(&new.feelings),
                new.note,
                join_tags(&new.tags),
                now,
                day,
            ],
        )?;
        let id = conn.last_insert_rowid();
        Self::bump_daily(&conn, &day, 0, 0, 1)?;

        Ok(MoodEntry {
            id,
            mood: new.mood.clone(),
            feelings: new.feelings.clone(),
            note: new.note.clone(),
            tags: new.tags.clone(),
            created_at: now,
        })
    }

    /// Record a screening result
    pub fn record_screening(&self, screening_id: &str, score: u32, level: &str) -> Result<ScreeningResultRecord> {
        let now = Utc::now().timestamp_millis();
        let day = day_bucket(now);

        let conn = self.db.conn();
        conn.execute(
            r#"INSERT INTO screening_results (screening_id, score, level, taken_at, day_bucket)
               VALUES (?1, ?2, ?3, ?4, ?5)"#,
            rusqlite::params![screening_id, score, level, now, day],
        )?;
        Ok(ScreeningResultRecord {
            id: conn.last_insert_rowid(),
            screening_id: screening_id.to_string(),
            score,
            level: level.to_string(),
            taken_at: now,
        })
    }

    /// Toggle a favorite; returns true when the item is now favorited
    pub fn toggle_favorite(&self, kind: FavoriteKind, item_id: &str) -> Result<bool> {
        let conn = self.db.conn();
        let removed = conn.execute(
            "DELETE FROM favorites WHERE kind = ?1 AND item_id = ?2",
            (kind.as_str(), item_id),
        )?;
        if removed > 0 {
            return Ok(false);
        }
        conn.execute(
            "INSERT INTO favorites (kind, item_id, added_at) VALUES (?1, ?2, ?3)",
            (kind.as_str(), item_id, Utc::now().timestamp_millis()),
        )?;
        Ok(true)
    }

    /// Favorited item ids of a kind, oldest first
    pub fn favorites(&self, kind: FavoriteKind) -> Result<Vec<String>> {
        let conn = self.db.conn();
        let mut stmt =
            conn.prepare("SELECT item_id FROM favorites WHERE kind = ?1 ORDER BY added_at")?;
        let ids: Vec<String> = stmt
            .query_map([kind.as_str()], |r| r.get(0))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(ids)
    }

    /// Store a coach-generated quiz payload
    pub fn store_generated_quiz(&self, id: &str, topic: &str, payload: &str) -> Result<()> {
        let conn = self.db.conn();
        conn.execute(
            "INSERT OR REPLACE INTO generated_quizzes (id, topic, payload, created_at) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![id, topic, payload, Utc::now().timestamp_millis()],
        )?;
        Ok(())
    }

    fn bump_daily(conn: &Connection, day: &str, wins: u32, xp: u32, moods: u32) -> Result<()> {
        let now = Utc::now().timestamp_millis();
        conn.execute(
            r#"INSERT INTO daily_activity (day_bucket, total_wins, total_xp, moods_logged, last_updated)
               VALUES (?1, ?2, ?3, ?4, ?5)
               ON CONFLICT(day_bucket) DO UPDATE SET
                   total_wins = total_wins + ?2, total_xp = total_xp + ?3,
                   moods_logged = moods_logged + ?4, last_updated = ?5"#,
            rusqlite::params![day, wins, xp, moods, now],
        )?;
        Ok(())
    }
}

/// Tags are stored as a comma-joined string; empty becomes NULL-ish ""
fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}

/// Split a stored tag string back into tags
pub(crate) fn split_tags(raw: Option<String>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Fixed XP for a manually logged win type, used when the CLI does not
/// receive an explicit amount
pub fn default_xp_for(win_type: WinType) -> u32 {
    use crate::progress::gamify::XpRewards;
    match win_type {
        WinType::Activity => XpRewards::ACTIVITY,
        WinType::Mood => XpRewards::MOOD_LOG,
        WinType::Journal => XpRewards::JOURNAL,
        WinType::Gratitude => XpRewards::GRATITUDE,
        WinType::Screening => XpRewards::SCREENING,
        // Catalog-driven types carry their own XP
        WinType::SelfCare | WinType::ChallengeTask => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn recorder() -> (tempfile::TempDir, ProgressRecorder) {
        let dir = tempdir().unwrap();
        let db = WellnessDb::open(&dir.path().join("test.db")).unwrap();
        (dir, ProgressRecorder::new(db))
    }

    #[test]
    fn test_record_win_assigns_id() {
        let (_dir, recorder) = recorder();
        let win = recorder
            .record_win(&NewWin::new(WinType::Activity, "Morning walk", 5))
            .unwrap();
        assert!(win.id > 0);
        assert_eq!(win.icon, "⚡");
    }

    #[test]
    fn test_record_mood_roundtrips_feelings() {
        let (_dir, recorder) = recorder();
        let entry = recorder
            .record_mood(
                &NewMood::new("anxious")
                    .with_feelings(vec!["worried".into(), "stressed".into()])
                    .with_note("big meeting tomorrow"),
            )
            .unwrap();
        assert_eq!(entry.feelings.len(), 2);
        assert_eq!(split_tags(Some("worried,stressed".into())), entry.feelings);
    }

    #[test]
    fn test_toggle_favorite() {
        let (_dir, recorder) = recorder();
        assert!(recorder.toggle_favorite(FavoriteKind::SelfCare, "sc_walk_5").unwrap());
        assert_eq!(
            recorder.favorites(FavoriteKind::SelfCare).unwrap(),
            vec!["sc_walk_5"]
        );
        // Toggle off
        assert!(!recorder.toggle_favorite(FavoriteKind::SelfCare, "sc_walk_5").unwrap());
        assert!(recorder.favorites(FavoriteKind::SelfCare).unwrap().is_empty());
    }

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags(None), Vec::<String>::new());
        assert_eq!(split_tags(Some("".into())), Vec::<String>::new());
        assert_eq!(split_tags(Some("a,b".into())), vec!["a", "b"]);
    }
}
