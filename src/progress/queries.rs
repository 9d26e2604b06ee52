//! Report queries for reading aggregated progress
//!
//! Read-side counterpart to the recorder: summaries, recent activity, and
//! screening history for the `report` and `profile` commands.

use anyhow::Result;

use super::db::WellnessDb;
use super::models::{DailyActivityView, ScreeningResultRecord, TimeRange, WellnessSummary};
use super::recorder::split_tags;
use super::time_bucket::bucket_days_ago;
use crate::domain::{MoodEntry, Win, WinType};

/// Query interface for progress data
pub struct ProgressQuery {
    db: WellnessDb,
}

impl ProgressQuery {
    pub fn new(db: WellnessDb) -> Self {
        Self { db }
    }

    /// Complete summary for the report view
    pub fn summary(&self, range: TimeRange) -> Result<WellnessSummary> {
        let cutoff = cutoff_day(range);
        let conn = self.db.conn();

        let (total_wins, total_xp_earned) = match cutoff.as_deref() {
            Some(c) => conn.query_row(
                "SELECT COUNT(*), COALESCE(SUM(xp), 0) FROM wins WHERE day_bucket >= ?1",
                [c],
                |r| Ok((r.get::<_, u64>(0)?, r.get::<_, u64>(1)?)),
            )?,
            None => conn.query_row(
                "SELECT COUNT(*), COALESCE(SUM(xp), 0) FROM wins",
                [],
                |r| Ok((r.get::<_, u64>(0)?, r.get::<_, u64>(1)?)),
            )?,
        };

        let mut wins_by_type = Vec::new();
        {
            let (sql, param) = match cutoff.as_deref() {
                Some(c) => (
                    "SELECT win_type, COUNT(*) FROM wins WHERE day_bucket >= ?1
                     GROUP BY win_type ORDER BY COUNT(*) DESC",
                    Some(c),
                ),
                None => (
                    "SELECT win_type, COUNT(*) FROM wins GROUP BY win_type ORDER BY COUNT(*) DESC",
                    None,
                ),
            };
            let mut stmt = conn.prepare(sql)?;
            let mapper = |r: &rusqlite::Row<'_>| Ok((r.get::<_, String>(0)?, r.get::<_, u64>(1)?));
            let rows = match param {
                Some(c) => stmt.query_map([c], mapper)?,
                None => stmt.query_map([], mapper)?,
            };
            for row in rows {
                wins_by_type.push(row?);
            }
        }

        let mut mood_counts = Vec::new();
        {
            let (sql, param) = match cutoff.as_deref() {
                Some(c) => (
                    "SELECT mood, COUNT(*) FROM moods WHERE day_bucket >= ?1
                     GROUP BY mood ORDER BY COUNT(*) DESC",
                    Some(c),
                ),
                None => (
                    "SELECT mood, COUNT(*) FROM moods GROUP BY mood ORDER BY COUNT(*) DESC",
                    None,
                ),
            };
            let mut stmt = conn.prepare(sql)?;
            let mapper = |r: &rusqlite::Row<'_>| Ok((r.get::<_, String>(0)?, r.get::<_, u64>(1)?));
            let rows = match param {
                Some(c) => stmt.query_map([c], mapper)?,
                None => stmt.query_map([], mapper)?,
            };
            for row in rows {
                mood_counts.push(row?);
            }
        }

        let mut daily = Vec::new();
        {
            let (sql, param) = match cutoff.as_deref() {
                Some(c) => (
                    "SELECT day_bucket, total_wins, total_xp, moods_logged
                     FROM daily_activity WHERE day_bucket >= ?1 ORDER BY day_bucket",
                    Some(c),
                ),
                None => (
                    "SELECT day_bucket, total_wins, total_xp, moods_logged
                     FROM daily_activity ORDER BY day_bucket",
                    None,
                ),
            };
            let mut stmt = conn.prepare(sql)?;
            let mapper = |r: &rusqlite::Row<'_>| {
                Ok(DailyActivityView {
                    day: r.get(0)?,
                    total_wins: r.get(1)?,
                    total_xp: r.get(2)?,
                    moods_logged: r.get(3)?,
                })
            };
            let rows = match param {
                Some(c) => stmt.query_map([c], mapper)?,
                None => stmt.query_map([], mapper)?,
            };
            for row in rows {
                daily.push(row?);
            }
        }
        drop(conn);

        let screenings = self.screening_history(None, 10)?;

        Ok(WellnessSummary {
            total_wins,
            total_xp_earned,
            wins_by_type,
            mood_counts,
            daily,
            screenings,
        })
    }

    /// Most recent wins, newest first
    pub fn recent_wins(&self, limit: usize) -> Result<Vec<Win>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            "SELECT id, win_type, label, icon, xp, content, tags, created_at
             FROM wins ORDER BY created_at DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map([limit], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, Option<String>>(3)?,
                r.get::<_, u32>(4)?,
                r.get::<_, Option<String>>(5)?,
                r.get::<_, Option<String>>(6)?,
                r.get::<_, i64>(7)?,
            ))
        })?;

        let mut wins = Vec::new();
        for row in rows {
            let (id, win_type, label, icon, xp, content, tags, created_at) = row?;
            let Some(win_type) = WinType::from_str(&win_type) else {
                continue; // Unknown type from a future version; skip
            };
            wins.push(Win {
                id,
                win_type,
                label,
                icon: icon.unwrap_or_else(|| win_type.icon().to_string()),
                xp,
                content,
                tags: split_tags(tags),
                created_at,
            });
        }
        Ok(wins)
    }

    /// Most recent mood check-ins, newest first
    pub fn recent_moods(&self, limit: usize) -> Result<Vec<MoodEntry>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            "SELECT id, mood, feelings, note, tags, created_at
             FROM moods ORDER BY created_at DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map([limit], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, Option<String>>(2)?,
                r.get::<_, Option<String>>(3)?,
                r.get::<_, Option<String>>(4)?,
                r.get::<_, i64>(5)?,
            ))
        })?;

        let mut moods = Vec::new();
        for row in rows {
            let (id, mood, feelings, note, tags, created_at) = row?;
            moods.push(MoodEntry {
                id,
                mood,
                feelings: split_tags(feelings),
                note,
                tags: split_tags(tags),
                created_at,
            });
        }
        Ok(moods)
    }

    /// Screening history, optionally restricted to one screening
    pub fn screening_history(
        &self,
        screening_id: Option<&str>,
        limit: usize,
    ) -> Result<Vec<ScreeningResultRecord>> {
        let conn = self.db.conn();
        let mapper = |r: &rusqlite::Row<'_>| {
            Ok(ScreeningResultRecord {
                id: r.get(0)?,
                screening_id: r.get(1)?,
                score: r.get(2)?,
                level: r.get(3)?,
                taken_at: r.get(4)?,
            })
        };
        let mut results = Vec::new();
        match screening_id {
            Some(id) => {
                let mut stmt = conn.prepare(
                    "SELECT id, screening_id, score, level, taken_at FROM screening_results
                     WHERE screening_id = ?1 ORDER BY taken_at DESC LIMIT ?2",
                )?;
                for row in stmt.query_map(rusqlite::params![id, limit], mapper)? {
                    results.push(row?);
                }
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT id, screening_id, score, level, taken_at FROM screening_results
                     ORDER BY taken_at DESC LIMIT ?1",
                )?;
                for row in stmt.query_map([limit], mapper)? {
                    results.push(row?);
                }
            }
        }
        Ok(results)
    }
}

fn cutoff_day(range: TimeRange) -> Option<String> {
    range.days().map(bucket_days_ago)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewMood, NewWin};
    use crate::progress::recorder::ProgressRecorder;
    use tempfile::tempdir;

    fn setup() -> (tempfile::TempDir, ProgressRecorder, ProgressQuery) {
        let dir = tempdir().unwrap();
        let db = WellnessDb::open(&dir.path().join("test.db")).unwrap();
        (dir, ProgressRecorder::new(db.clone()), ProgressQuery::new(db))
    }

    #[test]
    fn test_summary_roundtrip() {
        let (_dir, recorder, query) = setup();

        recorder.record_win(&NewWin::new(WinType::Activity, "Run", 5)).unwrap();
        recorder
            .record_win(&NewWin::new(WinType::Gratitude, "Evening gratitude", 10))
            .unwrap();
        recorder.record_mood(&NewMood::new("happy")).unwrap();
        recorder.record_screening("anxiety-gad7", 6, "Mild Anxiety").unwrap();

        let summary = query.summary(TimeRange::Last7Days).unwrap();
        assert_eq!(summary.total_wins, 2);
        assert_eq!(summary.total_xp_earned, 15);
        assert_eq!(summary.mood_counts, vec![("happy".to_string(), 1)]);
        assert_eq!(summary.daily.len(), 1);
        assert_eq!(summary.daily[0].total_wins, 2);
        assert_eq!(summary.daily[0].moods_logged, 1);
        assert_eq!(summary.screenings.len(), 1);
        assert_eq!(summary.screenings[0].level, "Mild Anxiety");
    }

    #[test]
    fn test_recent_wins_order_and_tags() {
        let (_dir, recorder, query) = setup();
        recorder.record_win(&NewWin::new(WinType::Activity, "First", 5)).unwrap();
        recorder
            .record_win(
                &NewWin::new(WinType::Journal, "Second", 15).with_tags(vec!["reflection".into()]),
            )
            .unwrap();

        let wins = query.recent_wins(10).unwrap();
        assert_eq!(wins.len(), 2);
        assert_eq!(wins[0].label, "Second");
        assert_eq!(wins[0].tags, vec!["reflection"]);
    }

    #[test]
    fn test_screening_history_filter() {
        let (_dir, recorder, query) = setup();
        recorder.record_screening("anxiety-gad7", 6, "Mild Anxiety").unwrap();
        recorder
            .record_screening("depression-phq9", 12, "Moderate Depression")
            .unwrap();

        let all = query.screening_history(None, 10).unwrap();
        assert_eq!(all.len(), 2);
        let gad = query.screening_history(Some("anxiety-gad7"), 10).unwrap();
        assert_eq!(gad.len(), 1);
        assert_eq!(gad[0].score, 6);
    }
}
