//! Gamification manager
//!
//! Applies the gamification effects of a recorded win: streak updates, XP
//! awards, level-up detection, and badge unlocks. Returns events for the
//! CLI to display; nothing here prints.

use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use rusqlite::Connection;

use super::levels::{self, ProfileStats};
use super::streaks::{StreakInfo, StreakType, Streaks};
use crate::catalog::badges::Badge;
use crate::domain::WinType;
use crate::progress::time_bucket::today_bucket;

/// A badge that was just unlocked
#[derive(Debug, Clone)]
pub struct UnlockedBadge {
    pub badge: &'static Badge,
    pub unlocked_at: i64,
}

/// A level-up event
#[derive(Debug, Clone)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}

/// Events produced while applying a win's effects
#[derive(Debug, Clone)]
pub enum WellnessEvent {
    XpAwarded { amount: u32, reason: String },
    LevelUp(LevelUp),
    StreakExtended { streak_type: StreakType, count: u32 },
    BadgeUnlocked(UnlockedBadge),
}

/// Main manager for the gamification layer
pub struct GamificationManager {
    conn: Arc<Mutex<Connection>>,
}

impl GamificationManager {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn now_ms() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    // ========================================
    // XP & LEVEL
    // ========================================

    /// Current profile stats
    pub fn profile(&self) -> Result<ProfileStats> {
        let conn = self.conn.lock().expect("lock");
        let xp: u32 = conn.query_row("SELECT xp FROM user_profile WHERE id = 1", [], |r| r.get(0))?;
        Ok(ProfileStats::new(xp))
    }

    /// Award XP and report a level-up if one happened
    pub fn award_xp(&self, amount: u32) -> Result<Option<LevelUp>> {
        let old = self.profile()?;
        let applied = levels::award(old.total_xp, amount);

        let conn = self.conn.lock().expect("lock");
        conn.execute(
            "UPDATE user_profile SET xp = ?1, level = ?2 WHERE id = 1",
            (applied.new_total, applied.new_level),
        )?;
        drop(conn);

        if applied.leveled_up {
            Ok(Some(LevelUp {
                old_level: old.level,
                new_level: applied.new_level,
            }))
        } else {
            Ok(None)
        }
    }

    // ========================================
    // STREAKS
    // ========================================

    /// Current streak data
    pub fn streaks(&self) -> Result<Streaks> {
        let conn = self.conn.lock().expect("lock");
        let mut streaks = Streaks::default();
        for kind in [StreakType::Mood, StreakType::Win] {
            if let Ok(row) = conn.query_row(
                "SELECT current_count, best_count, last_activity_day FROM streaks WHERE streak_type = ?1",
                [kind.as_str()],
                |r| Ok((r.get::<_, u32>(0)?, r.get::<_, u32>(1)?, r.get::<_, Option<String>>(2)?)),
            ) {
                let info = StreakInfo {
                    current: row.0,
                    best: row.1,
                    last_activity_day: row.2,
                };
                match kind {
                    StreakType::Mood => streaks.mood = info,
                    StreakType::Win => streaks.win = info,
                }
            }
        }
        Ok(streaks)
    }

    /// Update a streak for an activity today; Some(count) when it moved
    fn update_streak(&self, kind: StreakType) -> Result<Option<u32>> {
        let streaks = self.streaks()?;
        let info = match kind {
            StreakType::Mood => &streaks.mood,
            StreakType::Win => &streaks.win,
        };
        if !info.can_extend() {
            return Ok(None); // Already counted today
        }

        let new_count = info.next_count();
        let new_best = new_count.max(info.best);
        let today = today_bucket();
        let now = Self::now_ms();

        let conn = self.conn.lock().expect("lock");
        conn.execute(
            r#"
            INSERT INTO streaks (streak_type, current_count, best_count, last_activity_day, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(streak_type) DO UPDATE SET
                current_count = ?2, best_count = ?3, last_activity_day = ?4, updated_at = ?5
            "#,
            (kind.as_str(), new_count, new_best, &today, now),
        )?;

        Ok(Some(new_count))
    }

    // ========================================
    // BADGES
    // ========================================

    /// Ids of all unlocked badges
    pub fn unlocked_badge_ids(&self) -> Result<Vec<String>> {
        let conn = self.conn.lock().expect("lock");
        let mut stmt = conn.prepare("SELECT id FROM badges ORDER BY unlocked_at")?;
        let ids: Vec<String> = stmt
            .query_map([], |row| row.get(0))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(ids)
    }

    /// Unlock a badge; None if it was already unlocked
    pub fn unlock_badge(&self, badge: &'static Badge) -> Result<Option<UnlockedBadge>> {
        let now = Self::now_ms();
        let conn = self.conn.lock().expect("lock");
        let inserted = conn.execute(
            "INSERT OR IGNORE INTO badges (id, unlocked_at) VALUES (?1, ?2)",
            (badge.id, now),
        )?;
        drop(conn);

        if inserted == 0 {
            return Ok(None);
        }
        Ok(Some(UnlockedBadge { badge, unlocked_at: now }))
    }

    // ========================================
    // MAIN ENTRY POINT
    // ========================================

    /// Apply the gamification effects of a just-recorded win
    pub fn apply_win(&self, win_type: WinType, label: &str, xp: u32) -> Result<Vec<WellnessEvent>> {
        let mut events = Vec::new();

        if let Some(count) = self.update_streak(StreakType::Win)? {
            events.push(WellnessEvent::StreakExtended {
                streak_type: StreakType::Win,
                count,
            });
        }
        if win_type == WinType::Mood {
            if let Some(count) = self.update_streak(StreakType::Mood)? {
                events.push(WellnessEvent::StreakExtended {
                    streak_type: StreakType::Mood,
                    count,
                });
            }
        }

        if xp > 0 {
            events.push(WellnessEvent::XpAwarded {
                amount: xp,
                reason: label.to_string(),
            });
            if let Some(level_up) = self.award_xp(xp)? {
                events.push(WellnessEvent::LevelUp(level_up));
            }
        }

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::db::WellnessDb;
    use tempfile::tempdir;

    fn manager() -> (tempfile::TempDir, GamificationManager) {
        let dir = tempdir().unwrap();
        let db = WellnessDb::open(&dir.path().join("test.db")).unwrap();
        let conn = db.conn.clone();
        (dir, GamificationManager::new(conn))
    }

    #[test]
    fn test_award_xp_and_level_up() {
        let (_dir, manager) = manager();

        assert!(manager.award_xp(50).unwrap().is_none());
        let level_up = manager.award_xp(60).unwrap().expect("should level up");
        assert_eq!(level_up.old_level, 1);
        assert_eq!(level_up.new_level, 2);

        let profile = manager.profile().unwrap();
        assert_eq!(profile.total_xp, 110);
        assert_eq!(profile.level, 2);
    }

    #[test]
    fn test_apply_win_emits_events() {
        let (_dir, manager) = manager();

        let events = manager.apply_win(WinType::Mood, "Mood check-in", 10).unwrap();
        // First win of the day: win streak + mood streak + xp
        assert!(events.iter().any(|e| matches!(
            e,
            WellnessEvent::StreakExtended { streak_type: StreakType::Win, count: 1 }
        )));
        assert!(events.iter().any(|e| matches!(
            e,
            WellnessEvent::StreakExtended { streak_type: StreakType::Mood, count: 1 }
        )));
        assert!(events.iter().any(|e| matches!(e, WellnessEvent::XpAwarded { amount: 10, .. })));

        // Second win the same day: no further streak events
        let events = manager.apply_win(WinType::Activity, "Run", 5).unwrap();
        assert!(!events
            .iter()
            .any(|e| matches!(e, WellnessEvent::StreakExtended { .. })));
    }

    #[test]
    fn test_unlock_badge_once() {
        let (_dir, manager) = manager();
        let badge = Badge::get("flow_master").unwrap();

        assert!(manager.unlock_badge(badge).unwrap().is_some());
        assert!(manager.unlock_badge(badge).unwrap().is_none());
        assert_eq!(manager.unlocked_badge_ids().unwrap(), vec!["flow_master"]);
    }
}
