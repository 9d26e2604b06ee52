//! Gamification layer: XP, levels, streaks, and badges
//!
//! Pure math lives in `levels` and `streaks`; `manager` applies effects to
//! the database and emits events.

mod levels;
mod manager;
mod streaks;

pub use levels::{award, level_for_xp, ProfileStats, XpAward, XpRewards, XP_PER_LEVEL};
pub use manager::{GamificationManager, LevelUp, UnlockedBadge, WellnessEvent};
pub use streaks::{StreakInfo, StreakType, Streaks};
