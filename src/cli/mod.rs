//! CLI command implementations

pub mod challenge;
pub mod coach;
pub mod init;
pub mod mood;
pub mod profile;
pub mod report;
pub mod reset;
pub mod screen;
pub mod selfcare;
pub mod verify;
pub mod win;

use bloom::config::Config;
use bloom::progress::{ProgressManager, WellnessEvent};

/// Open the progress manager at the configured database path
pub fn open_progress(config: &Config) -> anyhow::Result<ProgressManager> {
    ProgressManager::with_path(&config.db_path())
}

/// Print gamification events produced by a recorded win
pub fn print_events(config: &Config, events: &[WellnessEvent]) {
    for event in events {
        match event {
            WellnessEvent::XpAwarded { amount, reason } => {
                println!("  +{amount} XP - {reason}");
            }
            WellnessEvent::LevelUp(level_up) => {
                println!(
                    "  {}Level up! {} -> {}",
                    icon(config, "🎉 "),
                    level_up.old_level,
                    level_up.new_level
                );
            }
            WellnessEvent::StreakExtended { streak_type, count } => {
                println!(
                    "  {}{}: {count} day{}",
                    icon(config, "🔥 "),
                    streak_type.label(),
                    if *count == 1 { "" } else { "s" }
                );
            }
            WellnessEvent::BadgeUnlocked(unlocked) => {
                println!(
                    "  {}Badge unlocked: {} - {}",
                    icon(config, &format!("{} ", unlocked.badge.icon)),
                    unlocked.badge.label,
                    unlocked.badge.description
                );
            }
        }
    }
}

/// Emoji prefix, or nothing when emoji output is disabled
pub fn icon<'a>(config: &Config, emoji: &'a str) -> &'a str {
    if config.settings.emoji { emoji } else { "" }
}
