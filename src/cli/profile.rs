//! Profile command: XP, level, streaks, badges

use anyhow::Result;

use bloom::catalog::badges::{Badge, BADGES};
use bloom::config::Config;
use bloom::progress::XP_PER_LEVEL;

use super::{icon, open_progress};

pub async fn profile_command(config: &Config) -> Result<()> {
    let progress = open_progress(config)?;
    let gamify = progress.gamify();

    let profile = gamify.profile()?;
    println!(
        "Level {} - {} XP ({}/{} into this level)",
        profile.level, profile.total_xp, profile.xp_into_level, XP_PER_LEVEL
    );
    println!("{}", progress_bar(profile.progress_to_next()));

    let streaks = gamify.streaks()?;
    println!();
    for (label, info) in [("Mood streak", &streaks.mood), ("Win streak", &streaks.win)] {
        if info.is_active() {
            println!(
                "  {}{label}: {} day{} (best {})",
                icon(config, "🔥 "),
                info.current,
                if info.current == 1 { "" } else { "s" },
                info.best
            );
        } else {
            println!("  {label}: inactive (best {})", info.best);
        }
    }

    let unlocked = gamify.unlocked_badge_ids()?;
    println!("\nBadges ({}/{}):", unlocked.len(), BADGES.len());
    if unlocked.is_empty() {
        println!("  None yet - finish a challenge to earn your first badge.");
    }
    for id in &unlocked {
        if let Some(badge) = Badge::get(id) {
            println!(
                "  {}{} - {}",
                icon(config, &format!("{} ", badge.icon)),
                badge.label,
                badge.description
            );
        }
    }

    Ok(())
}

/// A simple 20-slot progress bar toward the next level
fn progress_bar(progress: f32) -> String {
    let filled = (progress.clamp(0.0, 1.0) * 20.0).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(progress_bar(1.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(progress_bar(0.5), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
    }
}
