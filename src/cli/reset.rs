//! Reset command: wipe logged data and/or gamification state

use std::io::{BufRead, Write};

use anyhow::Result;

use bloom::config::Config;

use super::open_progress;

pub async fn reset_command(config: &Config, gamification: bool, yes: bool) -> Result<()> {
    if !yes {
        let what = if gamification {
            "ALL logged data AND your XP, level, streaks, and badges"
        } else {
            "ALL logged data (wins, moods, screenings, challenge progress)"
        };
        print!("This will delete {what}. Type 'yes' to continue: ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        if line.trim() != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    let progress = open_progress(config)?;
    progress.reset_all()?;
    if gamification {
        progress.reset_gamification()?;
    }

    println!("Done.");
    Ok(())
}
