//! Win commands: log and list wins

use anyhow::{bail, Result};
use chrono::{DateTime, Local};
use clap::Subcommand;

use bloom::config::Config;
use bloom::domain::{NewWin, WinType};
use bloom::progress::default_xp_for;

use super::{open_progress, print_events};

#[derive(Subcommand)]
pub enum WinCommands {
    /// Log a win
    Add {
        /// What you did
        label: String,

        /// Win type: activity, journal, gratitude
        #[arg(long, short = 't', default_value = "activity")]
        win_type: String,

        /// XP to award (defaults per win type)
        #[arg(long)]
        xp: Option<u32>,

        /// Longer text (journal body, gratitude entry)
        #[arg(long)]
        content: Option<String>,

        /// Comma-separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// List recent wins
    List {
        /// Number of wins to show
        #[arg(long, short = 'n', default_value_t = 20)]
        limit: usize,
    },
}

pub async fn win_command(config: &Config, command: WinCommands) -> Result<()> {
    match command {
        WinCommands::Add { label, win_type, xp, content, tags } => {
            let Some(win_type) = WinType::from_str(&win_type) else {
                bail!(
                    "Unknown win type '{win_type}' (expected one of: {})",
                    WinType::all()
                        .iter()
                        .map(|t| t.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            };
            if matches!(win_type, WinType::Mood) {
                bail!("Use `bloom mood log` for mood check-ins");
            }

            let xp = xp.unwrap_or_else(|| default_xp_for(win_type));
            let mut new = NewWin::new(win_type, label, xp).with_tags(tags);
            if let Some(content) = content {
                new = new.with_content(content);
            }

            let progress = open_progress(config)?;
            let win = progress.recorder().record_win(&new)?;
            let events = progress.gamify().apply_win(win.win_type, &win.label, win.xp)?;

            println!("Logged: {} {} (+{} XP)", win.icon, win.label, win.xp);
            print_events(config, &events);
        }
        WinCommands::List { limit } => {
            let progress = open_progress(config)?;
            let wins = progress.query().recent_wins(limit)?;
            if wins.is_empty() {
                println!("No wins yet. Log one with `bloom win add \"...\"`.");
                return Ok(());
            }

            println!("Recent wins ({}):\n", wins.len());
            for win in wins {
                let when = DateTime::from_timestamp_millis(win.created_at)
                    .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                println!("  {} [{}] {} {} (+{} XP)", when, win.win_type, win.icon, win.label, win.xp);
                if let Some(content) = &win.content {
                    println!("      {content}");
                }
            }
        }
    }
    Ok(())
}
