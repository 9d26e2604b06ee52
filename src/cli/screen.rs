//! Screening commands: list, show, and take self-assessments

use anyhow::{bail, Result};
use clap::Subcommand;

use bloom::catalog::screenings::{Screening, SCREENINGS};
use bloom::config::Config;
use bloom::domain::{NewWin, WinType};
use bloom::progress::XpRewards;
use bloom::scoring;

use super::{icon, open_progress, print_events};

#[derive(Subcommand)]
pub enum ScreenCommands {
    /// List available screenings
    List,

    /// Show a screening's questions and answer options
    Show { id: String },

    /// Score a screening from comma-separated answer values
    Take {
        id: String,

        /// Answer values in question order, e.g. 0,1,2,1,0,3,1
        #[arg(long, short, value_delimiter = ',')]
        answers: Vec<u32>,
    },

    /// Show past results
    History {
        /// Restrict to one screening id
        #[arg(long)]
        id: Option<String>,
    },
}

pub async fn screen_command(config: &Config, command: ScreenCommands) -> Result<()> {
    match command {
        ScreenCommands::List => {
            println!("Screenings (informational only, not a diagnosis):\n");
            for screening in SCREENINGS {
                println!(
                    "  {} - {} [{}] ({}, {} questions)",
                    screening.id,
                    screening.title,
                    screening.category.as_str(),
                    screening.time_to_complete,
                    screening.questions.len()
                );
                println!("      {} - {}", screening.description, screening.source);
            }
        }
        ScreenCommands::Show { id } => {
            let screening = find(&id)?;
            println!("{} ({})\n{}\n", screening.title, screening.source, screening.description);
            for (index, question) in screening.questions.iter().enumerate() {
                println!("  {}. {}", index + 1, question.text);
                let options: Vec<String> = question
                    .options
                    .iter()
                    .map(|o| format!("{} = {}", o.value, o.text))
                    .collect();
                println!("     [{}]", options.join(", "));
            }
            println!(
                "\nAnswer with: bloom screen take {} --answers {}",
                screening.id,
                vec!["0"; screening.questions.len()].join(",")
            );
        }
        ScreenCommands::Take { id, answers } => {
            let screening = find(&id)?;
            let progress = open_progress(config)?;

            if screening.is_trait_based() {
                let profile = scoring::trait_profile(screening, &answers)?;
                println!("{} - trait profile:\n", screening.title);
                for t in &profile {
                    println!("  {:<14} {:>2}/{}", t.trait_label, t.score, t.max);
                }
                println!("\nThis is an informal reflection tool, not a diagnostic instrument.");

                let total: u32 = profile.iter().map(|t| t.score).sum();
                progress.recorder().record_screening(screening.id, total, "Trait Profile")?;
            } else {
                let outcome = scoring::score(screening, &answers)?;
                println!("{}: {} / {}", screening.title, outcome.score, screening.max_sum());
                println!("\n{}{}", icon(config, "📋 "), outcome.band.level);
                println!("\n{}", outcome.band.interpretation);
                println!("\n{}", outcome.band.recommendation);

                progress
                    .recorder()
                    .record_screening(screening.id, outcome.score, outcome.band.level)?;
            }

            // Checking in with yourself counts as a win
            let win = progress.recorder().record_win(&NewWin::new(
                WinType::Screening,
                format!("Completed {} screening", screening.title),
                XpRewards::SCREENING,
            ))?;
            let events = progress.gamify().apply_win(win.win_type, &win.label, win.xp)?;
            println!();
            print_events(config, &events);
        }
        ScreenCommands::History { id } => {
            let progress = open_progress(config)?;
            let results = progress.query().screening_history(id.as_deref(), 20)?;
            if results.is_empty() {
                println!("No screening results yet.");
                return Ok(());
            }
            println!("Screening history:\n");
            for result in results {
                let when = chrono::DateTime::from_timestamp_millis(result.taken_at)
                    .map(|dt| dt.with_timezone(&chrono::Local).format("%Y-%m-%d").to_string())
                    .unwrap_or_default();
                println!(
                    "  {} {} - score {} - {}",
                    when, result.screening_id, result.score, result.level
                );
            }
        }
    }
    Ok(())
}

fn find(id: &str) -> Result<&'static Screening> {
    match Screening::get(id) {
        Some(screening) => Ok(screening),
        None => bail!("Unknown screening '{id}' (see `bloom screen list`)"),
    }
}
