//! Challenge commands: browse programs, start one, complete days

use anyhow::Result;
use clap::Subcommand;

use bloom::catalog::challenges::{ChallengeProgram, CHALLENGES};
use bloom::config::Config;
use bloom::domain::{NewWin, WinType};
use bloom::progress::WellnessEvent;

use super::{icon, open_progress, print_events};

#[derive(Subcommand)]
pub enum ChallengeCommands {
    /// List all challenge programs
    List,

    /// Show a program's phases and tasks
    Show { id: String },

    /// Start a challenge
    Start { id: String },

    /// Complete the current day of a challenge
    Done {
        id: String,

        /// Reflection text to store with the completion
        #[arg(long, short)]
        reflection: Option<String>,
    },

    /// Show progress for started challenges
    Status,
}

pub async fn challenge_command(config: &Config, command: ChallengeCommands) -> Result<()> {
    match command {
        ChallengeCommands::List => {
            println!("Challenge programs:\n");
            for program in CHALLENGES {
                println!(
                    "  {} - {} ({} days, {})",
                    program.id,
                    program.title,
                    program.duration,
                    program.group.label()
                );
                println!("      {}", program.description);
            }
        }
        ChallengeCommands::Show { id } => {
            let Some(program) = ChallengeProgram::get(&id) else {
                anyhow::bail!("Unknown challenge '{id}' (see `bloom challenge list`)");
            };
            println!("{} - {} days - {}", program.title, program.duration, program.category);
            println!("{}\n", program.description);
            for phase in program.phases {
                println!(
                    "Phase {}: {} (days {}-{}) - {}",
                    phase.id, phase.title, phase.days.0, phase.days.1, phase.description
                );
                for day in phase.days.0..=phase.days.1 {
                    match program.task_for_day(day) {
                        Some(task) => {
                            print!("  Day {:>2}: {} (+{} XP)", day, task.title, task.xp);
                            if let Some(badge) = task.badge {
                                print!(" {}[badge: {badge}]", icon(config, "🏅 "));
                            }
                            println!();
                        }
                        None => println!("  Day {:>2}: rest day", day),
                    }
                }
            }
        }
        ChallengeCommands::Start { id } => {
            let Some(program) = ChallengeProgram::get(&id) else {
                anyhow::bail!("Unknown challenge '{id}' (see `bloom challenge list`)");
            };
            let progress = open_progress(config)?;
            progress.challenges().start(program.id)?;
            println!(
                "Started {} ({} days). Complete day 1 with `bloom challenge done {}`.",
                program.title, program.duration, program.id
            );
        }
        ChallengeCommands::Done { id, reflection } => {
            let progress = open_progress(config)?;
            let completion = progress
                .challenges()
                .complete_current_day(&id, reflection.as_deref())?;

            match completion.task {
                Some(task) => println!(
                    "Day {}/{} done: {} (+{} XP)",
                    completion.day, completion.challenge.duration, task.title, task.xp
                ),
                None => println!(
                    "Day {}/{} done (rest day)",
                    completion.day, completion.challenge.duration
                ),
            }

            // The day's XP flows through the regular win pipeline
            let label = completion
                .task
                .map(|t| format!("{}: {}", completion.challenge.title, t.title))
                .unwrap_or_else(|| format!("{}: rest day", completion.challenge.title));
            let win = progress
                .recorder()
                .record_win(&NewWin::new(WinType::ChallengeTask, label, completion.xp))?;
            let mut events = progress.gamify().apply_win(win.win_type, &win.label, win.xp)?;

            if let Some(badge) = completion.badge {
                if let Some(unlocked) = progress.gamify().unlock_badge(badge)? {
                    events.push(WellnessEvent::BadgeUnlocked(unlocked));
                }
            }
            print_events(config, &events);

            if completion.challenge_completed {
                println!(
                    "{}Challenge complete! You finished all {} days of {}.",
                    icon(config, "🎉 "),
                    completion.challenge.duration,
                    completion.challenge.title
                );
            }
        }
        ChallengeCommands::Status => {
            let progress = open_progress(config)?;
            let states = progress.challenges().all()?;
            if states.is_empty() {
                println!("No challenges started. Browse with `bloom challenge list`.");
                return Ok(());
            }

            println!("Your challenges:\n");
            for state in states {
                let Some(program) = ChallengeProgram::get(&state.challenge_id) else {
                    continue;
                };
                let marker = if state.is_complete() {
                    icon(config, "✅ ")
                } else {
                    icon(config, "▶️  ")
                };
                println!(
                    "  {}{} - day {}/{}{}",
                    marker,
                    program.title,
                    state.current_day,
                    program.duration,
                    if state.is_complete() { " (complete)" } else { "" }
                );
            }
        }
    }
    Ok(())
}
