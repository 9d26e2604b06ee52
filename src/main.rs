use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "bloom")]
#[command(about = "Bloom - a local-first mental-wellness companion")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.bloom/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize ~/.bloom/config.toml with documented defaults
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Log and list wins (activities, journal entries, gratitude)
    Win {
        #[command(subcommand)]
        command: cli::win::WinCommands,
    },

    /// Log moods from the emotion wheel and track your mood streak
    Mood {
        #[command(subcommand)]
        command: cli::mood::MoodCommands,
    },

    /// Browse, start, and progress through challenge programs
    Challenge {
        #[command(subcommand)]
        command: cli::challenge::ChallengeCommands,
    },

    /// Take self-assessment screenings
    Screen {
        #[command(subcommand)]
        command: cli::screen::ScreenCommands,
    },

    /// Self-care activities: browse, get a suggestion, log one
    Selfcare {
        #[command(subcommand)]
        command: cli::selfcare::SelfcareCommands,
    },

    /// Talk to the AI wellness coach
    Coach {
        #[command(subcommand)]
        command: cli::coach::CoachCommands,
    },

    /// Show XP, level, streaks, and badges
    Profile,

    /// Activity report over a time range
    Report {
        /// Range: 7d, 30d, 90d, or all
        #[arg(long, short)]
        range: Option<String>,
    },

    /// Check catalog data integrity (badge links, task days, scoring bands)
    Verify,

    /// Delete logged data and/or gamification state
    Reset {
        /// Also reset XP, level, streaks, and badges
        #[arg(long)]
        gamification: bool,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = bloom::config::Config::load_or(cli.config.as_deref())?;

    match cli.command {
        Commands::Init { force } => {
            cli::init::init_command(force).await?;
        }
        Commands::Win { command } => {
            cli::win::win_command(&config, command).await?;
        }
        Commands::Mood { command } => {
            cli::mood::mood_command(&config, command).await?;
        }
        Commands::Challenge { command } => {
            cli::challenge::challenge_command(&config, command).await?;
        }
        Commands::Screen { command } => {
            cli::screen::screen_command(&config, command).await?;
        }
        Commands::Selfcare { command } => {
            cli::selfcare::selfcare_command(&config, command).await?;
        }
        Commands::Coach { command } => {
            cli::coach::coach_command(&config, command).await?;
        }
        Commands::Profile => {
            cli::profile::profile_command(&config).await?;
        }
        Commands::Report { range } => {
            cli::report::report_command(&config, range).await?;
        }
        Commands::Verify => {
            let ok = cli::verify::verify_command().await?;
            if !ok {
                std::process::exit(1);
            }
        }
        Commands::Reset { gamification, yes } => {
            cli::reset::reset_command(&config, gamification, yes).await?;
        }
    }

    Ok(())
}
