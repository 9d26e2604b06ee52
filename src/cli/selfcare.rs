//! Self-care commands: browse, suggest, log, and favorite activities

use anyhow::{bail, Result};
use clap::Subcommand;

use bloom::catalog::self_care::{SelfCareActivity, TimeBucket};
use bloom::config::Config;
use bloom::domain::{NewWin, WinType};
use bloom::progress::FavoriteKind;

use super::{icon, open_progress, print_events};

#[derive(Subcommand)]
pub enum SelfcareCommands {
    /// List activities, optionally filtered
    List {
        /// Time bucket: 1, 3, 5, 10, or 20+ (minutes)
        #[arg(long, short)]
        time: Option<String>,

        /// Tag filter: kids, pets, outdoors, physical, calm
        #[arg(long)]
        tag: Option<String>,
    },

    /// Suggest a random activity matching the filters
    Suggest {
        /// Time bucket: 1, 3, 5, 10, or 20+ (minutes)
        #[arg(long, short)]
        time: Option<String>,

        /// Tag filter: kids, pets, outdoors, physical, calm
        #[arg(long)]
        tag: Option<String>,
    },

    /// Fuzzy-search activities by name
    Find { query: String },

    /// Log a completed activity as a self-care win
    Log { id: String },

    /// Toggle an activity as a favorite
    Favorite { id: String },

    /// List favorite activities
    Favorites,
}

pub async fn selfcare_command(config: &Config, command: SelfcareCommands) -> Result<()> {
    match command {
        SelfcareCommands::List { time, tag } => {
            let time = parse_time(time.as_deref())?;
            let activities = SelfCareActivity::filtered(time, tag.as_deref());
            if activities.is_empty() {
                println!("No activities match those filters.");
                return Ok(());
            }
            print_activities(&activities);
        }
        SelfcareCommands::Suggest { time, tag } => {
            let time = parse_time(time.as_deref())?;
            match SelfCareActivity::suggest(time, tag.as_deref()) {
                Some(activity) => {
                    println!(
                        "{}Try: {} ({}, +{} XP)",
                        icon(config, "🌿 "),
                        activity.label,
                        activity.time.as_str(),
                        activity.xp
                    );
                    println!("  {}", activity.benefit);
                    println!("  Done it? `bloom selfcare log {}`", activity.id);
                }
                None => println!("No activities match those filters."),
            }
        }
        SelfcareCommands::Find { query } => {
            let hits = SelfCareActivity::search(&query);
            if hits.is_empty() {
                println!("Nothing matched '{query}'.");
                return Ok(());
            }
            print_activities(&hits);
        }
        SelfcareCommands::Log { id } => {
            let Some(activity) = SelfCareActivity::get(&id) else {
                bail!("Unknown activity '{id}' (see `bloom selfcare list`)");
            };

            let progress = open_progress(config)?;
            let win = progress.recorder().record_win(
                &NewWin::new(WinType::SelfCare, activity.label, activity.xp)
                    .with_content(format!("Completed self-care activity: {}", activity.label)),
            )?;
            let events = progress.gamify().apply_win(win.win_type, &win.label, win.xp)?;

            println!("Logged: {} (+{} XP)", activity.label, activity.xp);
            println!("  {}", activity.benefit);
            print_events(config, &events);
        }
        SelfcareCommands::Favorite { id } => {
            let Some(activity) = SelfCareActivity::get(&id) else {
                bail!("Unknown activity '{id}' (see `bloom selfcare list`)");
            };
            let progress = open_progress(config)?;
            let now_favorite = progress
                .recorder()
                .toggle_favorite(FavoriteKind::SelfCare, activity.id)?;
            if now_favorite {
                println!("Favorited {}", activity.label);
            } else {
                println!("Removed {} from favorites", activity.label);
            }
        }
        SelfcareCommands::Favorites => {
            let progress = open_progress(config)?;
            let ids = progress.recorder().favorites(FavoriteKind::SelfCare)?;
            if ids.is_empty() {
                println!("No favorites yet. Add one with `bloom selfcare favorite <id>`.");
                return Ok(());
            }
            let activities: Vec<&'static SelfCareActivity> =
                ids.iter().filter_map(|id| SelfCareActivity::get(id)).collect();
            print_activities(&activities);
        }
    }
    Ok(())
}

fn parse_time(raw: Option<&str>) -> Result<Option<TimeBucket>> {
    match raw {
        None => Ok(None),
        Some(raw) => match TimeBucket::from_str(raw) {
            Some(bucket) => Ok(Some(bucket)),
            None => bail!("Unknown time bucket '{raw}' (expected 1, 3, 5, 10, or 20+)"),
        },
    }
}

fn print_activities(activities: &[&'static SelfCareActivity]) {
    for activity in activities {
        println!(
            "  {} - {} ({}, +{} XP) [{}]",
            activity.id,
            activity.label,
            activity.time.as_str(),
            activity.xp,
            activity.tags.join(", ")
        );
        println!("      {}", activity.benefit);
    }
}
