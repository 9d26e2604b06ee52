//! Mood commands: log check-ins from the emotion wheel

use anyhow::{bail, Result};
use chrono::{DateTime, Local};
use clap::Subcommand;

use bloom::catalog::emotions::{ContextTag, Emotion, EMOTIONS};
use bloom::config::Config;
use bloom::domain::{NewMood, NewWin, WinType};
use bloom::progress::XpRewards;

use super::{icon, open_progress, print_events};

#[derive(Subcommand)]
pub enum MoodCommands {
    /// Log a mood check-in
    Log {
        /// Primary emotion: happy, sad, angry, anxious, tired, neutral
        mood: String,

        /// Comma-separated secondary feelings (e.g. worried,stressed)
        #[arg(long, short = 'f', value_delimiter = ',')]
        feelings: Vec<String>,

        /// A short note about what's going on
        #[arg(long)]
        note: Option<String>,

        /// Comma-separated context tags (e.g. trigger,conflict)
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Show the emotion wheel
    Wheel,

    /// List recent mood check-ins
    List {
        /// Number of entries to show
        #[arg(long, short = 'n', default_value_t = 14)]
        limit: usize,
    },

    /// Show your mood streak
    Streak,
}

pub async fn mood_command(config: &Config, command: MoodCommands) -> Result<()> {
    match command {
        MoodCommands::Log { mood, feelings, note, tags } => {
            let Some(emotion) = Emotion::get(&mood.to_lowercase()) else {
                bail!(
                    "Unknown mood '{mood}' (expected one of: {})",
                    EMOTIONS.iter().map(|e| e.id).collect::<Vec<_>>().join(", ")
                );
            };
            for feeling in &feelings {
                if !emotion.has_feeling(feeling) {
                    bail!(
                        "'{feeling}' is not a {} feeling (try: {})",
                        emotion.label,
                        emotion
                            .secondary
                            .iter()
                            .map(|f| f.id)
                            .collect::<Vec<_>>()
                            .join(", ")
                    );
                }
            }
            for tag in &tags {
                if ContextTag::get(tag).is_none() {
                    bail!("Unknown context tag '{tag}'");
                }
            }

            let mut new = NewMood::new(emotion.id)
                .with_feelings(feelings)
                .with_tags(tags);
            if let Some(note) = note {
                new = new.with_note(note);
            }

            let progress = open_progress(config)?;
            let entry = progress.recorder().record_mood(&new)?;

            // A mood check-in is also a win
            let win = progress.recorder().record_win(
                &NewWin::new(WinType::Mood, format!("Feeling {}", emotion.label), XpRewards::MOOD_LOG)
                    .with_icon(emotion.emoji),
            )?;
            let events = progress.gamify().apply_win(win.win_type, &win.label, win.xp)?;

            print!("Logged {}{}", icon(config, emotion.emoji), emotion.label);
            if !entry.feelings.is_empty() {
                print!(" ({})", entry.feelings.join(", "));
            }
            println!();
            print_events(config, &events);
        }
        MoodCommands::Wheel => {
            println!("Emotion wheel:\n");
            for emotion in EMOTIONS {
                println!("  {}{} ({})", icon(config, emotion.emoji), emotion.label, emotion.id);
                let feelings: Vec<&str> = emotion.secondary.iter().map(|f| f.id).collect();
                println!("      feelings: {}", feelings.join(", "));
                let tags: Vec<&str> = ContextTag::for_emotion(emotion)
                    .iter()
                    .map(|t| t.label)
                    .collect();
                println!("      tags: {}", tags.join(" "));
            }
        }
        MoodCommands::List { limit } => {
            let progress = open_progress(config)?;
            let moods = progress.query().recent_moods(limit)?;
            if moods.is_empty() {
                println!("No mood check-ins yet. Log one with `bloom mood log <mood>`.");
                return Ok(());
            }

            println!("Recent check-ins ({}):\n", moods.len());
            for entry in moods {
                let when = DateTime::from_timestamp_millis(entry.created_at)
                    .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                let emoji = Emotion::get(&entry.mood).map(|e| e.emoji).unwrap_or("");
                print!("  {} {}{}", when, icon(config, emoji), entry.mood);
                if !entry.feelings.is_empty() {
                    print!(" ({})", entry.feelings.join(", "));
                }
                if let Some(note) = &entry.note {
                    print!(" - {note}");
                }
                println!();
            }
        }
        MoodCommands::Streak => {
            let progress = open_progress(config)?;
            let streaks = progress.gamify().streaks()?;
            let mood = &streaks.mood;
            if mood.is_active() {
                println!(
                    "{}Mood streak: {} day{} (best: {})",
                    icon(config, "🔥 "),
                    mood.current,
                    if mood.current == 1 { "" } else { "s" },
                    mood.best
                );
            } else if mood.best > 0 {
                println!("No active mood streak (best: {}). Log a mood to start again!", mood.best);
            } else {
                println!("No mood streak yet. Log a mood to start one!");
            }
        }
    }
    Ok(())
}
