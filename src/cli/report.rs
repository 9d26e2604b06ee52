//! Report command: activity summary over a time range

use anyhow::{bail, Result};

use bloom::catalog::emotions::Emotion;
use bloom::config::Config;
use bloom::domain::WinType;
use bloom::progress::TimeRange;

use super::{icon, open_progress};

pub async fn report_command(config: &Config, range: Option<String>) -> Result<()> {
    let range = resolve_range(config, range.as_deref())?;
    let progress = open_progress(config)?;
    let summary = progress.query().summary(range)?;

    println!("Report - {}\n", range.label());
    println!("  Wins: {} (+{} XP)", summary.total_wins, summary.total_xp_earned);

    if !summary.wins_by_type.is_empty() {
        println!("\n  By type:");
        for (win_type, count) in &summary.wins_by_type {
            let label = WinType::from_str(win_type)
                .map(|t| t.label())
                .unwrap_or(win_type.as_str());
            println!("    {label:<16} {count}");
        }
    }

    if !summary.mood_counts.is_empty() {
        println!("\n  Moods:");
        for (mood, count) in &summary.mood_counts {
            let emoji = Emotion::get(mood).map(|e| e.emoji).unwrap_or("");
            println!("    {}{mood:<12} {count}", icon(config, emoji));
        }
        if let Some(dominant) = summary.dominant_mood() {
            println!("    most logged: {dominant}");
        }
    }

    if !summary.daily.is_empty() {
        println!("\n  Daily activity:");
        for day in &summary.daily {
            println!(
                "    {}  {:>2} wins  {:>4} XP  {} mood{}",
                day.day,
                day.total_wins,
                day.total_xp,
                day.moods_logged,
                if day.moods_logged == 1 { "" } else { "s" }
            );
        }
    }

    if !summary.screenings.is_empty() {
        println!("\n  Recent screenings:");
        for result in &summary.screenings {
            println!("    {} - score {} - {}", result.screening_id, result.score, result.level);
        }
    }

    Ok(())
}

fn resolve_range(config: &Config, raw: Option<&str>) -> Result<TimeRange> {
    match raw {
        Some(raw) => match TimeRange::from_str(raw) {
            Some(range) => Ok(range),
            None => bail!("Unknown range '{raw}' (expected 7d, 30d, 90d, or all)"),
        },
        None => Ok(match config.settings.report_range_days {
            0 => TimeRange::AllTime,
            days if days <= 7 => TimeRange::Last7Days,
            days if days <= 30 => TimeRange::Last30Days,
            _ => TimeRange::Last90Days,
        }),
    }
}
