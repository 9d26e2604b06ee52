//! End-to-end flow over the library: log wins and moods, run a challenge
//! to completion, take a screening, and check the report and profile state
//! that falls out.

use bloom::catalog::challenges::ChallengeProgram;
use bloom::catalog::screenings::Screening;
use bloom::domain::{NewMood, NewWin, WinType};
use bloom::progress::{ProgressManager, StreakType, TimeRange, WellnessEvent};
use bloom::scoring;

fn manager() -> (tempfile::TempDir, ProgressManager) {
    let dir = tempfile::tempdir().expect("tempdir");
    let manager = ProgressManager::with_path(&dir.path().join("wellness.db")).expect("open db");
    (dir, manager)
}

#[test]
fn wins_accumulate_xp_and_level() {
    let (_dir, manager) = manager();
    let recorder = manager.recorder();
    let gamify = manager.gamify();

    // 12 journal entries at 15 XP = 180 XP, crossing the level-2 boundary
    let mut leveled = false;
    for i in 0..12 {
        let win = recorder
            .record_win(&NewWin::new(WinType::Journal, format!("Entry {i}"), 15))
            .expect("record win");
        let events = gamify.apply_win(win.win_type, &win.label, win.xp).expect("apply win");
        leveled |= events
            .iter()
            .any(|e| matches!(e, WellnessEvent::LevelUp(up) if up.new_level == 2));
    }
    assert!(leveled, "crossing 100 XP should produce a level-up event");

    let profile = gamify.profile().expect("profile");
    assert_eq!(profile.total_xp, 180);
    assert_eq!(profile.level, 2);
    assert_eq!(profile.xp_into_level, 80);
}

#[test]
fn full_challenge_awards_task_badges_and_completion() {
    let (_dir, manager) = manager();
    let tracker = manager.challenges();
    let gamify = manager.gamify();
    let recorder = manager.recorder();

    let program = ChallengeProgram::get("physiology_first").expect("program exists");
    tracker.start(program.id).expect("start");

    let mut total_xp = 0;
    for expected_day in 1..=program.duration {
        let completion = tracker.complete_current_day(program.id, None).expect("complete day");
        assert_eq!(completion.day, expected_day);
        total_xp += completion.xp;

        let label = completion
            .task
            .map(|t| t.title.to_string())
            .unwrap_or_else(|| "rest day".to_string());
        let win = recorder
            .record_win(&NewWin::new(WinType::ChallengeTask, label, completion.xp))
            .expect("record task win");
        gamify.apply_win(win.win_type, &win.label, win.xp).expect("apply win");

        if let Some(badge) = completion.badge {
            gamify.unlock_badge(badge).expect("unlock badge");
        }
    }

    assert_eq!(total_xp, program.total_xp());
    assert_eq!(gamify.profile().expect("profile").total_xp, total_xp);
    assert_eq!(
        gamify.unlocked_badge_ids().expect("badges"),
        vec!["physiology_first"]
    );

    let state = tracker.state(program.id).expect("state").expect("started");
    assert!(state.is_complete());
    assert_eq!(state.current_day, program.duration);
}

#[test]
fn mood_logging_builds_a_streak_and_feeds_the_report() {
    let (_dir, manager) = manager();
    let recorder = manager.recorder();
    let gamify = manager.gamify();

    recorder
        .record_mood(
            &NewMood::new("anxious")
                .with_feelings(vec!["worried".into()])
                .with_tags(vec!["trigger".into()]),
        )
        .expect("record mood");
    let win = recorder
        .record_win(&NewWin::new(WinType::Mood, "Feeling Anxious", 10))
        .expect("record mood win");
    let events = gamify.apply_win(win.win_type, &win.label, win.xp).expect("apply");

    assert!(events.iter().any(|e| matches!(
        e,
        WellnessEvent::StreakExtended { streak_type: StreakType::Mood, count: 1 }
    )));

    // Logging twice on the same day holds the streak at 1
    recorder.record_mood(&NewMood::new("neutral")).expect("second mood");
    let win = recorder
        .record_win(&NewWin::new(WinType::Mood, "Feeling Neutral", 10))
        .expect("second mood win");
    let events = gamify.apply_win(win.win_type, &win.label, win.xp).expect("apply");
    assert!(!events
        .iter()
        .any(|e| matches!(e, WellnessEvent::StreakExtended { .. })));

    let streaks = gamify.streaks().expect("streaks");
    assert_eq!(streaks.mood.current, 1);
    assert!(streaks.mood.is_active());

    let summary = manager.query().summary(TimeRange::Last7Days).expect("summary");
    assert_eq!(summary.mood_counts.len(), 2);
    assert_eq!(summary.daily.len(), 1);
    assert_eq!(summary.daily[0].moods_logged, 2);
}

#[test]
fn screening_outcome_is_persisted() {
    let (_dir, manager) = manager();

    let phq9 = Screening::get("depression-phq9").expect("screening exists");
    let outcome = scoring::score(phq9, &[2, 2, 2, 2, 2, 1, 1, 0, 0]).expect("score");
    assert_eq!(outcome.band.level, "Moderate Depression");

    manager
        .recorder()
        .record_screening(phq9.id, outcome.score, outcome.band.level)
        .expect("record result");

    let history = manager
        .query()
        .screening_history(Some(phq9.id), 10)
        .expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].score, 12);
    assert_eq!(history[0].level, "Moderate Depression");
}

#[test]
fn reset_clears_data_but_keeps_gamification_unless_asked() {
    let (_dir, manager) = manager();
    let recorder = manager.recorder();
    let gamify = manager.gamify();

    let win = recorder
        .record_win(&NewWin::new(WinType::Activity, "Walk", 5))
        .expect("record");
    gamify.apply_win(win.win_type, &win.label, win.xp).expect("apply");

    manager.reset_all().expect("reset data");
    assert_eq!(manager.query().summary(TimeRange::AllTime).expect("summary").total_wins, 0);
    // XP survives a data reset
    assert_eq!(gamify.profile().expect("profile").total_xp, 5);

    manager.reset_gamification().expect("reset gamification");
    assert_eq!(gamify.profile().expect("profile").total_xp, 0);
}
