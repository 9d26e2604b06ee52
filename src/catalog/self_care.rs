//! Self-care activity catalog
//!
//! Small, concrete activities grouped by how long they take. Logging one
//! records a `self_care` win with the activity's XP.

use once_cell::sync::Lazy;

/// How long an activity takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBucket {
    OneMin,
    ThreeMin,
    FiveMin,
    TenMin,
    TwentyPlusMin,
}

impl TimeBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMin => "1 min",
            Self::ThreeMin => "3 min",
            Self::FiveMin => "5 min",
            Self::TenMin => "10 min",
            Self::TwentyPlusMin => "20+ min",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "1" | "1min" | "1 min" => Some(Self::OneMin),
            "3" | "3min" | "3 min" => Some(Self::ThreeMin),
            "5" | "5min" | "5 min" => Some(Self::FiveMin),
            "10" | "10min" | "10 min" => Some(Self::TenMin),
            "20" | "20+" | "20min" | "20+ min" => Some(Self::TwentyPlusMin),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneMin => "Quick Reset",
            Self::ThreeMin => "Mindful Pause",
            Self::FiveMin => "Active Break",
            Self::TenMin => "Deeper Focus",
            Self::TwentyPlusMin => "Deep Restoration",
        }
    }

    pub fn all() -> &'static [TimeBucket] {
        &[
            Self::OneMin,
            Self::ThreeMin,
            Self::FiveMin,
            Self::TenMin,
            Self::TwentyPlusMin,
        ]
    }
}

/// Tags an activity can carry
pub static ACTIVITY_TAGS: &[&str] = &["kids", "pets", "outdoors", "physical", "calm"];

/// A self-care activity
#[derive(Debug, Clone, Copy)]
pub struct SelfCareActivity {
    pub id: &'static str,
    pub label: &'static str,
    pub time: TimeBucket,
    pub tags: &'static [&'static str],
    pub xp: u32,
    /// One-line "why this helps"
    pub benefit: &'static str,
}

use TimeBucket::*;

/// All self-care activities, grouped by time bucket
pub static SELF_CARE_ACTIVITIES: &[SelfCareActivity] = &[
    // 1 minute
    SelfCareActivity {
        id: "sc_breathe_1",
        label: "3 Deep Breaths",
        time: OneMin,
        tags: &["calm", "physical"],
        xp: 5,
        benefit: "Instantly lowers cortisol levels.",
    },
    SelfCareActivity {
        id: "sc_water_1",
        label: "Drink Water",
        time: OneMin,
        tags: &["physical"],
        xp: 5,
        benefit: "Rehydrates your brain for better focus.",
    },
    SelfCareActivity {
        id: "sc_stretch_1",
        label: "Neck Stretch",
        time: OneMin,
        tags: &["physical"],
        xp: 5,
        benefit: "Relieves tension from screen time.",
    },
    SelfCareActivity {
        id: "sc_smile_1",
        label: "Force a Smile",
        time: OneMin,
        tags: &["calm"],
        xp: 5,
        benefit: "Triggers dopamine release.",
    },
    SelfCareActivity {
        id: "sc_hug_pet",
        label: "Hug Your Pet",
        time: OneMin,
        tags: &["pets", "calm"],
        xp: 5,
        benefit: "Boosts oxytocin, the love hormone.",
    },
    SelfCareActivity {
        id: "sc_hug_kid",
        label: "Hug Your Child",
        time: OneMin,
        tags: &["kids", "calm"],
        xp: 5,
        benefit: "Strengthens connection and reduces stress.",
    },
    // 3 minutes
    SelfCareActivity {
        id: "sc_song_3",
        label: "Listen to Favorite Song",
        time: ThreeMin,
        tags: &["calm"],
        xp: 10,
        benefit: "Music shifts your emotional state.",
    },
    SelfCareActivity {
        id: "sc_gratitude_3",
        label: "List 3 Gratitudes",
        time: ThreeMin,
        tags: &["calm"],
        xp: 10,
        benefit: "Rewires brain to scan for positives.",
    },
    SelfCareActivity {
        id: "sc_sun_3",
        label: "Step Outside",
        time: ThreeMin,
        tags: &["outdoors", "physical"],
        xp: 10,
        benefit: "Sunlight regulates circadian rhythm.",
    },
    SelfCareActivity {
        id: "sc_dance_3",
        label: "Dance to One Song",
        time: ThreeMin,
        tags: &["physical", "kids"],
        xp: 10,
        benefit: "Movement shakes off stagnant energy.",
    },
    SelfCareActivity {
        id: "sc_pet_play_3",
        label: "Play with Pet",
        time: ThreeMin,
        tags: &["pets"],
        xp: 10,
        benefit: "Playfulness reduces anxiety.",
    },
    // 5 minutes
    SelfCareActivity {
        id: "sc_walk_5",
        label: "Walk Around Block",
        time: FiveMin,
        tags: &["outdoors", "physical"],
        xp: 15,
        benefit: "Bilateral stimulation calms the brain.",
    },
    SelfCareActivity {
        id: "sc_tea_5",
        label: "Make Herbal Tea",
        time: FiveMin,
        tags: &["calm"],
        xp: 15,
        benefit: "The ritual of making tea is grounding.",
    },
    SelfCareActivity {
        id: "sc_journal_5",
        label: "Brain Dump",
        time: FiveMin,
        tags: &["calm"],
        xp: 15,
        benefit: "Unloads mental clutter onto paper.",
    },
    SelfCareActivity {
        id: "sc_read_5",
        label: "Read 2 Pages",
        time: FiveMin,
        tags: &["calm"],
        xp: 15,
        benefit: "Short escape reduces stress levels.",
    },
    SelfCareActivity {
        id: "sc_kids_game_5",
        label: "Quick Game with Kids",
        time: FiveMin,
        tags: &["kids"],
        xp: 15,
        benefit: "Connection builds emotional safety.",
    },
    // 10 minutes
    SelfCareActivity {
        id: "sc_meditate_10",
        label: "Guided Meditation",
        time: TenMin,
        tags: &["calm"],
        xp: 20,
        benefit: "Resets your nervous system.",
    },
    SelfCareActivity {
        id: "sc_tidy_10",
        label: "Tidy One Room",
        time: TenMin,
        tags: &["physical"],
        xp: 20,
        benefit: "Outer order creates inner calm.",
    },
    SelfCareActivity {
        id: "sc_journal_10",
        label: "Deep Journaling",
        time: TenMin,
        tags: &["calm"],
        xp: 20,
        benefit: "Process emotions and gain clarity.",
    },
    SelfCareActivity {
        id: "sc_stretch_10",
        label: "Full Body Stretch",
        time: TenMin,
        tags: &["physical"],
        xp: 20,
        benefit: "Releases stored tension.",
    },
    SelfCareActivity {
        id: "sc_podcast_10",
        label: "Listen to Podcast",
        time: TenMin,
        tags: &["calm"],
        xp: 20,
        benefit: "Learn something new or get inspired.",
    },
    // 20+ minutes
    SelfCareActivity {
        id: "sc_bath_20",
        label: "Warm Bath",
        time: TwentyPlusMin,
        tags: &["calm", "physical"],
        xp: 30,
        benefit: "Raises body temp to improve sleep.",
    },
    SelfCareActivity {
        id: "sc_nap_20",
        label: "Power Nap",
        time: TwentyPlusMin,
        tags: &["physical"],
        xp: 30,
        benefit: "Restores alertness and performance.",
    },
    SelfCareActivity {
        id: "sc_walk_nature_20",
        label: "Nature Walk",
        time: TwentyPlusMin,
        tags: &["outdoors", "physical"],
        xp: 30,
        benefit: "Nature lowers blood pressure and stress.",
    },
    SelfCareActivity {
        id: "sc_call_20",
        label: "Call a Friend",
        time: TwentyPlusMin,
        tags: &["calm"],
        xp: 30,
        benefit: "Social connection is a biological need.",
    },
    SelfCareActivity {
        id: "sc_hobby_20",
        label: "Work on Hobby",
        time: TwentyPlusMin,
        tags: &["calm"],
        xp: 30,
        benefit: "Flow state increases happiness.",
    },
];

/// Minimum similarity for fuzzy name search
const SEARCH_THRESHOLD: f64 = 0.62;

impl SelfCareActivity {
    /// Look up an activity by id
    pub fn get(id: &str) -> Option<&'static SelfCareActivity> {
        SELF_CARE_ACTIVITIES.iter().find(|a| a.id == id)
    }

    /// Activities matching the given filters
    pub fn filtered(
        time: Option<TimeBucket>,
        tag: Option<&str>,
    ) -> Vec<&'static SelfCareActivity> {
        SELF_CARE_ACTIVITIES
            .iter()
            .filter(|a| time.is_none_or(|t| a.time == t))
            .filter(|a| tag.is_none_or(|t| a.tags.contains(&t)))
            .collect()
    }

    /// Fuzzy search by label, best matches first
    pub fn search(query: &str) -> Vec<&'static SelfCareActivity> {
        let query = query.to_lowercase();
        let mut scored: Vec<(f64, &'static SelfCareActivity)> = SELF_CARE_ACTIVITIES
            .iter()
            .filter_map(|a| {
                let label = a.label.to_lowercase();
                let score = if label.contains(&query) {
                    1.0
                } else {
                    strsim::jaro_winkler(&label, &query)
                };
                (score >= SEARCH_THRESHOLD).then_some((score, a))
            })
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.into_iter().map(|(_, a)| a).collect()
    }

    /// A random activity matching the filters, if any match
    pub fn suggest(time: Option<TimeBucket>, tag: Option<&str>) -> Option<&'static SelfCareActivity> {
        let pool = Self::filtered(time, tag);
        if pool.is_empty() {
            return None;
        }
        Some(pool[random_index(pool.len())])
    }
}

/// Index in `0..len` from OS entropy
fn random_index(len: usize) -> usize {
    let mut buf = [0u8; 8];
    if getrandom::getrandom(&mut buf).is_err() {
        return 0;
    }
    (u64::from_le_bytes(buf) % len as u64) as usize
}

/// Activity ids indexed for quick membership checks
pub static ACTIVITY_IDS: Lazy<Vec<&'static str>> =
    Lazy::new(|| SELF_CARE_ACTIVITIES.iter().map(|a| a.id).collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(SELF_CARE_ACTIVITIES.len(), 26);
        for bucket in TimeBucket::all() {
            assert!(
                !SelfCareActivity::filtered(Some(*bucket), None).is_empty(),
                "bucket {} should have activities",
                bucket.as_str()
            );
        }
    }

    #[test]
    fn test_tags_are_known() {
        for activity in SELF_CARE_ACTIVITIES {
            for tag in activity.tags {
                assert!(ACTIVITY_TAGS.contains(tag), "{}: unknown tag {tag}", activity.id);
            }
        }
    }

    #[test]
    fn test_filtered() {
        let pets = SelfCareActivity::filtered(None, Some("pets"));
        assert_eq!(pets.len(), 2);

        let one_min_calm = SelfCareActivity::filtered(Some(TimeBucket::OneMin), Some("calm"));
        assert!(one_min_calm.iter().all(|a| a.time == TimeBucket::OneMin));
        assert!(one_min_calm.iter().all(|a| a.tags.contains(&"calm")));
    }

    #[test]
    fn test_search() {
        let hits = SelfCareActivity::search("nature walk");
        assert_eq!(hits.first().map(|a| a.id), Some("sc_walk_nature_20"));
    }

    #[test]
    fn test_suggest_respects_filters() {
        for _ in 0..10 {
            let pick = SelfCareActivity::suggest(None, Some("outdoors")).unwrap();
            assert!(pick.tags.contains(&"outdoors"));
        }
        assert!(SelfCareActivity::suggest(Some(TimeBucket::OneMin), Some("outdoors")).is_none());
    }
}
