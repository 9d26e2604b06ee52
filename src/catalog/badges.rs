//! Badge catalog
//!
//! Badges are earned by completing challenge milestones. Challenge tasks
//! reference badges by id; `bloom verify` cross-checks every reference
//! against this table.

/// A badge definition
#[derive(Debug, Clone, Copy)]
pub struct Badge {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
}

/// All badge definitions
pub static BADGES: &[Badge] = &[
    Badge {
        id: "self_aware_starter",
        label: "Self-Aware Starter",
        description: "Completed Week 1 of Focus Flow Builder.",
        icon: "🌱",
        category: "Challenge",
    },
    Badge {
        id: "momentum_maker",
        label: "Momentum Maker",
        description: "Completed Week 2 of Focus Flow Builder.",
        icon: "⚡",
        category: "Challenge",
    },
    Badge {
        id: "resilient_focuser",
        label: "Resilient Focuser",
        description: "Completed Week 3 of Focus Flow Builder.",
        icon: "🛡️",
        category: "Challenge",
    },
    Badge {
        id: "flow_master",
        label: "Flow Master",
        description: "Completed the 30-Day Focus Flow Builder Challenge.",
        icon: "🌊",
        category: "Challenge",
    },
    Badge {
        id: "physiology_first",
        label: "Physiology First",
        description: "Completed the 5-Day Physiology First Challenge.",
        icon: "🧬",
        category: "Challenge",
    },
    Badge {
        id: "crisis_controller",
        label: "Crisis Controller",
        description: "Completed the 5-Day Crisis Control Challenge.",
        icon: "🛑",
        category: "Challenge",
    },
    Badge {
        id: "thought_detective",
        label: "Thought Detective",
        description: "Completed the 5-Day Thought Detective Challenge.",
        icon: "🕵️",
        category: "Challenge",
    },
    Badge {
        id: "ceo_brain",
        label: "CEO Brain",
        description: "Completed the 5-Day CEO Brain Challenge.",
        icon: "🧠",
        category: "Challenge",
    },
    Badge {
        id: "social_navigator",
        label: "Social Navigator",
        description: "Completed the 3-Day Social Navigator Challenge.",
        icon: "🤝",
        category: "Challenge",
    },
    Badge {
        id: "authentic_self",
        label: "Authentic Self",
        description: "Completed the 5-Day Unmasking & Identity Challenge.",
        icon: "🎭",
        category: "Challenge",
    },
    Badge {
        id: "foundations_scholar",
        label: "Foundations Scholar",
        description: "Completed the 30-Day ADHD Foundations Theory Track.",
        icon: "📚",
        category: "Challenge",
    },
    Badge {
        id: "emotional_master",
        label: "Emotional Master",
        description: "Completed the 30-Day Emotional Mastery Theory Track.",
        icon: "❤️",
        category: "Challenge",
    },
    Badge {
        id: "neurodiversity_advocate",
        label: "Neurodiversity Advocate",
        description: "Completed the 7-Day Neurodiversity Advantage Training.",
        icon: "🌈",
        category: "Challenge",
    },
];

impl Badge {
    /// Look up a badge by id
    pub fn get(id: &str) -> Option<&'static Badge> {
        BADGES.iter().find(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ids_unique() {
        let mut ids: Vec<_> = BADGES.iter().map(|b| b.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total, "All badge IDs should be unique");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Badge::get("flow_master").unwrap().label, "Flow Master");
        assert!(Badge::get("missing_badge").is_none());
    }
}
