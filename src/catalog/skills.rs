//! Wellness skill catalog
//!
//! Evidence-based coping techniques grouped by category. Skills are
//! reference content; the coach can turn any of them into a guided
//! step-by-step exercise.

/// Skill category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Grounding,
    EmotionalRegulation,
    PositiveFocus,
    Mindfulness,
    StressReduction,
}

impl SkillCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grounding => "Grounding",
            Self::EmotionalRegulation => "Emotional Regulation",
            Self::PositiveFocus => "Positive Focus",
            Self::Mindfulness => "Mindfulness",
            Self::StressReduction => "Stress Reduction",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Grounding => {
                "Techniques to help you stay in the present moment and manage overwhelming feelings."
            }
            Self::EmotionalRegulation => {
                "Skills to understand and manage your emotional responses in a healthy way."
            }
            Self::PositiveFocus => {
                "Practices to help you notice and appreciate the good in your life, building resilience."
            }
            Self::Mindfulness => {
                "Practices to gently bring your attention to the present moment without judgment."
            }
            Self::StressReduction => {
                "Simple techniques to calm your body and mind when feeling stressed or tense."
            }
        }
    }

    pub fn all() -> &'static [SkillCategory] {
        &[
            Self::Grounding,
            Self::EmotionalRegulation,
            Self::PositiveFocus,
            Self::Mindfulness,
            Self::StressReduction,
        ]
    }
}

/// A wellness skill
#[derive(Debug, Clone, Copy)]
pub struct WellnessSkill {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: SkillCategory,
}

pub static WELLNESS_SKILLS: &[WellnessSkill] = &[
    WellnessSkill {
        id: "breath-1",
        title: "Mindful Breathing",
        description: "A simple, powerful way to calm your nervous system. Focus on the sensation of your breath entering and leaving your body.",
        category: SkillCategory::Grounding,
    },
    WellnessSkill {
        id: "breath-2",
        title: "Box Breathing",
        description: "A technique to regulate your breath and calm your body. Inhale for 4 seconds, hold for 4, exhale for 4, and hold for 4. Repeat several times.",
        category: SkillCategory::Grounding,
    },
    WellnessSkill {
        id: "ground-1",
        title: "5-4-3-2-1 Grounding Technique",
        description: "Anchor yourself in the present moment. Name 5 things you can see, 4 things you can feel, 3 things you can hear, 2 things you can smell, and 1 thing you can taste.",
        category: SkillCategory::Grounding,
    },
    WellnessSkill {
        id: "ground-2",
        title: "Temperature Change",
        description: "Hold a piece of ice in your hand or splash cold water on your face. The sudden change in temperature can help bring your focus back to the present moment.",
        category: SkillCategory::Grounding,
    },
    WellnessSkill {
        id: "regulation-1",
        title: "Opposite Action",
        description: "Act opposite to your emotional urge. If you feel like isolating, reach out to a friend. This can help change the emotion itself.",
        category: SkillCategory::EmotionalRegulation,
    },
    WellnessSkill {
        id: "regulation-2",
        title: "Labeling Emotions",
        description: "Simply naming your emotion (e.g., \"This is anxiety\") can reduce its intensity and give you a sense of control.",
        category: SkillCategory::EmotionalRegulation,
    },
    WellnessSkill {
        id: "focus-1",
        title: "Three Good Things",
        description: "At the end of the day, write down three things that went well and their causes. This shifts focus to positive experiences.",
        category: SkillCategory::PositiveFocus,
    },
    WellnessSkill {
        id: "focus-2",
        title: "Gratitude Journaling",
        description: "Regularly write down what you're grateful for. This practice is strongly linked to greater happiness and well-being.",
        category: SkillCategory::PositiveFocus,
    },
    WellnessSkill {
        id: "mindful-1",
        title: "Mindful Observation",
        description: "Pick a natural object around you and observe it for a few minutes. Notice its colors, textures, and shape without judgment.",
        category: SkillCategory::Mindfulness,
    },
    WellnessSkill {
        id: "mindful-2",
        title: "Mindful Listening",
        description: "Listen to the sounds around you for a few minutes. Try to identify each sound without labeling it as \"good\" or \"bad\".",
        category: SkillCategory::Mindfulness,
    },
    WellnessSkill {
        id: "stress-1",
        title: "Progressive Muscle Relaxation",
        description: "Tense a group of muscles as you breathe in, and relax them as you breathe out. Work your way up your body from your feet to your head.",
        category: SkillCategory::StressReduction,
    },
    WellnessSkill {
        id: "stress-2",
        title: "Guided Visualization",
        description: "Close your eyes and imagine a peaceful place. Engage all your senses: what do you see, hear, smell, and feel in this calm location?",
        category: SkillCategory::StressReduction,
    },
];

impl WellnessSkill {
    pub fn get(id: &str) -> Option<&'static WellnessSkill> {
        WELLNESS_SKILLS.iter().find(|s| s.id == id)
    }

    pub fn by_category(category: SkillCategory) -> Vec<&'static WellnessSkill> {
        WELLNESS_SKILLS.iter().filter(|s| s.category == category).collect()
    }

    /// Fuzzy search by title, best match first
    pub fn search(query: &str) -> Option<&'static WellnessSkill> {
        let query = query.to_lowercase();
        WELLNESS_SKILLS
            .iter()
            .map(|s| {
                let title = s.title.to_lowercase();
                let score = if title.contains(&query) {
                    1.0
                } else {
                    strsim::jaro_winkler(&title, &query)
                };
                (score, s)
            })
            .filter(|(score, _)| *score >= 0.6)
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, s)| s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_skills() {
        for category in SkillCategory::all() {
            assert_eq!(
                WellnessSkill::by_category(*category).len(),
                2,
                "{} should have two skills",
                category.name()
            );
        }
    }

    #[test]
    fn test_search() {
        assert_eq!(WellnessSkill::search("box breathing").unwrap().id, "breath-2");
        assert_eq!(WellnessSkill::search("gratitude").unwrap().id, "focus-2");
    }
}
