//! Challenge program catalog
//!
//! Multi-day structured programs of daily tasks. Progress through a program
//! is a strictly linear day pointer (see [`crate::progress::progression`]);
//! the catalog itself is static content.
//!
//! Task maps may be sparse: the 30-day theory tracks only define milestone
//! days, and days without a task are rest days.

/// What kind of action a daily task asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Journal,
    Action,
    Timer,
    TimerMulti,
    Reflection,
    Celebration,
    Social,
    Planning,
    Creative,
    Reading,
    Quiz,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Journal => "journal",
            Self::Action => "action",
            Self::Timer => "timer",
            Self::TimerMulti => "timer_multi",
            Self::Reflection => "reflection",
            Self::Celebration => "celebration",
            Self::Social => "social",
            Self::Planning => "planning",
            Self::Creative => "creative",
            Self::Reading => "reading",
            Self::Quiz => "quiz",
        }
    }
}

/// Which dashboard group a program belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeGroup {
    /// Group 1: Restore Balance
    Balance,
    /// Group 2: Build Focus
    Focus,
    /// Group 3: Find Yourself
    Identity,
}

impl ChallengeGroup {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Balance => "Restore Balance",
            Self::Focus => "Build Focus",
            Self::Identity => "Find Yourself",
        }
    }
}

/// A phase inside a program, spanning an inclusive day range
#[derive(Debug, Clone, Copy)]
pub struct Phase {
    pub id: u32,
    pub title: &'static str,
    pub days: (u32, u32),
    pub description: &'static str,
}

/// A daily task
#[derive(Debug, Clone, Copy)]
pub struct DayTask {
    pub day: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub xp: u32,
    pub kind: TaskKind,
    /// Focus-timer length in minutes, for timer tasks
    pub duration_min: Option<u32>,
    /// Number of sessions, for multi-session tasks
    pub count: Option<u32>,
    /// Badge unlocked by completing this task
    pub badge: Option<&'static str>,
}

/// A challenge program
#[derive(Debug, Clone, Copy)]
pub struct ChallengeProgram {
    pub id: &'static str,
    pub title: &'static str,
    pub duration: u32,
    pub category: &'static str,
    pub group: ChallengeGroup,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub phases: &'static [Phase],
    /// Sorted by day; may be sparse
    pub tasks: &'static [DayTask],
}

impl ChallengeProgram {
    /// Look up a program by id
    pub fn get(id: &str) -> Option<&'static ChallengeProgram> {
        CHALLENGES.iter().find(|c| c.id == id)
    }

    /// The task for a given day, if that day has one
    pub fn task_for_day(&self, day: u32) -> Option<&'static DayTask> {
        self.tasks.iter().find(|t| t.day == day)
    }

    /// The phase a given day falls in
    pub fn phase_for_day(&self, day: u32) -> Option<&'static Phase> {
        self.phases.iter().find(|p| day >= p.days.0 && day <= p.days.1)
    }

    /// Total XP available from all tasks in the program
    pub fn total_xp(&self) -> u32 {
        self.tasks.iter().map(|t| t.xp).sum()
    }

    /// Programs in a given group
    pub fn by_group(group: ChallengeGroup) -> Vec<&'static ChallengeProgram> {
        CHALLENGES.iter().filter(|c| c.group == group).collect()
    }
}

macro_rules! task {
    (@opt) => { None };
    (@opt $v:expr) => { Some($v) };
    ($day:literal, $kind:ident, $xp:literal, $title:literal, $desc:literal
        $(, timer: $dur:literal)? $(, count: $count:literal)? $(, badge: $badge:literal)?) => {
        DayTask {
            day: $day,
            title: $title,
            description: $desc,
            xp: $xp,
            kind: TaskKind::$kind,
            duration_min: task!(@opt $($dur)?),
            count: task!(@opt $($count)?),
            badge: task!(@opt $($badge)?),
        }
    };
}

/// All challenge programs
pub static CHALLENGES: &[ChallengeProgram] = &[
    ChallengeProgram {
        id: "focus_flow_builder_2",
        title: "Focus Flow Builder 2.0",
        duration: 30,
        category: "Focus",
        group: ChallengeGroup::Focus,
        description: "A 30-day research-backed gamification challenge to boost focus, motivation, and follow-through.",
        tags: &["ADHD", "Focus", "Habits"],
        phases: &[
            Phase {
                id: 1,
                title: "Awareness & Set-Up",
                days: (1, 7),
                description: "Create safe focus environment and improve task awareness.",
            },
            Phase {
                id: 2,
                title: "Daily Dopamine Wins",
                days: (8, 15),
                description: "Build short tasks into enjoyable rituals.",
            },
            Phase {
                id: 3,
                title: "Flow Extension",
                days: (16, 23),
                description: "Increase focus duration, double sessions.",
            },
            Phase {
                id: 4,
                title: "Integration",
                days: (24, 30),
                description: "Link focus habits to broader life goals.",
            },
        ],
        tasks: &[
            task!(1, Journal, 10, "Notice Distractions", "Notice distractions and write them down."),
            task!(2, Action, 15, "Focus Space", "Choose one focus-friendly space."),
            task!(3, Journal, 20, "Satisfying Task", "Identify your most satisfying task."),
            task!(4, Timer, 25, "5-Min Timer", "Set focus timer to 5 minutes, reflect after.", timer: 5),
            task!(5, Timer, 25, "5-Min Timer (Again)", "Set focus timer to 5 minutes, reflect after.", timer: 5),
            task!(6, Journal, 15, "Best Focus Time", "Journal your best focus time of day."),
            task!(7, Reflection, 50, "Reward Reflection", "Reflect on your first week.", badge: "self_aware_starter"),
            task!(8, Timer, 25, "10-Min Joy Task", "Do a 10-minute task you enjoy.", timer: 10),
            task!(9, Timer, 25, "10-Min Joy Task", "Do a 10-minute task you enjoy.", timer: 10),
            task!(10, Timer, 25, "10-Min Joy Task", "Do a 10-minute task you enjoy.", timer: 10),
            task!(11, Action, 30, "Habit Stack", "Stack a new habit onto an existing one."),
            task!(12, Action, 30, "Visual Tracker", "Create a visual tracker for progress."),
            task!(13, TimerMulti, 40, "Double Focus", "Complete two focus sessions today.", count: 2),
            task!(14, TimerMulti, 40, "Double Focus", "Complete two focus sessions today.", count: 2),
            task!(15, Celebration, 100, "Celebration Checkpoint", "Celebrate your momentum!", badge: "momentum_maker"),
            task!(16, Action, 20, "Mindful Break", "Practice one mindful break (stretch or breathe)."),
            task!(17, TimerMulti, 50, "15-Min x2", "Two 15-minute focus sessions.", timer: 15, count: 2),
            task!(18, TimerMulti, 50, "15-Min x2", "Two 15-minute focus sessions.", timer: 15, count: 2),
            task!(19, Social, 75, "Share Progress", "Share your progress with a buddy."),
            task!(20, Action, 60, "Accountability Tool", "Introduce an accountability tool (timer, AI coach)."),
            task!(21, Action, 60, "Accountability Tool", "Use your accountability tool."),
            task!(22, Action, 60, "Accountability Tool", "Use your accountability tool."),
            task!(23, Reflection, 80, "Reflection Session", "Reflect on your flow extension.", badge: "resilient_focuser"),
            task!(24, Planning, 50, "Plan Weekly Goals", "Plan your goals for the upcoming week."),
            task!(25, Action, 75, "Focus + Mindfulness", "Combine focus session with a mindfulness check-in."),
            task!(26, Action, 75, "Focus + Mindfulness", "Combine focus session with a mindfulness check-in."),
            task!(27, Creative, 100, "Achievement Playlist", "Create a personal achievement music playlist."),
            task!(28, Action, 100, "Listen to Playlist", "Use your playlist during a task."),
            task!(29, Social, 150, "Invite a Friend", "Invite a friend to join a challenge."),
            task!(30, Celebration, 500, "Grand Celebration", "You did it! Celebrate your 30-day journey.", badge: "flow_master"),
        ],
    },
    ChallengeProgram {
        id: "physiology_first",
        title: "Physiology First",
        duration: 5,
        category: "Well-Being",
        group: ChallengeGroup::Balance,
        description: "Master the \"Big Three\" biological foundations: Sleep, Diet, and Movement.",
        tags: &["Health", "Sleep", "Energy"],
        phases: &[Phase {
            id: 1,
            title: "The Foundation",
            days: (1, 5),
            description: "Build your biological base.",
        }],
        tasks: &[
            task!(1, Journal, 20, "Sleep Audit", "Track your sleep quality vs. quantity tonight."),
            task!(2, Action, 20, "Hydration Boost", "Drink a glass of water first thing in the morning."),
            task!(3, Action, 20, "Movement Snack", "Do 5 minutes of movement (walk, stretch, dance)."),
            task!(4, Action, 20, "Fiber Fuel", "Eat one serving of fruit or vegetables today."),
            task!(5, Reflection, 50, "Foundation Review", "Reflect on how your body feels after 5 days.", badge: "physiology_first"),
        ],
    },
    ChallengeProgram {
        id: "crisis_control",
        title: "Crisis Control",
        duration: 5,
        category: "Emotional Regulation",
        group: ChallengeGroup::Balance,
        description: "Master the \"Emergency Brake\" for overwhelming emotions using TIPP and STOP.",
        tags: &["Emotion", "Crisis", "Grounding"],
        phases: &[Phase {
            id: 1,
            title: "Emergency Tools",
            days: (1, 5),
            description: "Learn to stop the spiral.",
        }],
        tasks: &[
            task!(1, Reading, 20, "Learn TIPP", "Read the TIPP protocol (Temperature, Intense Exercise, Paced Breathing, Paired Muscle Relaxation)."),
            task!(2, Action, 20, "Practice Temperature", "Splash cold water on your face or hold an ice cube."),
            task!(3, Timer, 20, "Practice Paced Breathing", "Breathe in for 4, out for 6. Do this for 1 minute.", timer: 1),
            task!(4, Reading, 20, "Learn STOP", "Read the STOP skill (Stop, Take step back, Observe, Proceed)."),
            task!(5, Journal, 50, "Crisis Plan", "Write down your personal Crisis Plan using these tools.", badge: "crisis_controller"),
        ],
    },
    ChallengeProgram {
        id: "thought_detective",
        title: "The Thought Detective",
        duration: 5,
        category: "CBT / Mindset",
        group: ChallengeGroup::Identity,
        description: "Catch and reframe \"Ants\" (Automatic Negative Thoughts) using CBT.",
        tags: &["CBT", "Mindset", "Anxiety"],
        phases: &[Phase {
            id: 1,
            title: "Catching ANTs",
            days: (1, 5),
            description: "Identify and challenge negative thoughts.",
        }],
        tasks: &[
            task!(1, Journal, 20, "Spot the ANT", "Identify one Automatic Negative Thought today."),
            task!(2, Journal, 20, "Name the Distortion", "Is it \"All-or-Nothing\" or \"Catastrophizing\"?"),
            task!(3, Journal, 30, "The Courtroom", "Write down evidence FOR and AGAINST the thought."),
            task!(4, Journal, 30, "Reframe It", "Rewrite the thought in a more balanced way."),
            task!(5, Reflection, 50, "Detective Badge", "Reflect on a thought you successfully reframed.", badge: "thought_detective"),
        ],
    },
    ChallengeProgram {
        id: "ceo_brain",
        title: "The CEO Brain",
        duration: 5,
        category: "Executive Function",
        group: ChallengeGroup::Focus,
        description: "Tools to externalize memory and manage time blindness.",
        tags: &["Productivity", "Planning", "Focus"],
        phases: &[Phase {
            id: 1,
            title: "Externalizing",
            days: (1, 5),
            description: "Get it out of your head.",
        }],
        tasks: &[
            task!(1, Journal, 20, "Brain Dump", "Write down EVERYTHING currently in your working memory."),
            task!(2, Action, 20, "Visual Timer", "Use a visual timer for one task today."),
            task!(3, Action, 20, "The Launchpad", "Set up a \"Launchpad\" by the door for keys/wallet."),
            task!(4, Planning, 20, "Rule of 3", "Pick only 3 \"Must Do\" tasks for today."),
            task!(5, Reflection, 50, "CEO Review", "Review your week. What tool helped most?", badge: "ceo_brain"),
        ],
    },
    ChallengeProgram {
        id: "social_navigator",
        title: "Social Navigator",
        duration: 3,
        category: "Relationships",
        group: ChallengeGroup::Identity,
        description: "Protect relationships with Boundaries and \"I\" Statements.",
        tags: &["Relationships", "Communication", "Boundaries"],
        phases: &[Phase {
            id: 1,
            title: "Connection Tools",
            days: (1, 3),
            description: "Communicate clearly and safely.",
        }],
        tasks: &[
            task!(1, Journal, 20, "The \"I\" Statement", "Practice writing an \"I feel X when Y\" statement."),
            task!(2, Journal, 20, "Boundary Check", "Identify one place you need better boundaries."),
            task!(3, Action, 50, "Navigator Badge", "Commit to using one \"I\" statement this week.", badge: "social_navigator"),
        ],
    },
    ChallengeProgram {
        id: "authentic_self",
        title: "Authentic Self",
        duration: 5,
        category: "Identity",
        group: ChallengeGroup::Identity,
        description: "Unmasking, Strengths, and Self-Advocacy.",
        tags: &["Identity", "Neurodiversity", "Self-Esteem"],
        phases: &[Phase {
            id: 1,
            title: "Unmasking",
            days: (1, 5),
            description: "Discover your true operating manual.",
        }],
        tasks: &[
            task!(1, Journal, 20, "Strengths Inventory", "List 3 things your ADHD brain does well."),
            task!(2, Journal, 20, "Sensory Audit", "What sensory inputs drain you? What soothes you?"),
            task!(3, Action, 20, "Stimming Permission", "Allow yourself to stim (fidget, pace, hum) freely for 5 mins."),
            task!(4, Journal, 20, "Masking Check", "Notice one time you \"masked\" today. How did it feel?"),
            task!(5, Reflection, 50, "Authenticity Pledge", "Write a permission slip to be yourself.", badge: "authentic_self"),
        ],
    },
    ChallengeProgram {
        id: "foundations_theory",
        title: "ADHD Foundations",
        duration: 30,
        category: "Mastery",
        group: ChallengeGroup::Focus,
        description: "Deep dive into the neuroscience of ADHD: Physiology, Executive Function, and the \"Ferrari Brain\".",
        tags: &["Education", "Neuroscience", "Theory"],
        phases: &[
            Phase {
                id: 1,
                title: "Neurobiology 101",
                days: (1, 7),
                description: "Understanding the hardware.",
            },
            Phase {
                id: 2,
                title: "Executive Functions",
                days: (8, 14),
                description: "The CEO of the brain.",
            },
            Phase {
                id: 3,
                title: "The Dopamine Link",
                days: (15, 21),
                description: "Motivation and chemistry.",
            },
            Phase {
                id: 4,
                title: "Building the Base",
                days: (22, 30),
                description: "Sleep, Diet, and Movement theory.",
            },
        ],
        tasks: &[
            task!(1, Reading, 30, "Read: The Ferrari Brain", "Read about the Prefrontal Cortex vs. Amygdala."),
            task!(7, Reflection, 50, "Week 1 Review", "Summarize your key takeaways."),
            task!(15, Reading, 30, "Read: Dopamine", "Understand the \"Reward Deficiency Syndrome\"."),
            task!(30, Quiz, 100, "Foundations Exam", "Complete the Foundations knowledge check.", badge: "foundations_scholar"),
        ],
    },
    ChallengeProgram {
        id: "emotional_mastery",
        title: "Emotional Mastery",
        duration: 30,
        category: "Mastery",
        group: ChallengeGroup::Balance,
        description: "Deep dive into Emotional Regulation, RSD, Anxiety, and Identity.",
        tags: &["Emotion", "RSD", "Psychology"],
        phases: &[
            Phase {
                id: 1,
                title: "Emotional Dysregulation",
                days: (1, 7),
                description: "Why feelings are so big.",
            },
            Phase {
                id: 2,
                title: "Understanding RSD",
                days: (8, 14),
                description: "The pain of rejection.",
            },
            Phase {
                id: 3,
                title: "Anxiety vs. ADHD",
                days: (15, 21),
                description: "Untangling the overlap.",
            },
            Phase {
                id: 4,
                title: "Identity & Unmasking",
                days: (22, 30),
                description: "Living authentically.",
            },
        ],
        tasks: &[
            task!(1, Reading, 30, "Read: Emotional Dysregulation", "It is not a character flaw."),
            task!(8, Reading, 30, "Read: What is RSD?", "Rejection Sensitive Dysphoria explained."),
            task!(15, Reading, 30, "Read: The Anxiety Link", "Cognitive Distortions and ADHD."),
            task!(30, Reflection, 100, "Mastery Capstone", "Reflect on your emotional journey.", badge: "emotional_master"),
        ],
    },
    ChallengeProgram {
        id: "neurodiversity_advantage_7_day",
        title: "Neurodiversity Advantage Training",
        duration: 7,
        category: "Identity",
        group: ChallengeGroup::Identity,
        description: "A 7-day intensive journey exploring how autistic people benefit the world, focusing on strengths and positive contributions.",
        tags: &["Autism", "Neurodiversity", "Strengths", "Identity"],
        phases: &[Phase {
            id: 1,
            title: "Strengths & Perspectives",
            days: (1, 7),
            description: "Discovering the power of neurodivergent thinking.",
        }],
        tasks: &[
            task!(1, Reading, 100, "Day 1: Foundations", "Unique Strengths & Perspectives."),
            task!(2, Reading, 100, "Day 2: Logical Thinking", "Deep Dive into Logical Thinking & Problem-Solving."),
            task!(3, Reading, 100, "Day 3: Authenticity", "Authenticity & Integrity in Action."),
            task!(4, Reading, 100, "Day 4: Empathy", "Empathy & Connection (Reimagined)."),
            task!(5, Reading, 100, "Day 5: Creativity", "Creativity & Special Interests as Superpowers."),
            task!(6, Reading, 100, "Day 6: Workplace & Community", "Contributions to Workplace & Community."),
            task!(7, Reflection, 100, "Day 7: Integration", "A Neurodiverse Future.", badge: "neurodiversity_advocate"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::badges::Badge;

    #[test]
    fn test_all_ids_unique() {
        let mut ids: Vec<_> = CHALLENGES.iter().map(|c| c.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total, "All challenge IDs should be unique");
    }

    #[test]
    fn test_task_days_within_duration() {
        for program in CHALLENGES {
            for task in program.tasks {
                assert!(
                    task.day >= 1 && task.day <= program.duration,
                    "{}: task day {} outside 1..={}",
                    program.id,
                    task.day,
                    program.duration
                );
            }
        }
    }

    #[test]
    fn test_task_days_sorted_and_unique() {
        for program in CHALLENGES {
            let days: Vec<u32> = program.tasks.iter().map(|t| t.day).collect();
            let mut sorted = days.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(days, sorted, "{}: task days must be sorted, no duplicates", program.id);
        }
    }

    #[test]
    fn test_badge_references_exist() {
        for program in CHALLENGES {
            for task in program.tasks {
                if let Some(badge) = task.badge {
                    assert!(
                        Badge::get(badge).is_some(),
                        "{}: task \"{}\" references missing badge {}",
                        program.id,
                        task.title,
                        badge
                    );
                }
            }
        }
    }

    #[test]
    fn test_sparse_task_lookup() {
        let theory = ChallengeProgram::get("foundations_theory").unwrap();
        assert!(theory.task_for_day(1).is_some());
        assert!(theory.task_for_day(2).is_none(), "day 2 is a rest day");
        assert_eq!(theory.task_for_day(30).unwrap().badge, Some("foundations_scholar"));
    }

    #[test]
    fn test_phases_cover_durations() {
        for program in CHALLENGES {
            for day in 1..=program.duration {
                assert!(
                    program.phase_for_day(day).is_some(),
                    "{}: day {} not covered by a phase",
                    program.id,
                    day
                );
            }
        }
    }

    #[test]
    fn test_final_day_awards_program_badge() {
        // Every program ends with a badge-carrying task
        for program in CHALLENGES {
            let last = program.task_for_day(program.duration).unwrap();
            assert!(last.badge.is_some(), "{}: final task has no badge", program.id);
        }
    }
}
