//! Self-assessment screening catalog
//!
//! Each screening is a fixed question bank plus an ordered list of scoring
//! bands mapping a summed score to a severity level with interpretation and
//! recommendation text. Trait-based quizzes (the autism-traits tools) carry
//! per-question trait labels and no bands; they are summarized per trait
//! instead of banded. See [`crate::scoring`] for the scoring rules.
//!
//! These tools are for self-reflection only and are not diagnostic
//! instruments.

/// An answer option with its ordinal value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerOption {
    pub text: &'static str,
    pub value: u32,
}

/// A single question
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Question {
    pub text: &'static str,
    /// Trait bucket for trait-based quizzes (None for banded screenings)
    pub trait_label: Option<&'static str>,
    pub options: &'static [AnswerOption],
}

/// A scoring band: inclusive `[min, max]` score range mapped to a level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringBand {
    pub level: &'static str,
    pub min: u32,
    pub max: u32,
    pub interpretation: &'static str,
    pub recommendation: &'static str,
}

impl ScoringBand {
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min && score <= self.max
    }
}

/// Screening category, for grouping in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreeningCategory {
    Clinical,
    Personality,
    Wellness,
}

impl ScreeningCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clinical => "clinical",
            Self::Personality => "personality",
            Self::Wellness => "wellness",
        }
    }
}

/// A screening definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screening {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub time_to_complete: &'static str,
    pub category: ScreeningCategory,
    pub source: &'static str,
    pub questions: &'static [Question],
    /// Ordered scoring bands; empty for trait-based quizzes
    pub scoring: &'static [ScoringBand],
}

impl Screening {
    /// Look up a screening by id
    pub fn get(id: &str) -> Option<&'static Screening> {
        SCREENINGS.iter().find(|s| s.id == id)
    }

    /// The largest sum the question set can produce
    pub fn max_sum(&self) -> u32 {
        self.questions
            .iter()
            .map(|q| q.options.iter().map(|o| o.value).max().unwrap_or(0))
            .sum()
    }

    /// True when this screening is summarized per trait rather than banded
    pub fn is_trait_based(&self) -> bool {
        self.scoring.is_empty()
    }
}

// Shared self-help recommendation text, keyed by severity tier.
const REC_GENERAL: &str = "Consider exploring some self-care strategies, like practicing gratitude or trying a new hobby to boost your mood.";
const REC_MILD: &str = "It may be helpful to monitor your mood. Simple practices like deep breathing, journaling your thoughts, or talking to a trusted friend can make a difference.";
const REC_MODERATE: &str = "It is recommended that you discuss your symptoms with a doctor or mental health professional. In the meantime, focusing on 'what you can control' can be helpful, such as maintaining a regular sleep schedule.";
const REC_SEVERE: &str = "It is strongly recommended that you seek help from a doctor or mental health professional. Remember, you are not alone, and help is available. For immediate support, please visit our 'Support' page.";
const REC_IMMEDIATE: &str = "Please seek professional help immediately. Effective treatments are available and can help you feel better.";

// Standard frequency scale used by most clinical screenings.
static FREQUENCY: &[AnswerOption] = &[
    AnswerOption { text: "Not at all", value: 0 },
    AnswerOption { text: "Several days", value: 1 },
    AnswerOption { text: "More than half the days", value: 2 },
    AnswerOption { text: "Nearly every day", value: 3 },
];

// Reversed frequency scale for reverse-keyed items.
static FREQUENCY_REVERSED: &[AnswerOption] = &[
    AnswerOption { text: "Not at all", value: 3 },
    AnswerOption { text: "Several days", value: 2 },
    AnswerOption { text: "More than half the days", value: 1 },
    AnswerOption { text: "Nearly every day", value: 0 },
];

static YES_NO: &[AnswerOption] = &[
    AnswerOption { text: "Yes", value: 1 },
    AnswerOption { text: "No", value: 0 },
];

// Four-point agreement scale for the autism-traits quizzes.
static AGREEMENT: &[AnswerOption] = &[
    AnswerOption { text: "Definitely Agree", value: 3 },
    AnswerOption { text: "Slightly Agree", value: 2 },
    AnswerOption { text: "Slightly Disagree", value: 1 },
    AnswerOption { text: "Definitely Disagree", value: 0 },
];

// Reversed agreement scale for reverse-keyed items.
static AGREEMENT_REVERSED: &[AnswerOption] = &[
    AnswerOption { text: "Definitely Agree", value: 0 },
    AnswerOption { text: "Slightly Agree", value: 1 },
    AnswerOption { text: "Slightly Disagree", value: 2 },
    AnswerOption { text: "Definitely Disagree", value: 3 },
];

macro_rules! q {
    ($text:literal) => {
        Question { text: $text, trait_label: None, options: FREQUENCY }
    };
    ($text:literal, $options:expr) => {
        Question { text: $text, trait_label: None, options: $options }
    };
    ($text:literal, $label:literal, $options:expr) => {
        Question { text: $text, trait_label: Some($label), options: $options }
    };
}

macro_rules! yn {
    ($text:literal) => {
        Question { text: $text, trait_label: None, options: YES_NO }
    };
}

/// All screening definitions
pub static SCREENINGS: &[Screening] = &[
    Screening {
        id: "depression-phq9",
        title: "Depression",
        description: "Reflect on your mood and feelings over the last 2 weeks.",
        time_to_complete: "Approx. 3-5 minutes",
        category: ScreeningCategory::Clinical,
        source: "Based on the PHQ-9",
        questions: &[
            q!("Little interest or pleasure in doing things"),
            q!("Feeling down, depressed, or hopeless"),
            q!("Trouble falling or staying asleep, or sleeping too much"),
            q!("Feeling tired or having little energy"),
            q!("Poor appetite or overeating"),
            q!("Feeling bad about yourself — or that you are a failure or have let yourself or your family down"),
            q!("Trouble concentrating on things, such as reading the newspaper or watching television"),
            q!("Moving or speaking so slowly that other people could have noticed? Or the opposite — being so fidgety or restless that you have been moving around a lot more than usual"),
            q!("Thoughts that you would be better off dead or of hurting yourself in some way"),
        ],
        scoring: &[
            ScoringBand {
                level: "No to Minimal Depression",
                min: 0,
                max: 4,
                interpretation: "Your responses suggest you may be experiencing no to minimal symptoms of depression. It's great to check in with yourself.",
                recommendation: REC_GENERAL,
            },
            ScoringBand {
                level: "Mild Depression",
                min: 5,
                max: 9,
                interpretation: "Your score suggests you may be experiencing mild symptoms of depression. This can affect your daily life but is often manageable.",
                recommendation: REC_MILD,
            },
            ScoringBand {
                level: "Moderate Depression",
                min: 10,
                max: 14,
                interpretation: "Your score suggests you may be experiencing moderate symptoms of depression. These symptoms are likely impacting your daily functioning.",
                recommendation: REC_MODERATE,
            },
            ScoringBand {
                level: "Moderately Severe Depression",
                min: 15,
                max: 19,
                interpretation: "Your score indicates that you may be experiencing moderately severe symptoms of depression, which can significantly interfere with your life.",
                recommendation: REC_SEVERE,
            },
            ScoringBand {
                level: "Severe Depression",
                min: 20,
                max: 27,
                interpretation: "Your responses suggest you may be experiencing severe symptoms of depression. It is highly recommended to seek professional help.",
                recommendation: REC_IMMEDIATE,
            },
        ],
    },
    Screening {
        id: "anxiety-gad7",
        title: "Anxiety",
        description: "Reflect on your anxiety levels over the last 2 weeks.",
        time_to_complete: "Approx. 2-4 minutes",
        category: ScreeningCategory::Clinical,
        source: "Based on the GAD-7",
        questions: &[
            q!("Feeling nervous, anxious, or on edge"),
            q!("Not being able to stop or control worrying"),
            q!("Worrying too much about different things"),
            q!("Trouble relaxing"),
            q!("Being so restless that it is hard to sit still"),
            q!("Becoming easily annoyed or irritable"),
            q!("Feeling afraid as if something awful might happen"),
        ],
        scoring: &[
            ScoringBand {
                level: "Minimal Anxiety",
                min: 0,
                max: 4,
                interpretation: "Your responses suggest you are likely in the minimal anxiety range.",
                recommendation: REC_GENERAL,
            },
            ScoringBand {
                level: "Mild Anxiety",
                min: 5,
                max: 9,
                interpretation: "Your score suggests you may be experiencing mild anxiety.",
                recommendation: REC_MILD,
            },
            ScoringBand {
                level: "Moderate Anxiety",
                min: 10,
                max: 14,
                interpretation: "Your score suggests you may be experiencing moderate anxiety. It may be helpful to talk to a professional.",
                recommendation: REC_MODERATE,
            },
            ScoringBand {
                level: "Severe Anxiety",
                min: 15,
                max: 21,
                interpretation: "Your score indicates severe anxiety. It's highly recommended that you seek support from a mental health professional.",
                recommendation: REC_SEVERE,
            },
        ],
    },
    Screening {
        id: "ptsd-pcl5",
        title: "Trauma & PTSD",
        description: "Screening for Post-Traumatic Stress Disorder based on experiences in the past month.",
        time_to_complete: "Approx. 3-5 minutes",
        category: ScreeningCategory::Clinical,
        source: "Based on the PCL-5",
        questions: &[
            q!("Repeated, disturbing, and unwanted memories of the stressful experience?"),
            q!("Having very upsetting dreams about the stressful experience?"),
            q!("Suddenly feeling or acting as if the stressful experience were actually happening again?"),
            q!("Feeling very upset when something reminded you of the stressful experience?"),
            q!("Avoiding memories, thoughts, or feelings related to the stressful experience?"),
        ],
        scoring: &[
            ScoringBand {
                level: "Low Symptoms",
                min: 0,
                max: 4,
                interpretation: "Your responses suggest a low level of PTSD symptoms.",
                recommendation: REC_GENERAL,
            },
            ScoringBand {
                level: "Mild Symptoms",
                min: 5,
                max: 8,
                interpretation: "Your score suggests you may be experiencing mild symptoms. These are worth monitoring.",
                recommendation: REC_MILD,
            },
            ScoringBand {
                level: "Moderate to Severe Symptoms",
                min: 9,
                max: 15,
                interpretation: "Your score suggests you may be experiencing moderate to severe symptoms of PTSD. Speaking with a professional is recommended.",
                recommendation: REC_MODERATE,
            },
        ],
    },
    Screening {
        id: "adhd-asrs",
        title: "ADHD",
        description: "Identify experiences common in adults with ADHD.",
        time_to_complete: "Approx. 4-6 minutes",
        category: ScreeningCategory::Clinical,
        source: "Based on the ASRS",
        questions: &[
            q!("How often do you have trouble wrapping up the final details of a project, once the challenging parts have been done?"),
            q!("How often do you have difficulty getting things in order when you have to do a task that requires organization?"),
            q!("How often do you have problems remembering appointments or obligations?"),
            q!("When you have a task that requires a lot of thought, how often do you avoid or delay getting started?"),
            q!("How often do you fidget or squirm with your hands or feet when you have to sit down for a long time?"),
            q!("How often do you feel overly active and compelled to do things, like you were driven by a motor?"),
        ],
        scoring: &[
            ScoringBand {
                level: "Unlikely ADHD",
                min: 0,
                max: 7,
                interpretation: "Your responses suggest it is unlikely you are experiencing significant symptoms of adult ADHD.",
                recommendation: REC_GENERAL,
            },
            ScoringBand {
                level: "Possible ADHD",
                min: 8,
                max: 13,
                interpretation: "Your score suggests you may be experiencing some symptoms associated with adult ADHD. It could be beneficial to explore these further.",
                recommendation: REC_MILD,
            },
            ScoringBand {
                level: "Likely ADHD",
                min: 14,
                max: 18,
                interpretation: "Your score suggests you may be experiencing symptoms highly consistent with adult ADHD. A professional evaluation is recommended.",
                recommendation: REC_MODERATE,
            },
        ],
    },
    Screening {
        id: "bipolar-mdq",
        title: "Bipolar",
        description: "Reflect on your mood experiences and energy levels.",
        time_to_complete: "Approx. 3-5 minutes",
        category: ScreeningCategory::Clinical,
        source: "Based on the MDQ",
        questions: &[
            yn!("...you felt so good or so hyper that other people thought you were not your normal self or you were so hyper you got into trouble?"),
            yn!("...you were so irritable that you shouted at people or started fights or arguments?"),
            yn!("...you felt much more self-confident than usual?"),
            yn!("...you got much less sleep than usual and found you didn't really miss it?"),
            yn!("...you were much more talkative or spoke much faster than usual?"),
            yn!("...thoughts raced through your head or you couldn't slow your mind down?"),
            yn!("...you were so easily distracted by things around you that you had trouble concentrating or staying on track?"),
        ],
        scoring: &[
            ScoringBand {
                level: "Negative Screen",
                min: 0,
                max: 3,
                interpretation: "Your responses suggest it's unlikely you have experienced a major manic or hypomanic episode.",
                recommendation: REC_GENERAL,
            },
            ScoringBand {
                level: "Positive Screen",
                min: 4,
                max: 7,
                interpretation: "Your responses suggest that you may have experienced a manic or hypomanic episode. It is highly recommended to discuss these results with a healthcare provider.",
                recommendation: REC_MODERATE,
            },
        ],
    },
    Screening {
        id: "eating-scoff",
        title: "Eating Habits",
        description: "Reflect on attitudes and behaviors around eating.",
        time_to_complete: "Approx. 2 minutes",
        category: ScreeningCategory::Clinical,
        source: "Based on the SCOFF Questionnaire",
        questions: &[
            yn!("Do you make yourself Sick because you feel uncomfortably full?"),
            yn!("Do you worry you have lost Control over how much you eat?"),
            yn!("Have you recently lost more than One stone (14 lbs) in a 3 month period?"),
            yn!("Do you believe yourself to be Fat when others say you are too thin?"),
            yn!("Would you say that Food dominates your life?"),
        ],
        scoring: &[
            ScoringBand {
                level: "Low Likelihood",
                min: 0,
                max: 1,
                interpretation: "Your responses suggest a low likelihood of a current eating disorder.",
                recommendation: REC_GENERAL,
            },
            ScoringBand {
                level: "Possible Concern",
                min: 2,
                max: 5,
                interpretation: "A score of two or more 'Yes' answers indicates a possible concern. It is recommended to speak with a healthcare provider about your eating habits and feelings.",
                recommendation: REC_MODERATE,
            },
        ],
    },
    Screening {
        id: "ocd-y-bocs",
        title: "OCD",
        description: "Reflect on unwanted thoughts or repetitive behaviors.",
        time_to_complete: "Approx. 4-6 minutes",
        category: ScreeningCategory::Clinical,
        source: "Based on the Y-BOCS",
        questions: &[
            q!("How much of your time is occupied by obsessive thoughts?", &[
                AnswerOption { text: "None", value: 0 },
                AnswerOption { text: "Mild (less than 1 hr/day)", value: 1 },
                AnswerOption { text: "Moderate (1-3 hrs/day)", value: 2 },
                AnswerOption { text: "Severe (more than 3 hrs/day)", value: 3 },
            ]),
            q!("How much do these obsessive thoughts interfere with your work, school, social, or other important roles?", SEVERITY),
            q!("How much distress do your obsessive thoughts cause you?", SEVERITY),
            q!("How much of your time is spent performing compulsive behaviors?", &[
                AnswerOption { text: "None", value: 0 },
                AnswerOption { text: "Mild (less than 1 hr/day)", value: 1 },
                AnswerOption { text: "Moderate (1-3 hrs/day)", value: 2 },
                AnswerOption { text: "Severe (more than 3 hrs/day)", value: 3 },
            ]),
            q!("How much do your compulsive behaviors interfere with your daily life?", SEVERITY),
        ],
        scoring: &[
            ScoringBand {
                level: "Subclinical",
                min: 0,
                max: 7,
                interpretation: "Your score falls within the subclinical range.",
                recommendation: REC_GENERAL,
            },
            ScoringBand {
                level: "Mild",
                min: 8,
                max: 15,
                interpretation: "Your score suggests you may be experiencing mild symptoms of OCD.",
                recommendation: REC_MILD,
            },
            ScoringBand {
                level: "Moderate",
                min: 16,
                max: 23,
                interpretation: "Your score suggests you may be experiencing moderate symptoms of OCD. A professional consultation is recommended.",
                recommendation: REC_MODERATE,
            },
            ScoringBand {
                level: "Severe",
                min: 24,
                max: 30,
                interpretation: "Your score indicates severe symptoms of OCD. Please seek support from a mental health professional.",
                recommendation: REC_SEVERE,
            },
        ],
    },
    Screening {
        id: "bpd-msi-bpd",
        title: "Borderline Traits",
        description: "Reflect on long-term patterns in relationships and self-image.",
        time_to_complete: "Approx. 4-6 minutes",
        category: ScreeningCategory::Clinical,
        source: "Based on the MSI-BPD",
        questions: &[
            yn!("Have you had a lot of unstable and intense relationships?"),
            yn!("Have you often felt \"empty\" inside?"),
            yn!("Have you made frantic efforts to avoid real or imagined abandonment?"),
            yn!("Have you had repeated suicidal thoughts, gestures, or self-harming behaviors?"),
            yn!("Do you have a pattern of chronic feelings of anger, often with a hard time controlling it?"),
            yn!("Do you have a very unstable self-image or sense of who you are?"),
            yn!("Have you been impulsive in ways that are potentially self-damaging (e.g., spending, substance use, reckless driving)?"),
        ],
        scoring: &[
            ScoringBand {
                level: "Low Likelihood",
                min: 0,
                max: 3,
                interpretation: "Your responses suggest a low likelihood of borderline personality traits being a primary concern.",
                recommendation: REC_GENERAL,
            },
            ScoringBand {
                level: "Possible Concern",
                min: 4,
                max: 7,
                interpretation: "Your score suggests you may experience several traits associated with BPD. It is recommended that you discuss these patterns with a mental health professional.",
                recommendation: REC_MODERATE,
            },
        ],
    },
    Screening {
        id: "psychosis-pq-b",
        title: "Unusual Experiences",
        description: "A brief screen for unusual experiences that may indicate a risk for psychosis.",
        time_to_complete: "Approx. 3-5 minutes",
        category: ScreeningCategory::Clinical,
        source: "Based on the PQ-B",
        questions: &[
            yn!("Have you had experiences with hearing voices that other people do not seem to hear?"),
            yn!("Have you ever believed that people were spying on you or plotting against you?"),
            yn!("Have you ever felt that you were being sent special messages through the TV or radio?"),
            yn!("Have your thoughts ever felt jumbled or like you could not control them?"),
            yn!("Have you ever felt that you have special powers that other people do not have?"),
        ],
        scoring: &[
            ScoringBand {
                level: "Low Risk",
                min: 0,
                max: 1,
                interpretation: "Your responses suggest a low likelihood of experiencing symptoms related to psychosis.",
                recommendation: REC_GENERAL,
            },
            ScoringBand {
                level: "Further Evaluation Recommended",
                min: 2,
                max: 5,
                interpretation: "Your responses indicate you may be having unusual experiences that warrant a discussion with a mental health professional.",
                recommendation: REC_MODERATE,
            },
        ],
    },
    Screening {
        id: "addiction-cage",
        title: "Substance Use",
        description: "A brief screening tool for potential problems with substance use.",
        time_to_complete: "Approx. 2 minutes",
        category: ScreeningCategory::Clinical,
        source: "Based on the CAGE Questionnaire",
        questions: &[
            yn!("Have you ever felt you should Cut down on your drinking or drug use?"),
            yn!("Have people Annoyed you by criticizing your drinking or drug use?"),
            yn!("Have you ever felt bad or Guilty about your drinking or drug use?"),
            yn!("Have you ever had a drink or used drugs first thing in the morning to steady your nerves or get rid of a hangover (Eye-opener)?"),
        ],
        scoring: &[
            ScoringBand {
                level: "Low Risk",
                min: 0,
                max: 1,
                interpretation: "Your answers suggest a low likelihood of a current substance use problem.",
                recommendation: REC_GENERAL,
            },
            ScoringBand {
                level: "High Suspicion",
                min: 2,
                max: 4,
                interpretation: "Two or more 'Yes' answers is a strong indicator of a potential substance use problem. It is highly recommended to speak with a healthcare provider or a specialist.",
                recommendation: REC_MODERATE,
            },
        ],
    },
    Screening {
        id: "asd-short",
        title: "Autism Traits (Short)",
        description: "A brief, informal tool to explore traits sometimes associated with the autism spectrum.",
        time_to_complete: "Approx. 5-7 minutes",
        category: ScreeningCategory::Clinical,
        source: "Based on the AQ-10",
        questions: &[
            q!("I find it difficult to imagine what it would be like to be someone else.", "Social", AGREEMENT),
            q!("I often find it hard to judge if someone is rude or polite.", "Social", AGREEMENT),
            q!("I find it hard to 'read between the lines' when someone is talking to me.", "Communication", AGREEMENT),
            q!("When I'm talking, other people may find it hard to get a word in edgewise.", "Communication", AGREEMENT),
            q!("I tend to have very strong interests, which I get upset about if I can't pursue.", "Patterns", AGREEMENT),
            q!("I notice patterns in things all the time.", "Patterns", AGREEMENT),
            q!("I am sensitive to the sound of a light buzzing or humming.", "Sensory", AGREEMENT),
            q!("I dislike the texture of certain clothing on my skin.", "Sensory", AGREEMENT),
        ],
        scoring: &[],
    },
    Screening {
        id: "asd-long",
        title: "Autism Traits (Comprehensive)",
        description: "A detailed informal tool to explore traits associated with the autism spectrum.",
        time_to_complete: "Approx. 15-20 minutes",
        category: ScreeningCategory::Clinical,
        source: "Based on the Autism-Spectrum Quotient",
        questions: &[
            q!("I find it difficult to imagine what it would be like to be someone else.", "Social", AGREEMENT),
            q!("I find social situations easy.", "Social", AGREEMENT_REVERSED),
            q!("I often find it hard to judge if someone is rude or polite.", "Social", AGREEMENT),
            q!("I find it easy to understand what others are thinking or feeling just by looking at their face.", "Social", AGREEMENT_REVERSED),
            q!("I enjoy meeting new people.", "Social", AGREEMENT_REVERSED),
            q!("I enjoy social chitchat.", "Communication", AGREEMENT_REVERSED),
            q!("I find it hard to 'read between the lines' when someone is talking to me.", "Communication", AGREEMENT),
            q!("When I'm talking, other people may find it hard to get a word in edgewise.", "Communication", AGREEMENT),
            q!("I am often the last to understand a joke.", "Communication", AGREEMENT),
            q!("I find it easy to work out what someone is thinking or feeling from their tone of voice.", "Communication", AGREEMENT_REVERSED),
            q!("I am fascinated by dates.", "Patterns", AGREEMENT),
            q!("I tend to have very strong interests, which I get upset about if I can't pursue.", "Patterns", AGREEMENT),
            q!("I notice patterns in things all the time.", "Patterns", AGREEMENT),
            q!("I prefer to do things the same way over and over again.", "Patterns", AGREEMENT),
            q!("It does not upset me if my daily routine is disturbed.", "Patterns", AGREEMENT_REVERSED),
            q!("I am sensitive to the sound of a light buzzing or humming.", "Sensory", AGREEMENT),
            q!("The smell of certain foods can be overwhelming for me.", "Sensory", AGREEMENT),
            q!("I dislike the texture of certain clothing on my skin.", "Sensory", AGREEMENT),
            q!("I enjoy the sensation of labels on clothes.", "Sensory", AGREEMENT_REVERSED),
            q!("I find bright lights to be uncomfortably intense.", "Sensory", AGREEMENT),
        ],
        scoring: &[],
    },
    Screening {
        id: "attachment-style",
        title: "Attachment Style",
        description: "Discover your primary attachment style in relationships.",
        time_to_complete: "Approx. 5 minutes",
        category: ScreeningCategory::Personality,
        source: "Inspired by work of Bowlby & Ainsworth",
        questions: &[
            q!("I find it relatively easy to get close to others and am comfortable depending on them.", &[
                AnswerOption { text: "Agree", value: 1 },
                AnswerOption { text: "Disagree", value: 0 },
            ]),
            q!("I often worry that my partner doesn't really love me or won't want to stay with me.", &[
                AnswerOption { text: "Agree", value: 2 },
                AnswerOption { text: "Disagree", value: 0 },
            ]),
            q!("I am somewhat uncomfortable being close to others; I find it difficult to trust them completely.", &[
                AnswerOption { text: "Agree", value: 3 },
                AnswerOption { text: "Disagree", value: 0 },
            ]),
            q!("I want to get emotionally close to others, but I often find that others are reluctant to get as close as I would like.", &[
                AnswerOption { text: "Agree", value: 2 },
                AnswerOption { text: "Disagree", value: 0 },
            ]),
            q!("I find it difficult to depend on others. I prefer it when people don't depend on me.", &[
                AnswerOption { text: "Agree", value: 3 },
                AnswerOption { text: "Disagree", value: 0 },
            ]),
            q!("I don't worry about being alone or having others not accept me.", &[
                AnswerOption { text: "Agree", value: 1 },
                AnswerOption { text: "Disagree", value: 0 },
            ]),
        ],
        // These point bands are intentionally narrow; sums between them are
        // rejected by the scorer and flagged by `bloom verify` as gaps.
        scoring: &[
            ScoringBand {
                level: "Secure",
                min: 2,
                max: 2,
                interpretation: "You likely have a secure attachment style. You are comfortable with intimacy, and you are not worried about being abandoned. You value relationships but also maintain a strong sense of self.",
                recommendation: "Nurture your relationships while continuing to build your independence and self-awareness.",
            },
            ScoringBand {
                level: "Anxious-Preoccupied",
                min: 4,
                max: 4,
                interpretation: "You may have an anxious-preoccupied attachment style. You desire a high level of intimacy, approval, and responsiveness from partners, becoming overly dependent. You may be less trusting and experience more emotional highs and lows in your relationships.",
                recommendation: "Practice self-soothing techniques and focus on building your self-esteem outside of your relationships.",
            },
            ScoringBand {
                level: "Dismissive-Avoidant",
                min: 6,
                max: 6,
                interpretation: "You might have a dismissive-avoidant attachment style. You tend to be emotionally distant in relationships and see yourself as self-sufficient and independent. You may suppress your feelings and avoid emotional closeness.",
                recommendation: "Gently explore your feelings and practice expressing them in a safe environment. Consider the benefits of emotional vulnerability.",
            },
        ],
    },
    Screening {
        id: "burnout-inventory",
        title: "Burnout",
        description: "Assess your level of work-related burnout.",
        time_to_complete: "Approx. 4-6 minutes",
        category: ScreeningCategory::Wellness,
        source: "Based on the Maslach Burnout Inventory",
        questions: &[
            q!("I feel emotionally drained from my work."),
            q!("I feel used up at the end of the workday."),
            q!("I feel fatigued when I get up in the morning and have to face another day on the job."),
            q!("I have become more cynical or detached from my work."),
            q!("I doubt the significance of my work."),
        ],
        scoring: &[
            ScoringBand {
                level: "Low Burnout",
                min: 0,
                max: 4,
                interpretation: "Your responses suggest a low level of burnout.",
                recommendation: "Continue to practice self-care and maintain a healthy work-life balance.",
            },
            ScoringBand {
                level: "Mild Burnout",
                min: 5,
                max: 8,
                interpretation: "You may be experiencing mild symptoms of burnout. It is important to address these feelings.",
                recommendation: "Consider setting boundaries at work and ensuring you have time for restorative activities.",
            },
            ScoringBand {
                level: "High Risk of Burnout",
                min: 9,
                max: 15,
                interpretation: "Your score indicates a high risk of burnout. It is strongly recommended to take action.",
                recommendation: "Please consider speaking with a supervisor, mentor, or mental health professional about your work-related stress.",
            },
        ],
    },
    Screening {
        id: "self-esteem-scale",
        title: "Self-Esteem",
        description: "Reflect on your feelings of self-worth.",
        time_to_complete: "Approx. 3-5 minutes",
        category: ScreeningCategory::Wellness,
        source: "Based on the Rosenberg Self-Esteem Scale",
        questions: &[
            q!("I feel that I am a person of worth, at least on an equal plane with others."),
            q!("I feel that I have a number of good qualities."),
            q!("All in all, I am inclined to feel that I am a failure.", FREQUENCY_REVERSED),
            q!("I am able to do things as well as most other people."),
            q!("I take a positive attitude toward myself."),
            q!("On the whole, I am satisfied with myself."),
        ],
        // Bands declared highest-first; the scorer scans in declared order.
        scoring: &[
            ScoringBand {
                level: "Healthy Self-Esteem",
                min: 15,
                max: 18,
                interpretation: "Your responses suggest a healthy level of self-esteem.",
                recommendation: "Continue to practice self-compassion and recognize your strengths.",
            },
            ScoringBand {
                level: "Moderate Self-Esteem",
                min: 8,
                max: 14,
                interpretation: "You may have some challenges with self-esteem.",
                recommendation: "Try to focus on your positive qualities and practice self-affirmations.",
            },
            ScoringBand {
                level: "Low Self-Esteem",
                min: 0,
                max: 7,
                interpretation: "Your score suggests you may be struggling with low self-esteem.",
                recommendation: "It can be very helpful to explore these feelings with a friend, family member, or mental health professional.",
            },
        ],
    },
];

// Plain four-point severity scale (Y-BOCS interference/distress items).
static SEVERITY: &[AnswerOption] = &[
    AnswerOption { text: "None", value: 0 },
    AnswerOption { text: "Mild", value: 1 },
    AnswerOption { text: "Moderate", value: 2 },
    AnswerOption { text: "Severe", value: 3 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ids_unique() {
        let mut ids: Vec<_> = SCREENINGS.iter().map(|s| s.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total, "All screening IDs should be unique");
    }

    #[test]
    fn test_question_counts() {
        assert_eq!(Screening::get("depression-phq9").unwrap().questions.len(), 9);
        assert_eq!(Screening::get("anxiety-gad7").unwrap().questions.len(), 7);
        assert_eq!(Screening::get("asd-long").unwrap().questions.len(), 20);
    }

    #[test]
    fn test_max_sum() {
        // PHQ-9: 9 questions x max 3
        assert_eq!(Screening::get("depression-phq9").unwrap().max_sum(), 27);
        // CAGE: 4 yes/no questions
        assert_eq!(Screening::get("addiction-cage").unwrap().max_sum(), 4);
    }

    #[test]
    fn test_bands_are_well_formed() {
        for screening in SCREENINGS.iter().filter(|s| !s.is_trait_based()) {
            for band in screening.scoring {
                assert!(band.min <= band.max, "{}: band '{}'", screening.id, band.level);
            }
        }
    }

    #[test]
    fn test_trait_quizzes_have_traits_on_every_question() {
        for id in ["asd-short", "asd-long"] {
            let quiz = Screening::get(id).unwrap();
            assert!(quiz.is_trait_based());
            assert!(quiz.questions.iter().all(|q| q.trait_label.is_some()));
        }
    }
}
