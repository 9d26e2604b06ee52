//! Static content catalogs
//!
//! These tables are the app's fixed content: challenge programs, badges,
//! screenings, self-care activities, wellness skills, and the emotion wheel.
//! They carry no behavior beyond lookup and filtering; user state lives in
//! [`crate::progress`].

pub mod badges;
pub mod challenges;
pub mod emotions;
pub mod screenings;
pub mod self_care;
pub mod skills;

pub use badges::{Badge, BADGES};
pub use challenges::{ChallengeGroup, ChallengeProgram, DayTask, Phase, TaskKind, CHALLENGES};
pub use emotions::{ContextTag, Emotion, Polarity, SecondaryFeeling, CONTEXT_TAGS, EMOTIONS};
pub use screenings::{
    AnswerOption, Question, Screening, ScreeningCategory, ScoringBand, SCREENINGS,
};
pub use self_care::{SelfCareActivity, TimeBucket, SELF_CARE_ACTIVITIES};
pub use skills::{SkillCategory, WellnessSkill, WELLNESS_SKILLS};
