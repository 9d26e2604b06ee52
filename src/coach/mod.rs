//! The AI wellness coach
//!
//! Wraps a [`TextModel`] backend (the Gemini client in production) with the
//! app's operation catalog: affirmations, generated articles, guided
//! exercises, chat, quiz generation, and personalized insights.
//!
//! Error policy mirrors the rest of the app's external calls: failures are
//! logged and degrade to a documented fallback where one exists; operations
//! without a sensible fallback propagate the error. JSON-shaped responses
//! are fence-stripped and shape-checked before use; a malformed payload is
//! treated the same as a failed call.

mod gemini;
pub mod prompts;

pub use gemini::{ChatTurn, CoachError, GeminiClient, GenerateRequest, Role, TextModel};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::MoodEntry;
use crate::progress::ScreeningResultRecord;

/// Fallback affirmation when the model is unreachable
const FALLBACK_AFFIRMATION: &str = "You are capable of amazing things.";

/// Fallback gratitude prompt
const FALLBACK_GRATITUDE: &str = "What is one thing that made you smile today?";

/// Fallback insights text when there is no data or no model
const FALLBACK_INSIGHTS: &str =
    "Not enough data to generate insights yet. Keep logging your moods and activities!";

/// A guided exercise: a title plus ordered steps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionPlan {
    pub title: String,
    pub steps: Vec<String>,
}

/// One self-care idea from the ideas operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelfCareIdea {
    pub title: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct IdeasPayload {
    ideas: Vec<SelfCareIdea>,
}

/// A coach-generated quiz, in the shape the prompt requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedQuiz {
    /// Assigned locally after parsing, not trusted from the model
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "timeToComplete", default)]
    pub time_to_complete: String,
    #[serde(default)]
    pub source: String,
    pub questions: Vec<String>,
    pub scoring: Vec<GeneratedBand>,
}

/// A scoring band in a generated quiz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedBand {
    pub range: [u32; 2],
    pub level: String,
    pub interpretation: String,
    pub recommendation: String,
}

/// The AI wellness coach
pub struct Coach<M> {
    model: M,
    affirmation_temperature: f64,
}

impl Coach<GeminiClient> {
    /// Build a coach backed by the Gemini client from app config
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: GeminiClient::new(&config.coach),
            affirmation_temperature: config.coach.affirmation_temperature,
        }
    }
}

impl<M: TextModel> Coach<M> {
    /// Build a coach over any backend (tests use a canned one)
    pub fn with_model(model: M) -> Self {
        Self {
            model,
            affirmation_temperature: 0.9,
        }
    }

    /// A short daily affirmation
    pub fn daily_affirmation(&self) -> String {
        let request = GenerateRequest::text(prompts::affirmation())
            .with_temperature(self.affirmation_temperature);
        match self.model.generate(&request) {
            Ok(text) => text.trim().replace('"', ""),
            Err(e) => {
                warn!("affirmation failed: {e}");
                FALLBACK_AFFIRMATION.to_string()
            }
        }
    }

    /// A short uplifting blog post about a topic, in markdown
    pub fn blog_post(&self, topic: &str) -> String {
        match self.model.generate(&GenerateRequest::text(prompts::blog_post(topic))) {
            Ok(text) => text,
            Err(e) => {
                warn!("blog post failed: {e}");
                format!(
                    "# Error Generating Article\n\nSorry, we couldn't generate an article on \"{topic}\" at this time. Please try again later."
                )
            }
        }
    }

    /// Title of a generated blog post (the `# Title` first line), if present
    pub fn blog_title(markdown: &str) -> Option<&str> {
        static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#\s+(.+)$").expect("title regex"));
        TITLE
            .captures(markdown)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim())
    }

    /// Educational content about a topic for a given audience
    pub fn educational(&self, topic: &str, audience: &str) -> String {
        match self
            .model
            .generate(&GenerateRequest::text(prompts::educational(topic, audience)))
        {
            Ok(text) => text,
            Err(e) => {
                warn!("educational content failed: {e}");
                format!(
                    "We're sorry, but we couldn't generate content for \"{topic}\" right now. Please check back later."
                )
            }
        }
    }

    /// A guided step-by-step exercise for a skill
    ///
    /// A malformed or unparseable payload falls back to a generic exercise.
    pub fn action_plan(&self, skill: &str) -> ActionPlan {
        let fallback = ActionPlan {
            title: format!("An Exercise for {skill}"),
            steps: vec![
                "Take a deep breath.".to_string(),
                "Focus on your current surroundings.".to_string(),
                "Acknowledge your feelings without judgment.".to_string(),
                "Think of one small, positive action you can take right now.".to_string(),
            ],
        };

        let raw = match self.model.generate(&GenerateRequest::json(prompts::action_plan(skill))) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("action plan failed: {e}");
                return fallback;
            }
        };

        match parse_json::<ActionPlan>(&raw) {
            Ok(plan) if !plan.title.is_empty() && !plan.steps.is_empty() => plan,
            Ok(_) | Err(_) => {
                warn!("action plan payload not in the expected shape");
                fallback
            }
        }
    }

    /// Three self-care ideas for a feeling; no fallback, errors propagate
    pub fn self_care_ideas(&self, feeling: &str) -> Result<Vec<SelfCareIdea>, CoachError> {
        let raw = self
            .model
            .generate(&GenerateRequest::json(prompts::self_care_ideas(feeling)))?;
        let payload: IdeasPayload = parse_json(&raw)?;
        Ok(payload.ideas)
    }

    /// One chat turn with the coach persona; errors propagate
    pub fn chat(&self, history: &[ChatTurn], message: &str) -> Result<String, CoachError> {
        let request = GenerateRequest {
            prompt: message.to_string(),
            system: Some(prompts::CHAT_SYSTEM_INSTRUCTION.to_string()),
            history: history.to_vec(),
            json: false,
            temperature: None,
        };
        self.model.generate(&request)
    }

    /// Free-form deep dive; errors propagate to the caller
    pub fn deep_dive(&self, prompt: &str) -> Result<String, CoachError> {
        self.model.generate(&GenerateRequest::text(prompt))
    }

    /// Generate a quiz about a topic; None when generation or parsing fails
    pub fn generate_quiz(&self, topic: &str) -> Option<GeneratedQuiz> {
        let raw = match self.model.generate(&GenerateRequest::json(prompts::generate_quiz(topic))) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("quiz generation failed: {e}");
                return None;
            }
        };
        match parse_json::<GeneratedQuiz>(&raw) {
            Ok(mut quiz) if quiz.questions.len() == 5 && !quiz.scoring.is_empty() => {
                quiz.id = format!("gen-{}", Uuid::new_v4());
                Some(quiz)
            }
            Ok(_) => {
                warn!("generated quiz not in the expected shape");
                None
            }
            Err(e) => {
                warn!("generated quiz failed to parse: {e}");
                None
            }
        }
    }

    /// A gratitude journal prompt
    pub fn gratitude_prompt(&self) -> String {
        match self.model.generate(&GenerateRequest::text(prompts::gratitude_prompt())) {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!("gratitude prompt failed: {e}");
                FALLBACK_GRATITUDE.to_string()
            }
        }
    }

    /// Personalized insights from recent activity
    pub fn insights(&self, moods: &[MoodEntry], history: &[ScreeningResultRecord]) -> String {
        if moods.is_empty() && history.is_empty() {
            return FALLBACK_INSIGHTS.to_string();
        }
        match self
            .model
            .generate(&GenerateRequest::text(prompts::insights(moods, history)))
        {
            Ok(text) => text,
            Err(e) => {
                warn!("insights failed: {e}");
                FALLBACK_INSIGHTS.to_string()
            }
        }
    }
}

/// Strip markdown code fences and parse a JSON payload
///
/// Models sometimes wrap "JSON only" responses in ```json fences despite
/// instructions; tolerate that before giving up.
fn parse_json<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, CoachError> {
    static FENCE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?s)^\s*```(?:json)?\s*(.*?)\s*```\s*$").expect("fence regex"));

    let trimmed = raw.trim();
    let body = FENCE
        .captures(trimmed)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(trimmed);

    serde_json::from_str(body).map_err(|e| CoachError::Json(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Canned backend: returns a fixed response or error
    struct Canned(Result<String, ()>);

    impl TextModel for Canned {
        fn generate(&self, _request: &GenerateRequest) -> Result<String, CoachError> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(CoachError::Transport("offline".to_string())),
            }
        }
    }

    fn coach(response: &str) -> Coach<Canned> {
        Coach::with_model(Canned(Ok(response.to_string())))
    }

    fn offline() -> Coach<Canned> {
        Coach::with_model(Canned(Err(())))
    }

    #[test]
    fn test_affirmation_strips_quotes() {
        assert_eq!(
            coach("\"You are enough.\"\n").daily_affirmation(),
            "You are enough."
        );
    }

    #[test]
    fn test_affirmation_fallback() {
        assert_eq!(offline().daily_affirmation(), FALLBACK_AFFIRMATION);
    }

    #[test]
    fn test_action_plan_happy_path() {
        let plan = coach(r#"{ "title": "Box Breathing", "steps": ["Inhale 4", "Hold 4"] }"#)
            .action_plan("anxiety");
        assert_eq!(plan.title, "Box Breathing");
        assert_eq!(plan.steps.len(), 2);
    }

    #[test]
    fn test_action_plan_strips_fences() {
        let plan = coach("```json\n{ \"title\": \"T\", \"steps\": [\"s\"] }\n```")
            .action_plan("focus");
        assert_eq!(plan.title, "T");
    }

    #[test]
    fn test_action_plan_fallback_on_bad_shape() {
        // Parseable JSON, wrong shape
        let plan = coach(r#"{ "name": "nope" }"#).action_plan("grounding");
        assert_eq!(plan.title, "An Exercise for grounding");
        assert_eq!(plan.steps.len(), 4);

        // Right shape but empty steps is also rejected
        let plan = coach(r#"{ "title": "T", "steps": [] }"#).action_plan("grounding");
        assert_eq!(plan.title, "An Exercise for grounding");
    }

    #[test]
    fn test_self_care_ideas_propagates_errors() {
        assert!(offline().self_care_ideas("tired").is_err());

        let ideas = coach(r#"{ "ideas": [{ "title": "Tea", "steps": ["Boil water"] }] }"#)
            .self_care_ideas("tired")
            .unwrap();
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].title, "Tea");
    }

    #[test]
    fn test_generate_quiz_assigns_local_id() {
        let raw = r#"{
            "title": "Sleep Assessment",
            "description": "A quick check-in on your sleep.",
            "timeToComplete": "2 mins",
            "source": "AI Generated",
            "questions": ["q1", "q2", "q3", "q4", "q5"],
            "scoring": [
                { "range": [0, 5], "level": "Low", "interpretation": "i", "recommendation": "r" }
            ]
        }"#;
        let quiz = coach(raw).generate_quiz("sleep").unwrap();
        assert!(quiz.id.starts_with("gen-"));
        assert_eq!(quiz.questions.len(), 5);
    }

    #[test]
    fn test_generate_quiz_rejects_wrong_question_count() {
        let raw = r#"{
            "title": "T", "description": "d",
            "questions": ["q1"],
            "scoring": [{ "range": [0, 5], "level": "L", "interpretation": "i", "recommendation": "r" }]
        }"#;
        assert!(coach(raw).generate_quiz("sleep").is_none());
        assert!(offline().generate_quiz("sleep").is_none());
    }

    #[test]
    fn test_insights_without_data_short_circuits() {
        // Even offline, an empty history gives the canned message
        assert_eq!(offline().insights(&[], &[]), FALLBACK_INSIGHTS);
    }

    #[test]
    fn test_blog_title_extraction() {
        let markdown = "# Setting Boundaries\n\nBody text.";
        assert_eq!(Coach::<Canned>::blog_title(markdown), Some("Setting Boundaries"));
        assert_eq!(Coach::<Canned>::blog_title("no title here"), None);
    }

    #[test]
    fn test_blog_post_fallback_names_topic() {
        let post = offline().blog_post("self-compassion");
        assert!(post.starts_with("# Error Generating Article"));
        assert!(post.contains("self-compassion"));
    }
}
