//! Prompt catalog for the coach
//!
//! The exact wording matters: several prompts instruct the model to return
//! a specific JSON shape that [`super::Coach`] then checks before use.

use crate::domain::MoodEntry;
use crate::progress::ScreeningResultRecord;

/// System instruction for the chat coach persona
pub const CHAT_SYSTEM_INSTRUCTION: &str = "You are a friendly and supportive AI wellness coach. Your goal is to listen, offer encouragement, and provide general wellness tips. Do not provide medical advice. Keep your responses concise.";

pub fn affirmation() -> String {
    "Generate a short, positive affirmation for the day.".to_string()
}

pub fn blog_post(topic: &str) -> String {
    format!(
        "Write a short, uplifting blog post about \"{topic}\". Start with a title on the first line, like \"# My Title\".\n\
         The tone should be supportive and informative.\n\n\
         You MUST include the following sections at the end:\n\n\
         **Actionable Item**\n\
         Give one specific, easy-to-do action that supports the concept.\n\n\
         **Quick Examples**\n\
         Give 2 or 3 quick, 30-second examples of how to apply this.\n\n\
         **Journal Prompt**\n\
         Provide a specific question for the user to reflect on or a commitment they can make."
    )
}

pub fn educational(topic: &str, audience: &str) -> String {
    format!(
        "Write a brief, easy-to-understand educational piece about \"{topic}\". The target audience is \"{audience}\". \
         The tone should be empathetic, supportive, and informative, avoiding clinical jargon. Focus on explaining the topic, \
         common symptoms or feelings, and a message of hope and where to find help. Do not provide medical advice."
    )
}

pub fn action_plan(skill: &str) -> String {
    format!(
        "Create a simple, step-by-step guided exercise for a user who wants help with \"{skill}\". \
         Return ONLY valid JSON with this structure: {{ \"title\": \"string\", \"steps\": [\"string\", \"string\"] }}. \
         Do not wrap in markdown code blocks."
    )
}

pub fn self_care_ideas(feeling: &str) -> String {
    format!(
        "Generate 3 simple, actionable self-care ideas for someone who is feeling {feeling}. \
         Return ONLY valid JSON with this structure: {{ \"ideas\": [{{ \"title\": \"string\", \"steps\": [\"string\"] }}] }}."
    )
}

pub fn generate_quiz(topic: &str) -> String {
    format!(
        "Create a short, engaging 5-question self-assessment quiz about \"{topic}\".\n\
         Return ONLY valid JSON with this structure:\n\
         {{\n\
             \"title\": \"{topic} Assessment\",\n\
             \"description\": \"A quick check-in on your {topic}.\",\n\
             \"timeToComplete\": \"2 mins\",\n\
             \"source\": \"AI Generated\",\n\
             \"questions\": [\"Question 1\", \"Question 2\", \"Question 3\", \"Question 4\", \"Question 5\"],\n\
             \"scoring\": [\n\
                 {{ \"range\": [0, 5], \"level\": \"Low\", \"interpretation\": \"Seems low.\", \"recommendation\": \"Keep it up.\" }},\n\
                 {{ \"range\": [6, 15], \"level\": \"Medium\", \"interpretation\": \"Moderate levels.\", \"recommendation\": \"Monitor closely.\" }},\n\
                 {{ \"range\": [16, 25], \"level\": \"High\", \"interpretation\": \"High levels.\", \"recommendation\": \"Seek support.\" }}\n\
             ]\n\
         }}"
    )
}

pub fn gratitude_prompt() -> String {
    "Generate a unique, thought-provoking gratitude journal prompt. Return raw text only.".to_string()
}

pub fn insights(moods: &[MoodEntry], history: &[ScreeningResultRecord]) -> String {
    let moods_json = serde_json::to_string(&moods.iter().take(5).collect::<Vec<_>>())
        .unwrap_or_else(|_| "[]".to_string());
    let history_json = serde_json::to_string(&history.iter().take(3).collect::<Vec<_>>())
        .unwrap_or_else(|_| "[]".to_string());
    format!(
        "Analyze this user data and provide 3 personalized mental wellness insights/suggestions.\n\n\
         Recent Moods: {moods_json}\n\
         Assessment History: {history_json}\n\n\
         Format as a markdown list. Be encouraging and specific. Use bolding for key terms."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_prompts_name_their_shape() {
        assert!(action_plan("grounding").contains("\"title\""));
        assert!(action_plan("grounding").contains("\"steps\""));
        assert!(self_care_ideas("overwhelmed").contains("\"ideas\""));
        assert!(generate_quiz("sleep").contains("\"scoring\""));
    }

    #[test]
    fn test_insights_embeds_data() {
        let prompt = insights(&[], &[]);
        assert!(prompt.contains("Recent Moods: []"));
        assert!(prompt.contains("Assessment History: []"));
    }
}
