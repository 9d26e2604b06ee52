//! Gemini `generateContent` HTTP client
//!
//! Thin client for the Google Generative Language REST endpoint. One
//! request, one response; no streaming, no retry. Operation-level fallbacks
//! live in [`super::Coach`].

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::CoachSettings;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("missing api key: set coach.api_key or the GEMINI_API_KEY environment variable")]
    MissingApiKey,

    #[error("http {status}: {body}")]
    Http { status: u16, body: String },

    #[error("network error: {0}")]
    Transport(String),

    #[error("empty response from the model")]
    EmptyResponse,

    #[error("unexpected response shape: {0}")]
    Json(String),
}

/// Who said a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

/// One turn of a chat conversation
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into() }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self { role: Role::Model, text: text.into() }
    }
}

/// A single generation request
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub prompt: String,
    /// System instruction (chat persona)
    pub system: Option<String>,
    /// Prior turns, oldest first; the prompt is appended as the final user turn
    pub history: Vec<ChatTurn>,
    /// Ask the model for a JSON response body
    pub json: bool,
    pub temperature: Option<f64>,
}

impl GenerateRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), ..Default::default() }
    }

    pub fn json(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), json: true, ..Default::default() }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Seam for the generation backend, so coach logic is testable offline
pub trait TextModel {
    fn generate(&self, request: &GenerateRequest) -> Result<String, CoachError>;
}

/// Client for the Gemini REST endpoint
///
/// The API key is resolved lazily so that operations with offline
/// fallbacks still work (and fall back) when no key is configured.
pub struct GeminiClient {
    endpoint: String,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    /// Build a client from coach settings
    pub fn new(settings: &CoachSettings) -> Self {
        Self {
            endpoint: settings
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            api_key: settings.resolve_api_key(),
            model: settings.model.clone(),
        }
    }

    fn build_body(request: &GenerateRequest) -> Value {
        let mut contents: Vec<Value> = request
            .history
            .iter()
            .map(|turn| {
                json!({
                    "role": turn.role.as_str(),
                    "parts": [{ "text": turn.text }],
                })
            })
            .collect();
        contents.push(json!({
            "role": "user",
            "parts": [{ "text": request.prompt }],
        }));

        let mut body = json!({ "contents": contents });

        if let Some(system) = &request.system {
            body["systemInstruction"] = json!({ "parts": [{ "text": system }] });
        }

        let mut generation_config = serde_json::Map::new();
        if let Some(temperature) = request.temperature {
            generation_config.insert("temperature".into(), json!(temperature));
        }
        if request.json {
            generation_config.insert("responseMimeType".into(), json!("application/json"));
        }
        if !generation_config.is_empty() {
            body["generationConfig"] = Value::Object(generation_config);
        }

        body
    }

    /// Concatenated text of the first candidate's parts
    fn extract_text(response: &Value) -> Result<String, CoachError> {
        let parts = response
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())
            .ok_or_else(|| CoachError::Json("no candidates[0].content.parts".to_string()))?;

        let text: String = parts
            .iter()
            .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
            .collect();

        if text.trim().is_empty() {
            return Err(CoachError::EmptyResponse);
        }
        Ok(text)
    }
}

impl TextModel for GeminiClient {
    fn generate(&self, request: &GenerateRequest) -> Result<String, CoachError> {
        let api_key = self.api_key.as_ref().ok_or(CoachError::MissingApiKey)?;
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, api_key
        );
        let body = Self::build_body(request);

        let response = match ureq::post(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
        {
            Ok(r) => r,
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                return Err(CoachError::Http { status, body });
            }
            Err(e) => return Err(CoachError::Transport(e.to_string())),
        };

        let value: Value = response
            .into_json()
            .map_err(|e| CoachError::Json(e.to_string()))?;
        Self::extract_text(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_body_with_history_and_system() {
        let request = GenerateRequest {
            prompt: "How do I wind down tonight?".to_string(),
            system: Some("You are a coach.".to_string()),
            history: vec![ChatTurn::user("hi"), ChatTurn::model("hello!")],
            json: false,
            temperature: None,
        };
        let body = GeminiClient::build_body(&request);

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["parts"][0]["text"], "How do I wind down tonight?");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "You are a coach.");
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_build_body_json_mode() {
        let body = GeminiClient::build_body(&GenerateRequest::json("give me json").with_temperature(0.9));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["temperature"], 0.9);
    }

    #[test]
    fn test_extract_text() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hello " }, { "text": "there" }] }
            }]
        });
        assert_eq!(GeminiClient::extract_text(&response).unwrap(), "Hello there");

        let empty = json!({ "candidates": [] });
        assert!(GeminiClient::extract_text(&empty).is_err());
    }

    #[test]
    fn test_missing_api_key_fails_at_generate_time() {
        let settings = CoachSettings {
            api_key: Some(String::new()),
            ..Default::default()
        };
        if std::env::var("GEMINI_API_KEY").is_err() {
            let client = GeminiClient::new(&settings);
            assert!(matches!(
                client.generate(&GenerateRequest::text("hi")),
                Err(CoachError::MissingApiKey)
            ));
        }
    }
}
