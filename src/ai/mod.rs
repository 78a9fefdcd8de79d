//! Chat-completion client for the AI-assisted analyzers.
//!
//! One blocking request per call, no retries. Callers consume the explicit
//! `Result`: a failure selects the analyzer's local fallback rather than
//! aborting the analysis.

use serde_json::json;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Only the head of the content is sent upstream.
const CONTENT_EXCERPT_CHARS: usize = 2000;
/// Display-size cap applied to the reply before it becomes an issue string.
const COMMENTARY_CHARS: usize = 100;

/// Error from the external completion service
#[derive(Debug, Error)]
pub enum AiError {
    #[error("API key not configured")]
    MissingApiKey,
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Rate limited - try again later")]
    RateLimited,
    #[error("API error {status}: {body}")]
    ApiError { status: u16, body: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Which analyzer the commentary is for; selects the prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiTask {
    SerpCompetitiveness,
    Differentiation,
}

impl AiTask {
    fn system_instruction(self) -> &'static str {
        match self {
            AiTask::SerpCompetitiveness => {
                "You are a search-ranking analyst. Be terse and concrete."
            }
            AiTask::Differentiation => {
                "You are a content strategist judging originality. Be terse and concrete."
            }
        }
    }

    fn user_prompt(self, excerpt: &str) -> String {
        match self {
            AiTask::SerpCompetitiveness => format!(
                "In one sentence, name the biggest weakness of this content against \
                 pages already ranking for its topic:\n\n{}",
                excerpt
            ),
            AiTask::Differentiation => format!(
                "In one sentence, say what would make this content stand out from \
                 generic coverage of the same topic:\n\n{}",
                excerpt
            ),
        }
    }
}

/// Client for an OpenAI-compatible chat-completions endpoint
pub struct AiClient {
    api_key: String,
    model: String,
    base_url: String,
}

impl AiClient {
    /// Create a client with an explicit API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the model to use
    pub fn model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Point at a different completions endpoint
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Ask for one line of commentary on the content. Sends the first
    /// ~2000 characters; returns the reply capped at ~100 characters.
    pub fn commentary(&self, task: AiTask, content: &str) -> Result<String, AiError> {
        if self.api_key.is_empty() {
            return Err(AiError::MissingApiKey);
        }

        let excerpt = truncate_chars(content, CONTENT_EXCERPT_CHARS);
        let body = json!({
            "model": self.model,
            "max_tokens": 150,
            "messages": [
                { "role": "system", "content": task.system_instruction() },
                { "role": "user", "content": task.user_prompt(&excerpt) }
            ]
        });

        let client = reqwest::blocking::Client::new();
        let response = client
            .post(&self.base_url)
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = response
            .json()
            .map_err(|e| AiError::InvalidResponse(e.to_string()))?;

        let content = json["choices"]
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or_else(|| AiError::InvalidResponse("No content in response".to_string()))?;

        Ok(truncate_chars(content.trim(), COMMENTARY_CHARS))
    }
}

/// Cut to at most `max` characters, on a character boundary.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_a_configuration_error() {
        let client = AiClient::new("");
        let result = client.commentary(AiTask::SerpCompetitiveness, "text");
        assert!(matches!(result, Err(AiError::MissingApiKey)));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("hello", 100), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        // multi-byte chars count as one
        assert_eq!(truncate_chars("日本語のテスト", 3), "日本語");
    }

    #[test]
    fn prompts_embed_the_excerpt() {
        let prompt = AiTask::Differentiation.user_prompt("EXCERPT-MARKER");
        assert!(prompt.contains("EXCERPT-MARKER"));
        assert!(AiTask::SerpCompetitiveness
            .user_prompt("x")
            .contains("ranking"));
    }
}
