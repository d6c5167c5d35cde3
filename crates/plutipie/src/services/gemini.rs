//! Gemini text generation client
//!
//! Calls the `generateContent` REST endpoint with a single user prompt.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ports::{GenerationFailure, TextGenerator};

pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini `generateContent` client
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new client using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Overrides the Gemini model name if needed.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the API base URL (proxies, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Generate content for a single prompt
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            self.base_url,
            model = self.model,
            api_key = self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            // The URL carries the API key; keep it out of logs and chat.
            .map_err(|err| GenerationError::RequestFailed(err.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| GenerationError::Parse(err.without_url().to_string()))?;

        extract_text(payload)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationFailure> {
        Ok(self.generate_content(prompt).await?)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Gemini error types
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Prompt was blocked: {0}")]
    Blocked(String),

    #[error("Gemini returned no text")]
    EmptyResponse,
}

// ============================================
// Helper Functions
// ============================================

fn extract_text(payload: GenerateContentResponse) -> Result<String, GenerationError> {
    let text: String = payload
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if !text.is_empty() {
        return Ok(text);
    }

    match payload.prompt_feedback.and_then(|f| f.block_reason) {
        Some(reason) => Err(GenerationError::Blocked(reason)),
        None => Err(GenerationError::EmptyResponse),
    }
}

fn map_http_error(status: StatusCode, body: String) -> GenerationError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    GenerationError::Api {
        status: status.as_u16(),
        message,
    }
}
