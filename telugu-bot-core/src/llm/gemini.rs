//! Google Gemini provider using the REST `generateContent` endpoint

use super::errors::LLMError;
use super::traits::TextGenerator;
use super::types::{Generation, GenerationRequest};
use crate::config::GeneratorConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Gemini text generator
pub struct GeminiGenerator {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiGenerator {
    /// Create a generator with an explicit API key
    pub fn new(config: &GeneratorConfig, api_key: impl Into<String>) -> Result<Self, LLMError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LLMError::config(format!("{} is empty", config.api_key_env)));
        }

        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LLMError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            timeout,
        })
    }

    /// Create a generator reading the API key from the configured env var
    pub fn from_env(config: &GeneratorConfig) -> Result<Self, LLMError> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            LLMError::config(format!(
                "API key is missing! Please set {} in .env file.",
                config.api_key_env
            ))
        })?;
        Self::new(config, api_key)
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn classify_status(status: StatusCode, body: &str) -> LLMError {
        let message = serde_json::from_str::<GeminiErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| body.to_string());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LLMError::auth(message),
            StatusCode::TOO_MANY_REQUESTS => LLMError::rate_limit(message),
            _ => LLMError::api(status.as_u16(), message),
        }
    }

    fn map_transport(&self, err: reqwest::Error) -> LLMError {
        if err.is_timeout() {
            LLMError::timeout(self.timeout)
        } else {
            LLMError::network(err.to_string())
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<Generation, LLMError> {
        let body = GenerateContentRequest {
            contents: vec![Content { parts: vec![Part { text: Some(request.prompt()) }] }],
        };

        debug!(model = %self.model, task = ?request.task, "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_transport(e))?;

        if !status.is_success() {
            return Err(Self::classify_status(status, &text));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;
        parsed.into_generation()
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

impl GenerateContentResponse {
    fn into_generation(self) -> Result<Generation, LLMError> {
        if let Some(reason) = self.prompt_feedback.and_then(|feedback| feedback.block_reason) {
            return Err(LLMError::content_filtered(reason));
        }

        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
            .unwrap_or_default();

        if text.is_empty() { Ok(Generation::empty()) } else { Ok(Generation::text(text)) }
    }
}
