//! Groq provider implementation (`OpenAI`-compatible chat completions)

use super::types::{ChatTurn, Completion, CompletionRequest, Usage};
use super::{CompletionClient, CompletionError, LlmError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Groq chat-completions client
pub struct GroqService {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GroqService {
    /// Without a `timeout` requests wait for the server indefinitely.
    pub fn new(
        api_key: String,
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LlmError::unknown(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(crate) fn translate_request(request: &CompletionRequest) -> GroqRequest<'_> {
        GroqRequest {
            model: request.options.model.id(),
            messages: &request.messages,
            temperature: request.options.temperature,
            max_tokens: request.options.max_tokens,
            top_p: request.options.top_p,
            stream: false,
        }
    }

    pub(crate) fn normalize_response(resp: GroqResponse) -> Completion {
        let content = resp
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);

        let usage = resp.usage.map_or_else(Usage::default, |u| Usage {
            input_tokens: u64::from(u.prompt_tokens),
            output_tokens: u64::from(u.completion_tokens),
        });

        Completion { content, usage }
    }

    /// Send one request, classifying any failure
    pub async fn send(&self, request: &CompletionRequest) -> Result<Completion, LlmError> {
        let body = Self::translate_request(request);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::network(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    LlmError::network(format!("Connection failed: {e}"))
                } else {
                    LlmError::unknown(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            if let Ok(error_resp) = serde_json::from_str::<GroqErrorResponse>(&body) {
                let message = error_resp.error.message;
                return Err(match status.as_u16() {
                    401 | 403 => LlmError::auth(format!("Authentication failed: {message}")),
                    429 => LlmError::rate_limit(format!("Rate limit exceeded: {message}")),
                    400 => LlmError::invalid_request(format!("Invalid request: {message}")),
                    500..=599 => LlmError::server_error(format!("Server error: {message}")),
                    _ => LlmError::unknown(format!("HTTP {status}: {message}")),
                });
            }
            return Err(LlmError::unknown(format!("HTTP {status} error: {body}")));
        }

        let groq_response: GroqResponse = serde_json::from_str(&body).map_err(|e| {
            LlmError::unknown(format!("Failed to parse response: {e} - body: {body}"))
        })?;

        let completion = Self::normalize_response(groq_response);
        tracing::debug!(
            input_tokens = completion.usage.input_tokens,
            output_tokens = completion.usage.output_tokens,
            has_content = completion.content.is_some(),
            "Groq response received"
        );
        Ok(completion)
    }
}

#[async_trait]
impl CompletionClient for GroqService {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, CompletionError> {
        match self.send(request).await {
            Ok(completion) => Ok(completion),
            Err(e) => {
                tracing::error!(
                    kind = e.kind.as_str(),
                    error = %e.message,
                    "Error generating response"
                );
                Err(CompletionError::from(e))
            }
        }
    }

    fn name(&self) -> &str {
        "groq"
    }
}

// Groq API types

#[derive(Debug, Serialize)]
pub(crate) struct GroqRequest<'a> {
    pub model: &'static str,
    pub messages: &'a [ChatTurn],
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GroqResponse {
    #[serde(default)]
    pub choices: Vec<GroqChoice>,
    #[serde(default)]
    pub usage: Option<GroqUsage>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GroqChoice {
    #[serde(default)]
    pub message: Option<GroqMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GroqMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[allow(clippy::struct_field_names)]
pub(crate) struct GroqUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GroqErrorResponse {
    error: GroqError,
}

#[derive(Debug, Deserialize)]
struct GroqError {
    message: String,
}
