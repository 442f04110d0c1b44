//! Common types for completion requests

use super::ModelOption;
use serde::{Deserialize, Serialize};

/// Returned in place of an answer when the provider sends back no content
pub const NO_CONTENT_FALLBACK: &str = "I apologize, but I couldn't generate a response.";

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2048;
pub const DEFAULT_TOP_P: f32 = 1.0;

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry as sent to the provider (no timestamp, no sources)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

#[cfg(test)]
impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Sampling configuration for a completion call
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompletionOptions {
    pub model: ModelOption,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

impl CompletionOptions {
    pub fn for_model(model: ModelOption) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: ModelOption::default(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            top_p: DEFAULT_TOP_P,
        }
    }
}

/// Completion request: full transcript plus options
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<ChatTurn>,
    pub options: CompletionOptions,
}

/// Normalized provider response
#[derive(Debug, Clone, Default)]
pub struct Completion {
    /// Content of the first choice, if the provider sent any
    pub content: Option<String>,
    pub usage: Usage,
}

impl Completion {
    /// The reply text, or [`NO_CONTENT_FALLBACK`] when there is none
    pub fn text(&self) -> String {
        match self.content.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => NO_CONTENT_FALLBACK.to_string(),
        }
    }
}

/// Usage statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct Usage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}
