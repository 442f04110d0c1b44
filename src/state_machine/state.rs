//! Session state and transcript types

use crate::llm::{ChatTurn, Role};
use serde::{Deserialize, Serialize};

/// Seeded first message of every conversation
pub const GREETING: &str = "Hello! I'm your AI assistant powered by Groq. I can help you with various tasks. How can I assist you today?";

/// Appended in place of a reply when the completion call fails
pub const ERROR_FALLBACK: &str =
    "I apologize, but I encountered an error while processing your request. Please try again.";

/// Prompt suggestions shown on a fresh conversation
pub const SUGGESTIONS: [&str; 4] = [
    "Explain how RAG works in simple terms",
    "Summarize this document for me",
    "Generate code for a Python web scraper",
    "What are best practices for document embedding?",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in transcript format (`yyyy-MM-dd HH:mm:ss`)
pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Session state. `Pending` gates re-submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Idle,
    Pending,
}

impl SessionState {
    pub fn is_pending(self) -> bool {
        matches!(self, SessionState::Pending)
    }
}

/// A document excerpt cited by a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub content: String,
}

/// One transcript entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
}

impl Message {
    pub fn user(content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: timestamp.into(),
            sources: vec![],
        }
    }

    pub fn assistant(content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: timestamp.into(),
            sources: vec![],
        }
    }

    pub fn greeting(timestamp: impl Into<String>) -> Self {
        Self::assistant(GREETING, timestamp)
    }

    /// Strip timestamp and sources for the provider
    pub fn to_turn(&self) -> ChatTurn {
        ChatTurn {
            role: self.role,
            content: self.content.clone(),
        }
    }
}
