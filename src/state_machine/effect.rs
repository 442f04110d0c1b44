//! Effects produced by state transitions

use super::state::Message;
use crate::llm::ModelOption;

/// Effects to be applied to the session after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Append a message to the transcript
    AppendMessage(Message),

    /// Request a completion over the full transcript
    RequestCompletion,

    /// Truncate the transcript back to the seeded greeting
    ResetTranscript,

    /// Show or hide prompt suggestions
    SetSuggestions(bool),

    /// Use a different model for subsequent requests
    SetModel(ModelOption),
}

impl Effect {
    pub fn append_user(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Effect::AppendMessage(Message::user(text, timestamp))
    }

    pub fn append_assistant(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Effect::AppendMessage(Message::assistant(text, timestamp))
    }
}
