//! Events that can occur in a session

use crate::llm::ModelOption;

/// Events that trigger state transitions.
///
/// Timestamps are stamped by the caller so transitions stay pure.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // User events
    UserMessage { text: String, timestamp: String },
    Clear,
    SelectModel { model: ModelOption },
    ChooseSuggestion,

    // Completion events
    CompletionSucceeded { text: String, timestamp: String },
    CompletionFailed { timestamp: String },
}
