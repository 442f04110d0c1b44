//! Chat session: the transcript plus derived UI flags for one conversation
//!
//! All mutation goes through [`Session::handle`], which runs the pure
//! transition and applies the resulting effects.

use crate::llm::{CompletionError, CompletionOptions, CompletionRequest, ModelOption};
use crate::state_machine::{
    transition, Effect, Event, Message, SessionState, TransitionError, SUGGESTIONS,
};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    seed: Message,
    messages: Vec<Message>,
    model: ModelOption,
    show_suggestions: bool,
}

/// Serializable view of a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub messages: Vec<Message>,
    pub pending: bool,
    pub model: ModelOption,
    pub show_suggestions: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<&'static str>,
}

impl Session {
    /// Start a conversation seeded with the greeting
    pub fn new(model: ModelOption, timestamp: impl Into<String>) -> Self {
        let seed = Message::greeting(timestamp);
        Self {
            state: SessionState::Idle,
            messages: vec![seed.clone()],
            seed,
            model,
            show_suggestions: true,
        }
    }

    #[cfg(test)]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    #[cfg(test)]
    pub fn show_suggestions(&self) -> bool {
        self.show_suggestions
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            messages: self.messages.clone(),
            pending: self.is_pending(),
            model: self.model,
            show_suggestions: self.show_suggestions,
            // Only offered on a fresh conversation
            suggestions: if self.show_suggestions && self.messages.len() == 1 {
                SUGGESTIONS.to_vec()
            } else {
                vec![]
            },
        }
    }

    /// Feed an event through the state machine.
    ///
    /// Returns the completion request to dispatch when the transition asks
    /// for one. On error the session is left untouched.
    pub fn handle(&mut self, event: Event) -> Result<Option<CompletionRequest>, TransitionError> {
        let result = transition(self.state, event)?;
        self.state = result.new_state;

        let mut request = None;
        for effect in result.effects {
            match effect {
                Effect::AppendMessage(message) => self.messages.push(message),
                Effect::RequestCompletion => request = Some(self.completion_request()),
                Effect::ResetTranscript => {
                    self.messages.clear();
                    self.messages.push(self.seed.clone());
                }
                Effect::SetSuggestions(show) => self.show_suggestions = show,
                Effect::SetModel(model) => self.model = model,
            }
        }
        Ok(request)
    }

    /// Submit user text. Empty text or a pending request makes this a no-op.
    pub fn submit(&mut self, text: &str, timestamp: impl Into<String>) -> Option<CompletionRequest> {
        let event = Event::UserMessage {
            text: text.to_string(),
            timestamp: timestamp.into(),
        };
        match self.handle(event) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(reason = %e, "Ignoring submission");
                None
            }
        }
    }

    /// Record the outcome of the outstanding completion
    pub fn resolve(
        &mut self,
        outcome: Result<String, CompletionError>,
        timestamp: impl Into<String>,
    ) {
        let timestamp = timestamp.into();
        let event = match outcome {
            Ok(text) => Event::CompletionSucceeded { text, timestamp },
            Err(_) => Event::CompletionFailed { timestamp },
        };
        if let Err(e) = self.handle(event) {
            tracing::warn!(error = %e, "Dropping completion outcome");
        }
    }

    /// Reset the transcript to the greeting and re-show suggestions
    pub fn clear(&mut self) {
        self.apply_control(Event::Clear);
    }

    pub fn select_model(&mut self, model: ModelOption) {
        self.apply_control(Event::SelectModel { model });
    }

    /// Pick a prompt suggestion; returns the text to use as input
    pub fn choose_suggestion<'a>(&mut self, text: &'a str) -> &'a str {
        self.apply_control(Event::ChooseSuggestion);
        text
    }

    fn apply_control(&mut self, event: Event) {
        if let Err(e) = self.handle(event) {
            tracing::warn!(error = %e, "Session control rejected");
        }
    }

    fn completion_request(&self) -> CompletionRequest {
        CompletionRequest {
            messages: self.messages.iter().map(Message::to_turn).collect(),
            options: CompletionOptions::for_model(self.model),
        }
    }
}
