//! Pure state transition function

use super::state::ERROR_FALLBACK;
use super::{Effect, Event, SessionState};
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: SessionState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: SessionState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("A completion is already pending")]
    Busy,
    #[error("Message is empty")]
    EmptyMessage,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function: same inputs, same outputs, no I/O.
pub fn transition(state: SessionState, event: Event) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // ============================================================
        // Submission
        // ============================================================
        (_, Event::UserMessage { text, .. }) if text.trim().is_empty() => {
            Err(TransitionError::EmptyMessage)
        }

        (SessionState::Pending, Event::UserMessage { .. }) => Err(TransitionError::Busy),

        (SessionState::Idle, Event::UserMessage { text, timestamp }) => {
            Ok(TransitionResult::new(SessionState::Pending)
                .with_effect(Effect::append_user(text, timestamp))
                .with_effect(Effect::SetSuggestions(false))
                .with_effect(Effect::RequestCompletion))
        }

        // ============================================================
        // Completion outcome
        // ============================================================
        (SessionState::Pending, Event::CompletionSucceeded { text, timestamp }) => {
            Ok(TransitionResult::new(SessionState::Idle)
                .with_effect(Effect::append_assistant(text, timestamp)))
        }

        (SessionState::Pending, Event::CompletionFailed { timestamp }) => {
            Ok(TransitionResult::new(SessionState::Idle)
                .with_effect(Effect::append_assistant(ERROR_FALLBACK, timestamp)))
        }

        (SessionState::Idle, Event::CompletionSucceeded { .. } | Event::CompletionFailed { .. }) => {
            Err(TransitionError::InvalidTransition(
                "completion outcome with no request outstanding".to_string(),
            ))
        }

        // ============================================================
        // Session controls (valid in any state)
        // ============================================================

        // A pending request is not aborted; its reply lands after the greeting.
        (state, Event::Clear) => Ok(TransitionResult::new(state)
            .with_effect(Effect::ResetTranscript)
            .with_effect(Effect::SetSuggestions(true))),

        (state, Event::SelectModel { model }) => {
            Ok(TransitionResult::new(state).with_effect(Effect::SetModel(model)))
        }

        (state, Event::ChooseSuggestion) => {
            Ok(TransitionResult::new(state).with_effect(Effect::SetSuggestions(false)))
        }
    }
}
