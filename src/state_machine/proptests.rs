//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::transition::*;
use super::*;
use crate::llm::ModelOption;
use proptest::prelude::*;

const TS: &str = "2024-03-01 10:00:00";

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_state() -> impl Strategy<Value = SessionState> {
    prop_oneof![Just(SessionState::Idle), Just(SessionState::Pending)]
}

fn arb_blank_text() -> impl Strategy<Value = String> {
    "[ \t\n\r]{0,10}"
}

fn arb_text() -> impl Strategy<Value = String> {
    "[ ]{0,3}[a-zA-Z0-9?!.,]{1,40}[ ]{0,3}"
}

fn arb_model() -> impl Strategy<Value = ModelOption> {
    prop::sample::select(ModelOption::ALL.to_vec())
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        prop_oneof![arb_text(), arb_blank_text()].prop_map(|text| Event::UserMessage {
            text,
            timestamp: TS.to_string()
        }),
        Just(Event::Clear),
        Just(Event::ChooseSuggestion),
        arb_model().prop_map(|model| Event::SelectModel { model }),
        arb_text().prop_map(|text| Event::CompletionSucceeded {
            text,
            timestamp: TS.to_string()
        }),
        Just(Event::CompletionFailed {
            timestamp: TS.to_string()
        }),
    ]
}

fn count_requests(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, Effect::RequestCompletion))
        .count()
}

fn count_appends(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, Effect::AppendMessage(_)))
        .count()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Pending rejects every user message, leaving nothing to apply
    #[test]
    fn prop_pending_rejects_all_messages(text in prop_oneof![arb_text(), arb_blank_text()]) {
        let result = transition(
            SessionState::Pending,
            Event::UserMessage { text, timestamp: TS.to_string() },
        );
        prop_assert!(matches!(
            result,
            Err(TransitionError::Busy | TransitionError::EmptyMessage)
        ));
    }

    /// Whitespace-only text never requests a completion in any state
    #[test]
    fn prop_blank_never_requests(state in arb_state(), text in arb_blank_text()) {
        let result = transition(state, Event::UserMessage { text, timestamp: TS.to_string() });
        prop_assert_eq!(result.err(), Some(TransitionError::EmptyMessage));
    }

    /// Clear always resets and re-shows suggestions without touching the state
    #[test]
    fn prop_clear_always_resets(state in arb_state()) {
        let result = transition(state, Event::Clear).unwrap();
        prop_assert_eq!(result.new_state, state);
        prop_assert!(result.effects.contains(&Effect::ResetTranscript));
        prop_assert!(result.effects.contains(&Effect::SetSuggestions(true)));
    }

    /// Accepted transitions request a completion iff they enter Pending from Idle,
    /// and append at most one message
    #[test]
    fn prop_request_iff_idle_to_pending(state in arb_state(), event in arb_event()) {
        if let Ok(result) = transition(state, event) {
            let entered_pending =
                state == SessionState::Idle && result.new_state == SessionState::Pending;
            prop_assert_eq!(count_requests(&result.effects), usize::from(entered_pending));
            prop_assert!(count_appends(&result.effects) <= 1);
        }
    }

    /// Any event sequence keeps at most one request outstanding
    #[test]
    fn prop_single_outstanding_request(events in proptest::collection::vec(arb_event(), 0..40)) {
        let mut state = SessionState::Idle;
        let mut outstanding = 0usize;

        for event in events {
            let is_outcome = matches!(
                event,
                Event::CompletionSucceeded { .. } | Event::CompletionFailed { .. }
            );
            if let Ok(result) = transition(state, event) {
                outstanding += count_requests(&result.effects);
                if is_outcome {
                    outstanding -= 1;
                }
                state = result.new_state;
            }
            prop_assert!(outstanding <= 1);
            prop_assert_eq!(outstanding == 1, state.is_pending());
        }
    }
}
