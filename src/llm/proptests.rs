//! Property-based tests for the Groq translation layer
//!
//! - Turn order and content survive request translation
//! - Sampling options always reach the wire unchanged, with streaming off
//! - Normalization never yields an empty reply

use super::groq::{GroqChoice, GroqMessage, GroqResponse, GroqService};
use super::types::{ChatTurn, CompletionOptions, CompletionRequest, Role};
use super::{ModelOption, NO_CONTENT_FALLBACK};
use proptest::prelude::*;

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::User), Just(Role::Assistant)]
}

fn arb_turn() -> impl Strategy<Value = ChatTurn> {
    (arb_role(), "[a-zA-Z0-9 _.!?,\n]{0,80}").prop_map(|(role, content)| ChatTurn { role, content })
}

fn arb_model() -> impl Strategy<Value = ModelOption> {
    prop::sample::select(ModelOption::ALL.to_vec())
}

#[allow(clippy::cast_precision_loss)]
fn arb_options() -> impl Strategy<Value = CompletionOptions> {
    (arb_model(), 0u32..=20, 1u32..=8192, 0u32..=10).prop_map(
        |(model, temperature, max_tokens, top_p)| {
            CompletionOptions {
                model,
                temperature: temperature as f32 / 10.0,
                max_tokens,
                top_p: top_p as f32 / 10.0,
            }
        },
    )
}

fn arb_choice() -> impl Strategy<Value = GroqChoice> {
    prop_oneof![
        Just(GroqChoice { message: None }),
        Just(GroqChoice {
            message: Some(GroqMessage { content: None })
        }),
        "[a-zA-Z0-9 ]{0,40}".prop_map(|text| GroqChoice {
            message: Some(GroqMessage {
                content: Some(text)
            })
        }),
    ]
}

proptest! {
    #[test]
    fn prop_translation_preserves_turns(
        turns in proptest::collection::vec(arb_turn(), 1..12),
        options in arb_options(),
    ) {
        let request = CompletionRequest { messages: turns.clone(), options };
        let value = serde_json::to_value(GroqService::translate_request(&request)).unwrap();

        let wire = value["messages"].as_array().unwrap();
        prop_assert_eq!(wire.len(), turns.len());
        for (sent, turn) in wire.iter().zip(&turns) {
            prop_assert_eq!(&sent["role"], &serde_json::to_value(turn.role).unwrap());
            prop_assert_eq!(sent["content"].as_str().unwrap(), turn.content.as_str());
            prop_assert_eq!(sent.as_object().unwrap().len(), 2);
        }
        prop_assert_eq!(value["model"].as_str().unwrap(), options.model.id());
        prop_assert_eq!(value["max_tokens"].as_u64().unwrap(), u64::from(options.max_tokens));
        prop_assert_eq!(&value["stream"], &serde_json::Value::Bool(false));
    }

    #[test]
    fn prop_normalized_text_never_empty(choices in proptest::collection::vec(arb_choice(), 0..4)) {
        let first = choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.clone())
            .filter(|t| !t.is_empty());

        let completion = GroqService::normalize_response(GroqResponse { choices, usage: None });
        let text = completion.text();

        prop_assert!(!text.is_empty());
        match first {
            Some(expected) => prop_assert_eq!(text, expected),
            None => prop_assert_eq!(text, NO_CONTENT_FALLBACK),
        }
    }
}
