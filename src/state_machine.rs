//! Core chat-session state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{now_timestamp, Message, SessionState, SUGGESTIONS};
pub use transition::{transition, TransitionError};

#[cfg(test)]
pub use state::{ERROR_FALLBACK, GREETING};
