//! Runtime for executing a chat session
//!
//! One session per process. The completion call runs with the session
//! unlocked; the `pending` flag is the only re-submission gate.

mod executor;

#[cfg(test)]
pub mod testing;

pub use executor::ChatRuntime;

use crate::llm::CompletionClient;
use std::sync::Arc;

/// Type alias for the runtime used by the HTTP layer
pub type SharedRuntime = Arc<ChatRuntime<Arc<dyn CompletionClient>>>;
