//! Completion provider abstraction
//!
//! Wraps the remote chat-completion endpoint behind a common interface so the
//! chat runtime can be driven by a mock in tests.

mod error;
mod groq;
mod models;
mod types;

#[cfg(test)]
mod proptests;

pub use error::{CompletionError, LlmError};
#[cfg(test)]
pub use error::LlmErrorKind;
pub use groq::{GroqService, DEFAULT_BASE_URL};
pub use models::{ModelOption, UnknownModel};
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for completion providers
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the transcript and return the normalized response.
    ///
    /// [`Completion::text`] falls back to [`NO_CONTENT_FALLBACK`] when the
    /// provider sent no content; any failure yields the single opaque
    /// [`CompletionError`].
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, CompletionError>;

    /// Provider name for log fields
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: CompletionClient + ?Sized> CompletionClient for Arc<T> {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, CompletionError> {
        (**self).complete(request).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Logging wrapper for completion clients
pub struct LoggingClient<C> {
    inner: C,
}

impl<C: CompletionClient> LoggingClient<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: CompletionClient> CompletionClient for LoggingClient<C> {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, CompletionError> {
        let start = std::time::Instant::now();
        let result = self.inner.complete(request).await;
        let duration = start.elapsed();

        match &result {
            Ok(completion) => {
                tracing::info!(
                    provider = self.inner.name(),
                    model = %request.options.model,
                    messages = request.messages.len(),
                    duration_ms = %duration.as_millis(),
                    input_tokens = completion.usage.input_tokens,
                    output_tokens = completion.usage.output_tokens,
                    "Completion request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    provider = self.inner.name(),
                    model = %request.options.model,
                    duration_ms = %duration.as_millis(),
                    kind = e.cause().map_or("unknown", |c| c.kind.as_str()),
                    "Completion request failed"
                );
            }
        }

        result
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
