//! Completion error types

use thiserror::Error;

/// Provider error with classification.
///
/// Only ever seen inside the provider and in logs; callers of
/// [`super::CompletionClient`] receive a [`CompletionError`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct LlmError {
    pub kind: LlmErrorKind,
    pub message: String,
}

impl LlmError {
    pub fn new(kind: LlmErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Network, message)
    }

    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::RateLimit, message)
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::ServerError, message)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Auth, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::InvalidRequest, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Unknown, message)
    }
}

/// Error classification, used for log fields only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmErrorKind {
    /// Connection failures and timeouts
    Network,
    /// Rate limited (429)
    RateLimit,
    /// Server error (5xx)
    ServerError,
    /// Authentication failed (401, 403)
    Auth,
    /// Bad request (400)
    InvalidRequest,
    /// Anything else, including unparseable bodies
    Unknown,
}

impl LlmErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::RateLimit => "rate_limit",
            Self::ServerError => "server_error",
            Self::Auth => "auth",
            Self::InvalidRequest => "invalid_request",
            Self::Unknown => "unknown",
        }
    }
}

/// The single failure surfaced by a completion call.
///
/// Every provider failure collapses into this one message. The classified
/// cause is kept as the error source for logging.
#[derive(Debug, Error)]
#[error("Failed to generate response")]
pub struct CompletionError {
    #[source]
    source: Option<LlmError>,
}

impl CompletionError {
    /// A failure with no underlying provider error
    #[cfg(test)]
    pub fn opaque() -> Self {
        Self { source: None }
    }

    pub fn cause(&self) -> Option<&LlmError> {
        self.source.as_ref()
    }
}

impl From<LlmError> for CompletionError {
    fn from(err: LlmError) -> Self {
        Self { source: Some(err) }
    }
}
