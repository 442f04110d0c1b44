//! Environment configuration
//!
//! Read once at startup. A missing API key is fatal; there is no bundled
//! fallback credential.

use crate::llm::{ModelOption, DEFAULT_BASE_URL};
use std::time::Duration;
use thiserror::Error;

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GROQ_API_KEY is not set")]
    MissingApiKey,
    #[error("DEFAULT_MODEL: unknown model {0}")]
    UnknownModel(String),
    #[error("{var}: invalid value {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub default_model: ModelOption,
    pub port: u16,
    /// Client-side request timeout; `None` waits on the server indefinitely
    pub request_timeout: Option<Duration>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("default_model", &self.default_model)
            .field("port", &self.port)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = get(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;

        let base_url = get("GROQ_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let default_model = match get("DEFAULT_MODEL") {
            Some(id) => id
                .trim()
                .parse()
                .map_err(|_| ConfigError::UnknownModel(id.clone()))?,
            None => ModelOption::default(),
        };

        let port = parse_var(get("RAGCHAT_PORT"), "RAGCHAT_PORT", DEFAULT_PORT)?;
        let request_timeout = get("GROQ_TIMEOUT_SECS")
            .map(|v| parse_var(Some(v), "GROQ_TIMEOUT_SECS", 0).map(Duration::from_secs))
            .transpose()?;

        Ok(Self {
            api_key: api_key.trim().to_string(),
            base_url,
            default_model,
            port,
            request_timeout,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    value: Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value: v }),
        None => Ok(default),
    }
}
