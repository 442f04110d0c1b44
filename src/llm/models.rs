//! The fixed set of selectable models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Model offered in the model selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelOption {
    #[default]
    #[serde(rename = "llama3-8b-8192")]
    Llama3_8b,
    #[serde(rename = "llama3-70b-8192")]
    Llama3_70b,
    #[serde(rename = "mixtral-8x7b-32768")]
    Mixtral8x7b,
    #[serde(rename = "gemma-7b-it")]
    Gemma7b,
}

impl ModelOption {
    pub const ALL: [ModelOption; 4] = [
        ModelOption::Llama3_8b,
        ModelOption::Llama3_70b,
        ModelOption::Mixtral8x7b,
        ModelOption::Gemma7b,
    ];

    /// Identifier sent to the provider
    pub fn id(self) -> &'static str {
        match self {
            ModelOption::Llama3_8b => "llama3-8b-8192",
            ModelOption::Llama3_70b => "llama3-70b-8192",
            ModelOption::Mixtral8x7b => "mixtral-8x7b-32768",
            ModelOption::Gemma7b => "gemma-7b-it",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ModelOption::Llama3_8b => "Llama 3 8B",
            ModelOption::Llama3_70b => "Llama 3 70B",
            ModelOption::Mixtral8x7b => "Mixtral 8x7B",
            ModelOption::Gemma7b => "Gemma 7B",
        }
    }
}

impl fmt::Display for ModelOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown model: {0}")]
pub struct UnknownModel(pub String);

impl FromStr for ModelOption {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| UnknownModel(s.to_string()))
    }
}
