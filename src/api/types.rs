//! API request and response types

use crate::context::{Theme, User};
use crate::llm::ModelOption;
use crate::provider::documents::DocumentView;
use crate::provider::history::HistoryEntry;
use serde::{Deserialize, Serialize};

/// Request to sign in
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response with the signed-in user
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// Request to send a chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Whether a chat message was taken.
///
/// `accepted: false` means the text was blank or a reply is still pending.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub accepted: bool,
}

/// Request to change the model
#[derive(Debug, Deserialize)]
pub struct SelectModelRequest {
    pub model: String,
}

/// Request to use a prompt suggestion
#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub text: String,
}

/// Selectable model
#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
}

impl From<ModelOption> for ModelInfo {
    fn from(model: ModelOption) -> Self {
        Self {
            id: model.id(),
            name: model.display_name(),
        }
    }
}

/// Response for model list
#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelInfo>,
    pub default: &'static str,
}

/// Theme settings
#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsBody {
    pub theme: Theme,
}

#[derive(Debug, Serialize)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentView>,
}

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document: DocumentView,
}

#[derive(Debug, Serialize)]
pub struct HistoryListResponse {
    pub entries: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub entry: HistoryEntry,
}

/// Generic success response
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
