//! HTTP request handlers

use super::types::{
    ChatRequest, ChatResponse, DocumentListResponse, DocumentResponse, ErrorResponse,
    HistoryListResponse, HistoryResponse, LoginRequest, ModelInfo, ModelsResponse,
    SelectModelRequest, SettingsBody, SuccessResponse, SuggestionRequest, SuggestionResponse,
    UserResponse,
};
use super::AppState;
use crate::context::AuthError;
use crate::llm::ModelOption;
use crate::provider::documents::{DocumentQuery, DocumentView};
use crate::provider::ProviderError;
use crate::session::SessionSnapshot;
use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/logout", post(logout))
        .route("/api/me", get(current_user))
        // Chat
        .route("/api/chat", get(get_chat).post(send_chat).delete(clear_chat))
        .route("/api/chat/model", put(select_model))
        .route("/api/chat/suggestion", post(choose_suggestion))
        // Settings
        .route("/api/settings", get(get_settings).put(update_settings))
        .route("/api/settings/theme/toggle", post(toggle_theme))
        // Documents
        .route("/api/documents", get(list_documents))
        .route("/api/documents/:id", get(get_document))
        // History
        .route("/api/history", get(list_history))
        .route("/api/history/:id", get(get_history))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/api/login", post(login))
        .route("/api/models", get(list_models))
        .route("/version", get(get_version))
        .merge(protected)
        .with_state(state)
}

// ============================================================
// Authentication
// ============================================================

async fn require_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.auth.is_authenticated().await {
        next.run(request).await
    } else {
        AppError::Unauthorized.into_response()
    }
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.auth.login(&req.email, &req.password).await?;
    Ok(Json(UserResponse { user }))
}

async fn logout(State(state): State<AppState>) -> Json<SuccessResponse> {
    state.auth.logout().await;
    Json(SuccessResponse { success: true })
}

async fn current_user(State(state): State<AppState>) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .auth
        .current_user()
        .await
        .ok_or(AppError::Unauthorized)?;
    Ok(Json(UserResponse { user }))
}

// ============================================================
// Chat
// ============================================================

async fn get_chat(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.runtime.snapshot().await)
}

/// Accepted messages complete in the background; poll `GET /api/chat`.
async fn send_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> (StatusCode, Json<ChatResponse>) {
    match state.runtime.dispatch(&req.text).await {
        Some(_) => (StatusCode::ACCEPTED, Json(ChatResponse { accepted: true })),
        None => (StatusCode::OK, Json(ChatResponse { accepted: false })),
    }
}

async fn clear_chat(State(state): State<AppState>) -> Json<SessionSnapshot> {
    state.runtime.clear().await;
    Json(state.runtime.snapshot().await)
}

async fn select_model(
    State(state): State<AppState>,
    Json(req): Json<SelectModelRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let model: ModelOption = req
        .model
        .parse()
        .map_err(|e: crate::llm::UnknownModel| AppError::BadRequest(e.to_string()))?;
    state.runtime.select_model(model).await;
    Ok(Json(state.runtime.snapshot().await))
}

async fn choose_suggestion(
    State(state): State<AppState>,
    Json(req): Json<SuggestionRequest>,
) -> Json<SuggestionResponse> {
    let text = state.runtime.choose_suggestion(&req.text).await;
    Json(SuggestionResponse { text })
}

// ============================================================
// Models
// ============================================================

async fn list_models() -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: ModelOption::ALL.into_iter().map(ModelInfo::from).collect(),
        default: ModelOption::default().id(),
    })
}

// ============================================================
// Settings
// ============================================================

async fn get_settings(State(state): State<AppState>) -> Json<SettingsBody> {
    Json(SettingsBody {
        theme: state.theme.theme().await,
    })
}

async fn update_settings(
    State(state): State<AppState>,
    Json(body): Json<SettingsBody>,
) -> Json<SettingsBody> {
    state.theme.set_theme(body.theme).await;
    Json(SettingsBody {
        theme: state.theme.theme().await,
    })
}

async fn toggle_theme(State(state): State<AppState>) -> Json<SettingsBody> {
    Json(SettingsBody {
        theme: state.theme.toggle().await,
    })
}

// ============================================================
// Documents
// ============================================================

async fn list_documents(
    State(state): State<AppState>,
    Query(query): Query<DocumentQuery>,
) -> Result<Json<DocumentListResponse>, AppError> {
    let documents = query
        .apply(state.documents.list().await?)
        .into_iter()
        .map(DocumentView::from)
        .collect();
    Ok(Json(DocumentListResponse { documents }))
}

async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = state
        .documents
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Document not found: {id}")))?;
    Ok(Json(DocumentResponse {
        document: document.into(),
    }))
}

// ============================================================
// History
// ============================================================

async fn list_history(
    State(state): State<AppState>,
) -> Result<Json<HistoryListResponse>, AppError> {
    let entries = state.history.list().await?;
    Ok(Json(HistoryListResponse { entries }))
}

async fn get_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HistoryResponse>, AppError> {
    let entry = state
        .history
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("History entry not found: {id}")))?;
    Ok(Json(HistoryResponse { entry }))
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    concat!("ragchat ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
    Unauthorized,
    NotFound(String),
    Internal(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        tracing::error!(error = %err, "Data provider failed");
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Not authenticated".to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
