//! RAG Chat - document-grounded chat assistant
//!
//! A Rust backend driving a single chat session against a Groq-hosted
//! model, with a mock document library and conversation history.

mod api;
mod config;
mod context;
mod llm;
mod provider;
mod runtime;
mod session;
mod state_machine;

use api::{create_router, AppState};
use config::AppConfig;
use context::{AuthContext, ThemeContext};
use llm::{CompletionClient, GroqService, LoggingClient};
use provider::documents::mock_documents;
use provider::history::mock_history;
use provider::StaticProvider;
use runtime::ChatRuntime;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ragchat=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };
    tracing::info!(config = ?config, "Configuration loaded");

    // Completion client
    let groq = GroqService::new(config.api_key.clone(), &config.base_url, config.request_timeout)?;
    tracing::info!(endpoint = %groq.endpoint(), "Groq client initialized");
    let client: Arc<dyn CompletionClient> = Arc::new(LoggingClient::new(groq));

    // Create application state
    let state = AppState {
        runtime: Arc::new(ChatRuntime::new(client, config.default_model)),
        auth: Arc::new(AuthContext::new()),
        theme: Arc::new(ThemeContext::default()),
        documents: Arc::new(StaticProvider::new(mock_documents())),
        history: Arc::new(StaticProvider::new(mock_history())),
    };

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new().gzip(true).br(true).deflate(true);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(compression);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("RAG Chat server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
