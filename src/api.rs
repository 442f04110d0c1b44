//! HTTP API
//!
//! JSON routes for the login, chat, documents, settings and history views.
//! Everything except login, the model list and the version is gated on the
//! authentication context.

mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::context::{AuthContext, ThemeContext};
use crate::provider::documents::Document;
use crate::provider::history::HistoryEntry;
use crate::provider::DataProvider;
use crate::runtime::SharedRuntime;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub runtime: SharedRuntime,
    pub auth: Arc<AuthContext>,
    pub theme: Arc<ThemeContext>,
    pub documents: Arc<dyn DataProvider<Document>>,
    pub history: Arc<dyn DataProvider<HistoryEntry>>,
}
