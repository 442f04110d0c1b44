//! Process-wide UI contexts
//!
//! Authentication and theme state live in explicit objects created once in
//! `main` and passed down by `Arc`. They change only through their setters.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// Client-side authentication flag.
///
/// There is no credential store behind this; any well-formed login succeeds.
#[derive(Debug, Default)]
pub struct AuthContext {
    user: RwLock<Option<User>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        let Some((local, domain)) = email.split_once('@') else {
            return Err(AuthError::InvalidEmail(email.to_string()));
        };
        if local.is_empty() || domain.is_empty() {
            return Err(AuthError::InvalidEmail(email.to_string()));
        }

        let user = User {
            email: email.to_string(),
            name: local.to_string(),
        };
        *self.user.write().await = Some(user.clone());
        tracing::info!(email = %user.email, "User logged in");
        Ok(user)
    }

    pub async fn logout(&self) {
        if let Some(user) = self.user.write().await.take() {
            tracing::info!(email = %user.email, "User logged out");
        }
    }

    pub async fn current_user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }
}

/// Colour theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Default)]
pub struct ThemeContext {
    theme: RwLock<Theme>,
}

impl ThemeContext {
    pub async fn theme(&self) -> Theme {
        *self.theme.read().await
    }

    pub async fn set_theme(&self, theme: Theme) {
        *self.theme.write().await = theme;
        tracing::debug!(?theme, "Theme changed");
    }

    pub async fn toggle(&self) -> Theme {
        let mut theme = self.theme.write().await;
        *theme = theme.toggled();
        *theme
    }
}
