//! Read-only data providers
//!
//! Documents and history are served through [`DataProvider`] so a real
//! storage backend can replace the bundled static data without touching the
//! HTTP layer.

pub mod documents;
pub mod history;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[allow(dead_code)] // Returned by storage-backed providers; the static one never fails
    #[error("Data provider unavailable: {0}")]
    Unavailable(String),
}

/// Records addressable by string id
pub trait Record {
    fn id(&self) -> &str;
}

#[async_trait]
pub trait DataProvider<T>: Send + Sync {
    /// All records, in provider order
    async fn list(&self) -> Result<Vec<T>, ProviderError>;

    async fn get(&self, id: &str) -> Result<Option<T>, ProviderError>;
}

#[async_trait]
impl<T, P> DataProvider<T> for Arc<P>
where
    T: Send + 'static,
    P: DataProvider<T> + ?Sized,
{
    async fn list(&self) -> Result<Vec<T>, ProviderError> {
        (**self).list().await
    }

    async fn get(&self, id: &str) -> Result<Option<T>, ProviderError> {
        (**self).get(id).await
    }
}

/// Fixed in-memory record list
#[derive(Debug, Clone)]
pub struct StaticProvider<T> {
    items: Vec<T>,
}

impl<T> StaticProvider<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<T> DataProvider<T> for StaticProvider<T>
where
    T: Record + Clone + Send + Sync + 'static,
{
    async fn list(&self) -> Result<Vec<T>, ProviderError> {
        Ok(self.items.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<T>, ProviderError> {
        Ok(self.items.iter().find(|item| item.id() == id).cloned())
    }
}
