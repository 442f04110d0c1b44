//! Chat runtime executor

use crate::llm::{CompletionClient, CompletionRequest, ModelOption};
use crate::session::{Session, SessionSnapshot};
use crate::state_machine::now_timestamp;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Drives one [`Session`] against a completion client.
///
/// The session lock is held only while the state machine runs, never across
/// the completion call, so readers see `pending` while a request is in flight.
pub struct ChatRuntime<C>
where
    C: CompletionClient + 'static,
{
    session: Mutex<Session>,
    client: C,
}

impl<C> ChatRuntime<C>
where
    C: CompletionClient + 'static,
{
    pub fn new(client: C, model: ModelOption) -> Self {
        Self {
            session: Mutex::new(Session::new(model, now_timestamp())),
            client,
        }
    }

    /// Append the user entry and mark the session pending.
    ///
    /// Returns `None` (and changes nothing) for blank text or while a
    /// request is outstanding.
    pub async fn begin(&self, text: &str) -> Option<CompletionRequest> {
        let mut session = self.session.lock().await;
        let request = session.submit(text, now_timestamp())?;
        tracing::info!(
            model = %request.options.model,
            transcript_len = request.messages.len(),
            "Submitting message"
        );
        Some(request)
    }

    /// Perform the completion and record its outcome
    pub async fn finish(&self, request: CompletionRequest) {
        let outcome = self
            .client
            .complete(&request)
            .await
            .map(|completion| completion.text());
        if let Err(e) = &outcome {
            tracing::error!(error = %e, cause = ?e.cause(), "Completion failed, appending fallback");
        }
        self.session.lock().await.resolve(outcome, now_timestamp());
    }

    /// Submit and wait for the reply. Returns false when the text was ignored.
    #[cfg(test)]
    pub async fn submit(&self, text: &str) -> bool {
        match self.begin(text).await {
            Some(request) => {
                self.finish(request).await;
                true
            }
            None => false,
        }
    }

    /// Submit and let the completion run in the background
    pub async fn dispatch(self: &Arc<Self>, text: &str) -> Option<JoinHandle<()>> {
        let request = self.begin(text).await?;
        let runtime = Arc::clone(self);
        Some(tokio::spawn(async move {
            runtime.finish(request).await;
        }))
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    pub async fn clear(&self) {
        self.session.lock().await.clear();
        tracing::info!("Conversation cleared");
    }

    pub async fn select_model(&self, model: ModelOption) {
        self.session.lock().await.select_model(model);
        tracing::info!(model = %model, "Model selected");
    }

    pub async fn choose_suggestion(&self, text: &str) -> String {
        self.session.lock().await.choose_suggestion(text).to_string()
    }
}
