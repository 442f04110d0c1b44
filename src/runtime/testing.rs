//! Mock implementations for testing
//!
//! These mocks enable runtime and API tests without real I/O.

use crate::llm::{Completion, CompletionClient, CompletionError, CompletionRequest, LlmError, Usage};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

// ============================================================================
// Mock Completion Client
// ============================================================================

/// Mock completion client that returns queued replies
pub struct MockCompletionClient {
    replies: Mutex<VecDeque<Result<String, CompletionError>>>,
    /// When set, each call waits for a notification before answering
    gate: Option<Arc<Notify>>,
    /// Notified when a request arrives (for test synchronization)
    pub request_started: Arc<Notify>,
    /// Record of all requests made
    pub requests: Mutex<Vec<CompletionRequest>>,
}

#[allow(dead_code)] // Not every test uses every helper
impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            gate: None,
            request_started: Arc::new(Notify::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A client whose calls block until the returned handle is notified
    pub fn gated() -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let client = Self {
            gate: Some(gate.clone()),
            ..Self::new()
        };
        (client, gate)
    }

    /// Queue a successful reply
    pub fn queue_reply(&self, text: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
    }

    /// Queue a failure
    pub fn queue_error(&self, error: LlmError) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(CompletionError::from(error)));
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, CompletionError> {
        self.requests.lock().unwrap().push(request.clone());
        self.request_started.notify_one();
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::from(LlmError::network("No mock reply queued"))))
            .map(|text| Completion {
                content: Some(text),
                usage: Usage::default(),
            })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ChatTurn, LlmErrorKind, ModelOption, Role};
    use crate::runtime::ChatRuntime;
    use crate::state_machine::{ERROR_FALLBACK, GREETING};
    use std::time::Duration;

    fn runtime(client: MockCompletionClient) -> Arc<ChatRuntime<Arc<MockCompletionClient>>> {
        Arc::new(ChatRuntime::new(Arc::new(client), ModelOption::default()))
    }

    fn transcript(snapshot: &crate::session::SessionSnapshot) -> Vec<(Role, String)> {
        snapshot
            .messages
            .iter()
            .map(|m| (m.role, m.content.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_mock_client_queue() {
        let mock = MockCompletionClient::new();
        mock.queue_reply("Hello");
        let request = CompletionRequest {
            messages: vec![ChatTurn::user("hi")],
            options: crate::llm::CompletionOptions::default(),
        };

        assert_eq!(mock.complete(&request).await.unwrap().text(), "Hello");

        // Second call should fail (no more replies)
        let err = mock.complete(&request).await.unwrap_err();
        assert_eq!(err.cause().map(|c| c.kind), Some(LlmErrorKind::Network));
        assert_eq!(mock.recorded_requests().len(), 2);
    }

    /// seed → submit "hello" → "hi there"
    #[tokio::test]
    async fn test_hello_round_trip() {
        let mock = MockCompletionClient::new();
        mock.queue_reply("hi there");
        let rt = runtime(mock);

        assert!(rt.submit("hello").await);

        let snapshot = rt.snapshot().await;
        assert_eq!(
            transcript(&snapshot),
            vec![
                (Role::Assistant, GREETING.to_string()),
                (Role::User, "hello".to_string()),
                (Role::Assistant, "hi there".to_string()),
            ]
        );
        assert!(!snapshot.pending);
    }

    #[tokio::test]
    async fn test_request_carries_full_transcript() {
        let mock = Arc::new(MockCompletionClient::new());
        mock.queue_reply("first reply");
        mock.queue_reply("second reply");
        let rt = ChatRuntime::new(mock.clone(), ModelOption::Gemma7b);

        rt.submit("one").await;
        rt.submit("two").await;

        let requests = mock.recorded_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(
            requests[1].messages,
            vec![
                ChatTurn::assistant(GREETING),
                ChatTurn::user("one"),
                ChatTurn::assistant("first reply"),
                ChatTurn::user("two"),
            ]
        );
        assert_eq!(requests[1].options.model, ModelOption::Gemma7b);
        assert_eq!(requests[1].options.max_tokens, 2048);
    }

    #[tokio::test]
    async fn test_failure_appends_fallback() {
        let mock = MockCompletionClient::new();
        mock.queue_error(LlmError::server_error("Server error: boom"));
        let rt = runtime(mock);

        assert!(rt.submit("hello").await);

        let snapshot = rt.snapshot().await;
        assert_eq!(snapshot.messages.len(), 3);
        assert_eq!(snapshot.messages[2].content, ERROR_FALLBACK);
        assert_eq!(snapshot.messages[2].role, Role::Assistant);
        assert!(!snapshot.pending);
    }

    #[tokio::test]
    async fn test_empty_submit_is_ignored() {
        let mock = Arc::new(MockCompletionClient::new());
        let rt = ChatRuntime::new(mock.clone(), ModelOption::default());
        let before = rt.snapshot().await;

        assert!(!rt.submit("").await);
        assert!(!rt.submit(" \n ").await);

        assert_eq!(rt.snapshot().await, before);
        assert!(mock.recorded_requests().is_empty());
    }

    #[tokio::test]
    async fn test_submit_while_pending_is_noop() {
        let (mock, gate) = MockCompletionClient::gated();
        mock.queue_reply("done");
        let started = mock.request_started.clone();
        let rt = runtime(mock);

        let handle = rt.dispatch("first").await.expect("first submission accepted");
        started.notified().await;

        let during = rt.snapshot().await;
        assert!(during.pending);
        assert_eq!(during.messages.len(), 2);

        assert!(rt.dispatch("second").await.is_none());
        assert_eq!(rt.snapshot().await, during);

        gate.notify_one();
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("completion finished")
            .unwrap();

        let after = rt.snapshot().await;
        assert!(!after.pending);
        assert_eq!(after.messages.len(), 3);
        assert_eq!(after.messages[2].content, "done");
    }

    #[tokio::test]
    async fn test_clear_after_conversation() {
        let mock = MockCompletionClient::new();
        mock.queue_reply("a");
        mock.queue_reply("b");
        let rt = runtime(mock);

        rt.submit("one").await;
        rt.submit("two").await;
        assert_eq!(rt.snapshot().await.messages.len(), 5);

        rt.clear().await;
        let snapshot = rt.snapshot().await;
        assert_eq!(snapshot.messages.len(), 1);
        assert_eq!(snapshot.messages[0].content, GREETING);
        assert!(snapshot.show_suggestions);
    }

    #[tokio::test]
    async fn test_select_model_and_suggestion() {
        let mock = Arc::new(MockCompletionClient::new());
        mock.queue_reply("ok");
        let rt = ChatRuntime::new(mock.clone(), ModelOption::default());

        rt.select_model(ModelOption::Llama3_70b).await;
        let text = rt
            .choose_suggestion("Summarize this document for me")
            .await;
        assert!(!rt.snapshot().await.show_suggestions);

        rt.submit(&text).await;
        let requests = mock.recorded_requests();
        assert_eq!(requests[0].options.model, ModelOption::Llama3_70b);
        assert_eq!(
            requests[0].messages.last(),
            Some(&ChatTurn::user("Summarize this document for me"))
        );
    }
}
