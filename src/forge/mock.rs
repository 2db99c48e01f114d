//! forge::mock
//!
//! Recording dispatcher for deterministic testing.
//!
//! # Design
//!
//! Responses are scripted up front and handed out in order; every request is
//! recorded so tests can assert what was sent, or that nothing was.
//!
//! # Example
//!
//! ```
//! use pullr::auth::Credentials;
//! use pullr::forge::mock::RecordingDispatcher;
//! use pullr::forge::{ApiDispatcher, ApiRequest, ApiResponse};
//!
//! # tokio_test::block_on(async {
//! let dispatcher = RecordingDispatcher::new()
//!     .respond_with(ApiResponse::new(200, "[]"));
//!
//! let creds = Credentials::new("alice", "secret");
//! let response = dispatcher
//!     .dispatch(ApiRequest::get("https://forge/api", creds))
//!     .await
//!     .unwrap();
//!
//! assert_eq!(response.status, 200);
//! assert_eq!(dispatcher.call_count(), 1);
//! # });
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{ApiDispatcher, ApiRequest, ApiResponse, TransportError};

/// Dispatcher that replays scripted responses.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    inner: Arc<Mutex<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    /// Scripted results, consumed front to back.
    script: VecDeque<Result<ApiResponse, TransportError>>,
    /// Every request received.
    requests: Vec<ApiRequest>,
}

impl RecordingDispatcher {
    /// Create a dispatcher with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a response to the script.
    pub fn respond_with(self, response: ApiResponse) -> Self {
        self.lock().script.push_back(Ok(response));
        self
    }

    /// Append a transport failure to the script.
    pub fn fail_with(self, error: TransportError) -> Self {
        self.lock().script.push_back(Err(error));
        self
    }

    /// All recorded requests, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    /// Number of dispatched requests.
    pub fn call_count(&self) -> usize {
        self.lock().requests.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RecordingInner> {
        // A poisoned lock only means another test thread panicked.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ApiDispatcher for RecordingDispatcher {
    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut inner = self.lock();
        inner.requests.push(request);
        inner.script.pop_front().unwrap_or_else(|| {
            Err(TransportError::Request(
                "no scripted response left".to_string(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;

    fn request(url: &str) -> ApiRequest {
        ApiRequest::get(url, Credentials::new("alice", "secret"))
    }

    #[tokio::test]
    async fn replays_in_order() {
        let dispatcher = RecordingDispatcher::new()
            .respond_with(ApiResponse::new(200, "first"))
            .fail_with(TransportError::Connect("refused".into()))
            .respond_with(ApiResponse::new(404, "third"));

        assert_eq!(dispatcher.dispatch(request("a")).await.unwrap().body, "first");
        assert!(dispatcher.dispatch(request("b")).await.is_err());
        assert_eq!(dispatcher.dispatch(request("c")).await.unwrap().status, 404);

        let urls: Vec<_> = dispatcher.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn exhausted_script_is_an_error() {
        let dispatcher = RecordingDispatcher::new();
        let result = dispatcher.dispatch(request("a")).await;
        assert!(matches!(result, Err(TransportError::Request(_))));
        assert_eq!(dispatcher.call_count(), 1);
    }

    #[tokio::test]
    async fn clones_share_recordings() {
        let dispatcher = RecordingDispatcher::new().respond_with(ApiResponse::new(200, ""));
        let clone = dispatcher.clone();
        clone.dispatch(request("a")).await.unwrap();
        assert_eq!(dispatcher.call_count(), 1);
    }
}
