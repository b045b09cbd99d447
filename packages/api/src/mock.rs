//! In-memory [`Transport`] for tests.
//!
//! Replies are registered per `(method, path)` and replayed for every matching
//! request until replaced. Unregistered routes answer `404` with a FastAPI
//! style `{"detail": "Not Found"}` body. Every request is recorded.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::{json, Value};

use crate::transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};

type Reply = Result<ApiResponse, TransportError>;

#[derive(Debug, Default)]
struct MockState {
    replies: HashMap<(Method, String), Reply>,
    requests: Vec<ApiRequest>,
}

#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Answer `method path` with `status` and a JSON body.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        self.state().replies.insert(
            (method, path.to_string()),
            Ok(ApiResponse::json(status, &body)),
        );
    }

    /// Make `method path` fail before any response arrives.
    pub fn fail(&self, method: Method, path: &str, message: &str) {
        self.state().replies.insert(
            (method, path.to_string()),
            Err(TransportError(message.to_string())),
        );
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state().requests.clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.state().requests.last().cloned()
    }

    /// Recorded requests for one route, oldest first.
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<ApiRequest> {
        self.state()
            .requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    pub fn clear_requests(&self) {
        self.state().requests.clear();
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut state = self.state();
        let reply = state
            .replies
            .get(&(request.method, request.path.clone()))
            .cloned()
            .unwrap_or_else(|| Ok(ApiResponse::json(404, &json!({"detail": "Not Found"}))));
        state.requests.push(request);
        reply
    }
}
