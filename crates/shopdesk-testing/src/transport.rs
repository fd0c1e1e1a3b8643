//! Scripted stand-in for the admin API.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use shopdesk_api::{ApiClient, ApiError, ApiRequest, Method, Transport};

pub const TEST_BASE: &str = "http://shop.test/api/admin";

#[derive(Debug, Clone)]
enum Reply {
    Json(Value),
    Status(u16),
    Offline,
}

#[derive(Debug, Clone)]
struct Scripted {
    reply: Reply,
    delay: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub target: String,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
struct State {
    routes: HashMap<String, VecDeque<Scripted>>,
    calls: Vec<RecordedCall>,
}

/// Routes are keyed by method and target (`GET /customers/top?limit=5`).
/// Several replies scripted for one route are served in order; the last one
/// repeats. Unscripted routes answer HTTP 404.
///
/// Clones share routes and the call log.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

fn key(method: Method, target: &str) -> String {
    format!("{} {}", method, target)
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn script(&self, method: Method, target: &str, reply: Reply, delay: Option<Duration>) -> &Self {
        self.state()
            .routes
            .entry(key(method, target))
            .or_default()
            .push_back(Scripted { reply, delay });
        self
    }

    pub fn on(&self, method: Method, target: &str, body: Value) -> &Self {
        self.script(method, target, Reply::Json(body), None)
    }

    pub fn get(&self, target: &str, body: Value) -> &Self {
        self.on(Method::Get, target, body)
    }

    /// Answer after `delay`. Pair with a paused tokio clock.
    pub fn on_delayed(&self, method: Method, target: &str, body: Value, delay: Duration) -> &Self {
        self.script(method, target, Reply::Json(body), Some(delay))
    }

    /// Fail as if the server were unreachable.
    pub fn offline(&self, method: Method, target: &str) -> &Self {
        self.script(method, target, Reply::Offline, None)
    }

    pub fn status(&self, method: Method, target: &str, code: u16) -> &Self {
        self.script(method, target, Reply::Status(code), None)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state().calls.clone()
    }

    pub fn count(&self, method: Method, target: &str) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|c| c.method == method && c.target == target)
            .count()
    }

    /// Calls that write: everything but `GET`.
    pub fn mutations(&self) -> Vec<RecordedCall> {
        self.state()
            .calls
            .iter()
            .filter(|c| c.method != Method::Get)
            .cloned()
            .collect()
    }

    pub fn last_body(&self, method: Method, target: &str) -> Option<Value> {
        self.state()
            .calls
            .iter()
            .rev()
            .find(|c| c.method == method && c.target == target)
            .and_then(|c| c.body.clone())
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(Arc::new(self.clone()), TEST_BASE)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> shopdesk_api::Result<Value> {
        let target = request.target();
        let scripted = {
            let mut state = self.state();
            state.calls.push(RecordedCall {
                method: request.method,
                target: target.clone(),
                body: request.body.clone(),
            });
            state.routes.get_mut(&key(request.method, &target)).and_then(|queue| {
                if queue.len() > 1 {
                    queue.pop_front()
                } else {
                    queue.front().cloned()
                }
            })
        };

        let Some(scripted) = scripted else {
            return Err(ApiError::Status {
                code: 404,
                body: format!("no route for {}", request),
            });
        };
        if let Some(delay) = scripted.delay {
            tokio::time::sleep(delay).await;
        }
        match scripted.reply {
            Reply::Json(body) => Ok(body),
            Reply::Status(code) => Err(ApiError::Status {
                code,
                body: String::new(),
            }),
            Reply::Offline => Err(ApiError::Transport("connection refused".to_string())),
        }
    }
}
