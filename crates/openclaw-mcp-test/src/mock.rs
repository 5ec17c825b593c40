//! Mock gateway transport

use async_trait::async_trait;
use openclaw_mcp_core::{GatewayTransport, RequestOptions, TransportError, TransportResult};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// One request seen by a [`MockTransport`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub params: Value,
    pub options: RequestOptions,
}

#[derive(Debug, Clone)]
enum Reply {
    Resolve(Value),
    Reject(String),
}

impl Reply {
    fn into_result(self) -> TransportResult<Value> {
        match self {
            Reply::Resolve(value) => Ok(value),
            Reply::Reject(message) => Err(TransportError::remote(message)),
        }
    }
}

/// Transport that answers from a script and records every request.
///
/// One-shot replies are consumed first, in order; after that the standing
/// reply (if any) answers every request.
#[derive(Debug, Default)]
pub struct MockTransport {
    once: Mutex<VecDeque<Reply>>,
    always: Mutex<Option<Reply>>,
    calls: Mutex<Vec<RecordedRequest>>,
    delay: Option<Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep before answering each request
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Answer every request with `value`
    pub fn resolve_always(&self, value: Value) -> &Self {
        *self.always.lock().unwrap() = Some(Reply::Resolve(value));
        self
    }

    /// Reject every request with `message`
    pub fn reject_always(&self, message: impl Into<String>) -> &Self {
        *self.always.lock().unwrap() = Some(Reply::Reject(message.into()));
        self
    }

    /// Answer the next unanswered request with `value`
    pub fn resolve_once(&self, value: Value) -> &Self {
        self.once.lock().unwrap().push_back(Reply::Resolve(value));
        self
    }

    /// Reject the next unanswered request with `message`
    pub fn reject_once(&self, message: impl Into<String>) -> &Self {
        self.once
            .lock()
            .unwrap()
            .push_back(Reply::Reject(message.into()));
        self
    }

    pub fn calls(&self) -> Vec<RecordedRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_for(&self, method: &str) -> Vec<RecordedRequest> {
        self.calls()
            .into_iter()
            .filter(|call| call.method == method)
            .collect()
    }

    pub fn last_call(&self) -> Option<RecordedRequest> {
        self.calls.lock().unwrap().last().cloned()
    }

    fn next_reply(&self, method: &str) -> Reply {
        if let Some(reply) = self.once.lock().unwrap().pop_front() {
            return reply;
        }
        self.always
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Reply::Reject(format!("no scripted response for {}", method)))
    }
}

#[async_trait]
impl GatewayTransport for MockTransport {
    async fn request(
        &self,
        method: &str,
        params: Value,
        options: RequestOptions,
    ) -> TransportResult<Value> {
        self.calls.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            params,
            options,
        });
        let reply = self.next_reply(method);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        reply.into_result()
    }
}
