/*!
 * Mock transport implementations for testing.
 *
 * This module provides a scripted transport that simulates the translator
 * endpoint without any network access:
 * - `MockTransport::echo()` - Returns every input text unchanged
 * - `MockTransport::tagging()` - Returns `[<to>] <text>` for every input
 * - `MockTransport::truncated(n)` - Like tagging, but only the first n results
 * - `MockTransport::status(code)` - Always answers with an HTTP error status
 * - `MockTransport::failing()` - Never receives a response
 */

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use url::Url;

use crate::errors::TransportError;
use super::{Transport, TransportResponse};

/// A request as seen by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Full request URL
    pub url: String,
    /// Extra headers passed by the caller
    pub headers: Vec<(String, String)>,
    /// JSON body
    pub body: String,
}

/// Behavior mode for the mock transport
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Echo every `Text` back unchanged
    Echo,
    /// Prefix every `Text` with the target locale
    Tagging,
    /// Tagging, but only for the first `keep` items
    Truncated { keep: usize },
    /// Always return this status and body
    Fixed { status: u16, body: String },
    /// Always fail with a connection error
    Failing,
    /// Tagging after a delay (for cancellation testing)
    Slow { delay_ms: u64 },
}

/// Mock transport for testing dispatch behavior
#[derive(Debug, Clone)]
pub struct MockTransport {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter, shared between clones
    request_count: Arc<AtomicUsize>,
    /// Most recent request, shared between clones
    last_request: Arc<Mutex<Option<RecordedRequest>>>,
}

impl MockTransport {
    /// Create a new mock transport with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a mock that echoes inputs
    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    /// Create a mock that tags inputs with the target locale
    pub fn tagging() -> Self {
        Self::new(MockBehavior::Tagging)
    }

    /// Create a mock that only answers the first `keep` items
    pub fn truncated(keep: usize) -> Self {
        Self::new(MockBehavior::Truncated { keep })
    }

    /// Create a mock that always returns `body` with status 200
    pub fn fixed(body: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fixed { status: 200, body: body.into() })
    }

    /// Create a mock that always answers with an error status
    pub fn status(status: u16) -> Self {
        Self::new(MockBehavior::Fixed {
            status,
            body: json!({ "error": { "code": status, "message": "Simulated failure" } }).to_string(),
        })
    }

    /// Create a mock that never gets a response
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that answers after `delay_ms`
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }

    /// Build a translator-shaped response body for the given texts
    pub fn response_body(texts: &[&str], to: &str) -> String {
        let items: Vec<Value> = texts
            .iter()
            .map(|text| json!({ "translations": [ { "text": text, "to": to } ] }))
            .collect();
        Value::Array(items).to_string()
    }

    fn answer(url: &str, body: &str, keep: Option<usize>, tag: bool) -> TransportResponse {
        let items: Vec<Value> = match serde_json::from_str(body) {
            Ok(items) => items,
            Err(e) => return TransportResponse::new(400, format!("Invalid request body: {}", e)),
        };

        let to = Url::parse(url)
            .ok()
            .and_then(|url| {
                url.query_pairs()
                    .find(|(name, _)| name == "to")
                    .map(|(_, value)| value.into_owned())
            })
            .unwrap_or_default();

        let texts: Vec<String> = items
            .iter()
            .take(keep.unwrap_or(usize::MAX))
            .map(|item| {
                let text = item["Text"].as_str().unwrap_or_default();
                if tag { format!("[{}] {}", to, text) } else { text.to_string() }
            })
            .collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();

        TransportResponse::new(200, Self::response_body(&refs, &to))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> Result<TransportResponse, TransportError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(RecordedRequest {
                url: url.to_string(),
                headers: headers.to_vec(),
                body: body.clone(),
            });
        }

        match &self.behavior {
            MockBehavior::Echo => Ok(Self::answer(url, &body, None, false)),
            MockBehavior::Tagging => Ok(Self::answer(url, &body, None, true)),
            MockBehavior::Truncated { keep } => Ok(Self::answer(url, &body, Some(*keep), true)),
            MockBehavior::Fixed { status, body } => Ok(TransportResponse::new(*status, body.clone())),
            MockBehavior::Failing => Err(TransportError::ConnectionError(
                "Simulated connection failure".to_string(),
            )),
            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(*delay_ms)).await;
                Ok(Self::answer(url, &body, None, true))
            }
        }
    }
}
