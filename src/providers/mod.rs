/*!
 * Transport implementations for the translation endpoint.
 *
 * The engine never performs HTTP itself. It hands a fully built request to
 * a `Transport` and gets back the status and body text:
 * - `http`: reqwest-backed transport used in production
 * - `mock`: scripted transport for tests and offline runs
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::TransportError;

/// Raw outcome of one HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl TransportResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability to POST a JSON body and read back the response.
///
/// Cancellation is by drop: callers race the returned future against their
/// cancellation signal, and implementations must not keep work running once
/// the future is dropped.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// POST `body` (UTF-8 JSON) to `url` with the given extra headers
    ///
    /// # Returns
    /// * `Ok(TransportResponse)` for any HTTP response, including non-2xx
    /// * `Err(TransportError)` if no response was received
    async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> Result<TransportResponse, TransportError>;
}

pub mod http;
pub mod mock;
