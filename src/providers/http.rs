/*!
 * HTTP transport.
 *
 * Posts JSON bodies with reqwest and maps client failures onto
 * `TransportError`. Non-success statuses are returned as responses so the
 * translator client can report them with the body attached.
 */

use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, header};
use std::time::Duration;

use crate::errors::TransportError;
use super::{Transport, TransportResponse};

/// HTTP transport backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// HTTP client for API requests
    client: Client,
}

impl HttpTransport {
    /// Create a transport whose requests time out after `timeout_secs`
    pub fn new(timeout_secs: u64) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| TransportError::RequestFailed(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> Result<TransportResponse, TransportError> {
        let mut request = self.client.post(url)
            .header(header::CONTENT_TYPE, "application/json; charset=UTF-8")
            .body(body);

        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();

        let text = response.text().await.map_err(|e| {
            error!("Failed to read translator response body ({}): {}", status, e);
            map_reqwest_error(e)
        })?;

        debug!("Translator responded with {} ({} bytes)", status, text.len());

        Ok(TransportResponse::new(status.as_u16(), text))
    }
}

fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout(error.to_string())
    } else if error.is_connect() {
        TransportError::ConnectionError(error.to_string())
    } else {
        TransportError::RequestFailed(error.to_string())
    }
}
