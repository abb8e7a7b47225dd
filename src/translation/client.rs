/*!
 * Translator endpoint client.
 *
 * Builds the batch request, performs exactly one exchange through the
 * injected transport, and decodes the ordered response. Every exchange
 * races the caller's cancellation future; nothing is retried.
 */

use log::{debug, error};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use url::Url;

use crate::errors::{TranslationError, TransportError};
use crate::language_utils;
use crate::providers::Transport;

use super::wire::{self, TranslatorResponse};

/// Header carrying the subscription key
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Translator API version sent with every request
pub const API_VERSION: &str = "3.0";

/// Client for the batch translate endpoint
#[derive(Clone)]
pub struct TranslatorClient {
    /// Transport performing the HTTP exchange
    transport: Arc<dyn Transport>,
    /// Service host, e.g. `https://api.cognitive.microsofttranslator.com`
    endpoint: String,
    /// Subscription key
    api_key: String,
}

impl fmt::Debug for TranslatorClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatorClient")
            .field("transport", &self.transport)
            .field("endpoint", &self.endpoint)
            .field("api_key", &"***")
            .finish()
    }
}

impl TranslatorClient {
    /// Create a client
    pub fn new(
        transport: Arc<dyn Transport>,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// The service host this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build `<host>/translate?api-version=3.0&to=<locale>`
    pub fn translate_url(&self, target_locale: &str) -> Result<Url, TranslationError> {
        language_utils::validate_locale(target_locale)
            .map_err(|e| TranslationError::InvalidLocale(e.to_string()))?;

        let base = format!("{}/translate", self.endpoint.trim_end_matches('/'));
        let mut url = Url::parse(&base).map_err(|e| {
            TranslationError::Transport(TransportError::RequestFailed(format!(
                "Invalid translator endpoint '{}': {}",
                self.endpoint, e
            )))
        })?;

        url.query_pairs_mut()
            .append_pair("api-version", API_VERSION)
            .append_pair("to", target_locale.trim());

        Ok(url)
    }

    /// Send one batch and return the decoded, position-aligned results.
    ///
    /// The result may be shorter than `texts`; callers decide how to treat
    /// the missing tail.
    pub async fn translate_batch<C>(
        &self,
        texts: &[&str],
        target_locale: &str,
        cancel: C,
    ) -> Result<Vec<TranslatorResponse>, TranslationError>
    where
        C: Future<Output = ()> + Send,
    {
        let url = self.translate_url(target_locale)?;
        let body = wire::encode_batch(texts.iter().copied())?;
        let headers = vec![(SUBSCRIPTION_KEY_HEADER.to_string(), self.api_key.clone())];

        debug!("Sending {} text(s) to {} for '{}'", texts.len(), self.endpoint, target_locale);

        let exchange = self.transport.post_json(url.as_str(), &headers, body);
        let response = tokio::select! {
            response = exchange => response?,
            _ = cancel => {
                debug!("Translation request to {} cancelled", self.endpoint);
                return Err(TranslationError::Cancelled);
            }
        };

        if !response.is_success() {
            error!("Translator API error ({}): {}", response.status, response.body);
            return Err(TransportError::ApiError {
                status_code: response.status,
                message: response.body,
            }
            .into());
        }

        wire::decode_batch(&response.body)
    }

    /// Translate a single string.
    ///
    /// Returns `Ok(None)` when the service answers without usable text.
    pub async fn translate_text<C>(
        &self,
        text: &str,
        target_locale: &str,
        cancel: C,
    ) -> Result<Option<String>, TranslationError>
    where
        C: Future<Output = ()> + Send,
    {
        let results = self.translate_batch(&[text], target_locale, cancel).await?;

        Ok(results
            .first()
            .and_then(TranslatorResponse::usable_text)
            .map(str::to_string))
    }
}
