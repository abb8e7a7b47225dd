/*!
 * Card translation service.
 *
 * `CardTranslator` ties the collector and the dispatcher together: one call
 * collects the card's human-readable strings, sends them in one batch and
 * writes the translations back in place.
 */

use log::debug;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;

use crate::app_config::TranslatorConfig;
use crate::card::{self, TranslationUnit};
use crate::errors::{AppError, TranslationError};
use crate::providers::Transport;
use crate::providers::http::HttpTransport;

use super::client::TranslatorClient;
use super::dispatcher::{self, DispatchReport};

/// Translates Adaptive Cards through the translator endpoint
#[derive(Debug, Clone)]
pub struct CardTranslator {
    client: TranslatorClient,
}

impl CardTranslator {
    /// Create a translator over an explicit transport
    pub fn new(
        transport: Arc<dyn Transport>,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client: TranslatorClient::new(transport, endpoint, api_key),
        }
    }

    /// Create a translator using the HTTP transport and configured key
    pub fn from_config(config: &TranslatorConfig) -> Result<Self, AppError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            AppError::Config(format!(
                "Translator API key is required (set translator.api_key or {})",
                config.api_key_env
            ))
        })?;

        let transport = HttpTransport::new(config.timeout_secs)?;
        Ok(Self::new(Arc::new(transport), config.endpoint.clone(), api_key))
    }

    /// Access the underlying endpoint client
    pub fn client(&self) -> &TranslatorClient {
        &self.client
    }

    /// Collect the translatable strings of a card without translating
    pub fn collect(&self, document: &Value) -> Vec<TranslationUnit> {
        card::collect(document)
    }

    /// Translate a card in place.
    ///
    /// On error the document is unchanged, so callers can fall back to
    /// showing the untranslated card.
    pub async fn translate_card<C>(
        &self,
        document: &mut Value,
        target_locale: &str,
        cancel: C,
    ) -> Result<DispatchReport, TranslationError>
    where
        C: Future<Output = ()> + Send,
    {
        card::ensure_container_root(document)?;

        let units = card::collect(document);
        debug!("Collected {} translatable text(s)", units.len());

        dispatcher::dispatch(&self.client, document, &units, target_locale, cancel).await
    }

    /// Parse card JSON and return the translated document.
    ///
    /// Invalid JSON is rejected before any request is made.
    pub async fn translate_card_json<C>(
        &self,
        json: &str,
        target_locale: &str,
        cancel: C,
    ) -> Result<Value, TranslationError>
    where
        C: Future<Output = ()> + Send,
    {
        let mut document = card::parse_document(json)?;
        self.translate_card(&mut document, target_locale, cancel).await?;
        Ok(document)
    }

    /// Translate a single string
    pub async fn translate_text<C>(
        &self,
        text: &str,
        target_locale: &str,
        cancel: C,
    ) -> Result<Option<String>, TranslationError>
    where
        C: Future<Output = ()> + Send,
    {
        if text.trim().is_empty() {
            return Ok(None);
        }
        self.client.translate_text(text, target_locale, cancel).await
    }
}
