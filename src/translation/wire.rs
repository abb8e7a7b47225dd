/*!
 * Wire format of the translator batch endpoint.
 *
 * Outbound: `[{"Text": "..."}, ...]`, one item per string, order-significant.
 * Inbound: `[{"translations": [{"text": "...", "to": "fr"}]}, ...]`, one item
 * per input in the same order.
 */

use serde::{Deserialize, Serialize};

use crate::errors::{TranslationError, TransportError};

/// One outbound item
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TranslateRequestItem<'a> {
    /// Text to translate
    #[serde(rename = "Text")]
    pub text: &'a str,
}

/// One inbound item, correlated by position with the request item
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct TranslatorResponse {
    /// Candidate translations; the first one is used
    #[serde(default)]
    pub translations: Option<Vec<TranslatorResult>>,
}

/// A single translation of one input text
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TranslatorResult {
    /// Translated text
    #[serde(default)]
    pub text: Option<String>,
    /// Locale the text was translated to
    #[serde(default)]
    pub to: Option<String>,
}

impl TranslatorResponse {
    /// The first translation's text, if it carries real content.
    ///
    /// Missing, empty and whitespace-only texts yield `None` so they never
    /// overwrite the original.
    pub fn usable_text(&self) -> Option<&str> {
        self.translations
            .as_ref()?
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Serialize texts into the outbound batch body
pub fn encode_batch<'a, I>(texts: I) -> Result<String, TranslationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let items: Vec<TranslateRequestItem<'a>> = texts
        .into_iter()
        .map(|text| TranslateRequestItem { text })
        .collect();

    serde_json::to_string(&items).map_err(|e| {
        TransportError::RequestFailed(format!("Failed to encode translate request body: {}", e)).into()
    })
}

/// Parse an inbound batch body.
///
/// `null` items are kept as empty responses so positions stay aligned; any
/// other shape mismatch rejects the whole body.
pub fn decode_batch(body: &str) -> Result<Vec<TranslatorResponse>, TranslationError> {
    let items: Vec<Option<TranslatorResponse>> = serde_json::from_str(body)
        .map_err(|e| TranslationError::MalformedResponse(e.to_string()))?;

    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}
