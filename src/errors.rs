/*!
 * Error types for the cardtranslate library.
 *
 * This module contains custom error types for the different layers of the
 * engine, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while talking to the translation endpoint
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// Error when sending the request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error returned by the API itself (non-2xx status)
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),
}

/// Errors that can occur while translating a card or a single string.
///
/// Every variant leaves the caller's document exactly as it was: write-back
/// only happens after a complete, well-formed response has been received.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslationError {
    /// The input is not a JSON object/array tree
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// The target locale is not usable
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Network or HTTP failure
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body does not have the expected batch shape
    #[error("Malformed translation response: {0}")]
    MalformedResponse(String),

    /// The request was cancelled before the response arrived
    #[error("Translation cancelled")]
    Cancelled,
}

impl TranslationError {
    /// Whether the document passed in is still exactly as it was.
    ///
    /// Always true: results are written only after a fully decoded
    /// response, so no error leaves a half-translated card behind.
    pub fn is_document_preserved(&self) -> bool {
        true
    }

    /// Whether a caller-level retry could plausibly succeed.
    ///
    /// Nothing inside the engine retries; this is a hint for hosts that
    /// layer their own retry policy on top.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(TransportError::ApiError { status_code, .. }) => {
                *status_code == 429 || *status_code >= 500
            }
            Self::Transport(_) => true,
            _ => false,
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the transport layer
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
