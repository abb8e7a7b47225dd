/*!
 * Adaptive Card document handling.
 *
 * A card is held as a `serde_json::Value` tree (object, array, string and
 * scalar nodes) with object keys in source order. This module contains:
 *
 * - `collector`: finds the translatable strings of a card
 * - `location`: addresses a single leaf slot for later write-back
 */

use serde_json::Value;

use crate::errors::TranslationError;

pub use self::collector::{TRANSLATABLE_KEYS, TranslationUnit, collect, is_translatable_key};
pub use self::location::{Location, Slot};

pub mod collector;
pub mod location;

/// Parse card JSON into a document tree.
///
/// The root must be an object or an array; anything else cannot hold card
/// elements and is rejected as an invalid document.
pub fn parse_document(json: &str) -> Result<Value, TranslationError> {
    let document: Value = serde_json::from_str(json)
        .map_err(|e| TranslationError::InvalidDocument(format!("not valid JSON: {}", e)))?;
    ensure_container_root(&document)?;
    Ok(document)
}

/// Check that a document root is an object or an array
pub fn ensure_container_root(document: &Value) -> Result<(), TranslationError> {
    match document {
        Value::Object(_) | Value::Array(_) => Ok(()),
        other => Err(TranslationError::InvalidDocument(format!(
            "root must be an object or array, found {}",
            kind_name(other)
        ))),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
