//! Locale utilities for translator target codes
//!
//! The translator accepts BCP-47 style codes such as `fr`, `pt-PT`,
//! `zh-Hans` or `sr-Cyrl`. Only the primary subtag is checked against
//! ISO 639; script and region subtags are checked for shape only.

use anyhow::{Result, anyhow};
use isolang::Language;

/// Return the primary language subtag of a locale, lowercased
pub fn primary_subtag(locale: &str) -> String {
    locale
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Validate a translator target locale
pub fn validate_locale(locale: &str) -> Result<()> {
    let trimmed = locale.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("Locale code is empty"));
    }

    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(anyhow!("Invalid characters in locale code: {}", locale));
    }

    if trimmed
        .split(['-', '_'])
        .any(|subtag| subtag.is_empty() || subtag.len() > 8)
    {
        return Err(anyhow!("Malformed locale code: {}", locale));
    }

    let primary = primary_subtag(trimmed);
    let known = match primary.len() {
        2 => Language::from_639_1(&primary).is_some(),
        3 => Language::from_639_3(&primary).is_some(),
        _ => false,
    };

    if known {
        Ok(())
    } else {
        Err(anyhow!("Unknown language in locale code: {}", locale))
    }
}

/// Get the English language name for a locale
pub fn get_language_name(locale: &str) -> Result<String> {
    let primary = primary_subtag(locale);
    let lang = match primary.len() {
        2 => Language::from_639_1(&primary),
        3 => Language::from_639_3(&primary),
        _ => None,
    }
    .ok_or_else(|| anyhow!("Failed to get language from code: {}", locale))?;

    Ok(lang.to_name().to_string())
}
