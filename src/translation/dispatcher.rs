/*!
 * Translation dispatcher.
 *
 * Sends the collected units as a single batch and writes the results back
 * into the document. Result `i` belongs to unit `i`; a short response is
 * applied to the common prefix and the tail keeps its original text.
 */

use log::{debug, info, warn};
use serde_json::Value;
use std::future::Future;

use crate::card::TranslationUnit;
use crate::errors::TranslationError;

use super::client::TranslatorClient;
use super::wire::TranslatorResponse;

/// Outcome of a successful dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchReport {
    /// Units sent to the service
    pub sent: usize,
    /// Results received back
    pub received: usize,
    /// Leaves overwritten with a translation
    pub applied: usize,
    /// Units left untouched (blank result, or no result at all)
    pub skipped: usize,
}

impl DispatchReport {
    /// Whether the service answered fewer items than were sent
    pub fn is_partial(&self) -> bool {
        self.received < self.sent
    }
}

/// Translate `units` and write the results into `document`.
///
/// `document` must be the tree the units were collected from, with its
/// structure unchanged since collection. On any error the document is left
/// exactly as it was: nothing is written until the whole response has been
/// received and decoded.
pub async fn dispatch<C>(
    client: &TranslatorClient,
    document: &mut Value,
    units: &[TranslationUnit],
    target_locale: &str,
    cancel: C,
) -> Result<DispatchReport, TranslationError>
where
    C: Future<Output = ()> + Send,
{
    if units.is_empty() {
        debug!("No translatable text found, skipping translator call");
        return Ok(DispatchReport::default());
    }

    let texts: Vec<&str> = units.iter().map(|unit| unit.original_text.as_str()).collect();
    let results = client.translate_batch(&texts, target_locale, cancel).await?;

    let report = apply_results(document, units, &results);

    if report.is_partial() {
        warn!(
            "Translator returned {} result(s) for {} text(s); the rest keep their original text",
            report.received, report.sent
        );
    }
    info!(
        "Translated {}/{} text(s) to '{}'",
        report.applied, report.sent, target_locale
    );

    Ok(report)
}

/// Write position-correlated results back into the document.
///
/// Pairs are formed up to the shorter of the two sequences. A result with
/// no usable text leaves its unit's leaf untouched.
pub fn apply_results(
    document: &mut Value,
    units: &[TranslationUnit],
    results: &[TranslatorResponse],
) -> DispatchReport {
    let mut report = DispatchReport {
        sent: units.len(),
        received: results.len(),
        ..DispatchReport::default()
    };

    for (unit, result) in units.iter().zip(results) {
        let Some(text) = result.usable_text() else {
            debug!("No usable translation for {}", unit.location);
            continue;
        };

        if unit.location.write(document, text) {
            report.applied += 1;
        } else {
            // Structure changed since collection; refuse to guess
            warn!("Translation target {} is no longer a string leaf", unit.location);
        }
    }

    report.skipped = report.sent - report.applied;
    report
}
