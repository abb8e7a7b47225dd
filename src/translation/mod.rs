/*!
 * Translation of Adaptive Cards through the translator endpoint.
 *
 * - `core`: `CardTranslator`, the collect-then-dispatch entry point
 * - `client`: request building and the single network exchange
 * - `dispatcher`: batch dispatch and positional write-back
 * - `wire`: request/response records of the batch endpoint
 */

// Re-export main types for easier usage
pub use self::client::{API_VERSION, SUBSCRIPTION_KEY_HEADER, TranslatorClient};
pub use self::core::CardTranslator;
pub use self::dispatcher::{DispatchReport, apply_results, dispatch};
pub use self::wire::{TranslatorResponse, TranslatorResult};

// Submodules
pub mod client;
pub mod core;
pub mod dispatcher;
pub mod wire;
