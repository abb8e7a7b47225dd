/*!
 * Tests for error types and conversions
 */

use cardtranslate::errors::{AppError, TranslationError, TransportError};

#[test]
fn test_transportError_apiError_shouldDisplayStatusAndMessage() {
    let error = TransportError::ApiError {
        status_code: 401,
        message: "Access denied".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("401"));
    assert!(display.contains("Access denied"));
}

#[test]
fn test_transportError_timeout_shouldDisplayCorrectly() {
    let error = TransportError::Timeout("after 30s".to_string());
    let display = format!("{}", error);
    assert!(display.contains("timed out"));
    assert!(display.contains("after 30s"));
}

#[test]
fn test_translationError_fromTransportError_shouldWrapCorrectly() {
    let transport_error = TransportError::ConnectionError("Host unreachable".to_string());
    let error: TranslationError = transport_error.into();

    match &error {
        TranslationError::Transport(TransportError::ConnectionError(msg)) => {
            assert_eq!(msg, "Host unreachable")
        }
        other => panic!("Expected Transport variant, got {:?}", other),
    }
    assert!(error.is_retryable());
}

#[test]
fn test_translationError_variants_shouldDisplayCorrectly() {
    assert!(TranslationError::InvalidDocument("x".to_string()).to_string().contains("Invalid document"));
    assert!(TranslationError::MalformedResponse("x".to_string()).to_string().contains("Malformed"));
    assert_eq!(TranslationError::Cancelled.to_string(), "Translation cancelled");
}

#[test]
fn test_appError_fromTranslationError_shouldWrapCorrectly() {
    let app_error: AppError = TranslationError::Cancelled.into();
    assert!(matches!(app_error, AppError::Translation(TranslationError::Cancelled)));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "card.json missing");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(_)));
    assert!(app_error.to_string().contains("card.json missing"));
}

#[test]
fn test_translationError_everyVariant_shouldPreserveDocument() {
    let errors = [
        TranslationError::InvalidDocument("root".to_string()),
        TranslationError::InvalidLocale("x y".to_string()),
        TranslationError::Transport(TransportError::Timeout("30s".to_string())),
        TranslationError::MalformedResponse("null".to_string()),
        TranslationError::Cancelled,
    ];
    for error in &errors {
        assert!(error.is_document_preserved(), "{:?} should preserve the document", error);
    }
}
