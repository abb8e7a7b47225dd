/*!
 * Tests for locale utility functions
 */

use cardtranslate::language_utils::{get_language_name, primary_subtag, validate_locale};

#[test]
fn test_validate_locale_withTranslatorCodes_shouldAccept() {
    for locale in ["fr", "de", "ja", "pt-PT", "zh-Hans", "sr-Cyrl", "fil", "yue", " en "] {
        assert!(validate_locale(locale).is_ok(), "{} should be valid", locale);
    }
}

#[test]
fn test_validate_locale_withBadCodes_shouldReject() {
    for locale in ["", "   ", "xyz", "f", "fr-", "fr&to=de", "en US", "123"] {
        assert!(validate_locale(locale).is_err(), "{:?} should be invalid", locale);
    }
}

#[test]
fn test_primary_subtag_shouldLowercaseFirstPart() {
    assert_eq!(primary_subtag("zh-Hans"), "zh");
    assert_eq!(primary_subtag("PT_br"), "pt");
    assert_eq!(primary_subtag("fr"), "fr");
}

#[test]
fn test_get_language_name_withValidCodes_shouldReturnName() {
    assert_eq!(get_language_name("fr").unwrap(), "French");
    assert_eq!(get_language_name("de-AT").unwrap(), "German");
    assert!(get_language_name("xx").is_err());
}
