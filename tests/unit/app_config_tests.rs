/*!
 * Tests for application configuration functionality
 */

use tempfile::TempDir;
use cardtranslate::app_config::{Config, LogLevel, TranslatorConfig};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.target_language, "fr");
    assert_eq!(config.translator.endpoint, "https://api.cognitive.microsofttranslator.com");
    assert_eq!(config.translator.api_key_env, "TRANSLATOR_KEY");
    assert_eq!(config.translator.timeout_secs, 30);
    assert!(config.translator.api_key.is_empty());
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.target_language = "zh-Hans".to_string();
    assert!(config.validate().is_ok());

    config.target_language = "xyz".to_string();
    assert!(config.validate().is_err());

    config.target_language = "".to_string();
    assert!(config.validate().is_err());
    config.target_language = "de".to_string();

    config.translator.endpoint = "ftp://translator.test".to_string();
    assert!(config.validate().is_err());

    config.translator.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
    config.translator.endpoint = "http://localhost:8080".to_string();

    config.translator.timeout_secs = 0;
    assert!(config.validate().is_err());
    config.translator.timeout_secs = 5;

    assert!(config.validate().is_ok());
}

/// Test that partial JSON falls back to defaults
#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() {
    let config: Config = serde_json::from_str(r#"{ "target_language": "es", "log_level": "debug" }"#)
        .expect("Partial config should parse");

    assert_eq!(config.target_language, "es");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.translator.timeout_secs, 30);
}

/// Test save and reload of configuration
#[test]
fn test_config_loadOrCreate_withMissingFile_shouldWriteDefaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf.json");

    let created = Config::load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(created.target_language, "fr");

    let mut changed = created.clone();
    changed.target_language = "ja".to_string();
    changed.translator.api_key = "from-file".to_string();
    changed.save(&path).unwrap();

    let reloaded = Config::load_or_create(&path).unwrap();
    assert_eq!(reloaded.target_language, "ja");
    assert_eq!(reloaded.translator.api_key, "from-file");
}

#[test]
fn test_config_load_withInvalidJson_shouldFail() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, "{ nope").unwrap();

    let error = Config::load(&path).unwrap_err();
    assert!(error.to_string().contains("Failed to parse config file"));
}

/// Test API key resolution order
#[test]
fn test_resolve_api_key_withExplicitKey_shouldPreferIt() {
    let config = TranslatorConfig {
        api_key: "  explicit  ".to_string(),
        api_key_env: "CARDTRANSLATE_TEST_UNUSED_KEY".to_string(),
        ..TranslatorConfig::default()
    };
    assert_eq!(config.resolve_api_key().as_deref(), Some("explicit"));
}

#[test]
fn test_resolve_api_key_withEnvironment_shouldReadVariable() {
    let variable = "CARDTRANSLATE_TEST_ENV_KEY";
    unsafe {
        std::env::set_var(variable, "from-env");
    }

    let config = TranslatorConfig {
        api_key_env: variable.to_string(),
        ..TranslatorConfig::default()
    };
    assert_eq!(config.resolve_api_key().as_deref(), Some("from-env"));

    unsafe {
        std::env::remove_var(variable);
    }
    assert_eq!(config.resolve_api_key(), None);
}
