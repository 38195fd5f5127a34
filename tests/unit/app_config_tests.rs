/*!
 * Tests for application configuration functionality
 */

use content_translator::app_config::{Config, LogLevel};

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.provider.endpoint, "https://api-free.deepl.com");
    assert_eq!(config.provider.timeout_secs, 30);
    assert!(config.provider.api_key.is_empty());
    assert!(config.database_path.is_empty());
    assert!(config.locale_mapping.is_empty());
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    // Default config has no API key, so it must not validate
    assert!(config.validate().is_err());

    config.provider.api_key = "test-key".to_string();
    assert!(config.validate().is_ok());

    // Whitespace-only key counts as missing
    config.provider.api_key = "   ".to_string();
    assert!(config.validate().is_err());
    config.provider.api_key = "test-key".to_string();

    config.provider.endpoint = String::new();
    assert!(config.validate().is_err());
    config.provider.endpoint = "https://api.deepl.com".to_string();

    config.provider.timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_fromFile_withValidJson_shouldLoadConfig() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(
        &dir.path().to_path_buf(),
        "conf.json",
        r#"{
            "provider": {
                "api_key": "secret",
                "endpoint": "https://api.deepl.com",
                "timeout_secs": 10
            },
            "locale_mapping": { "pt": "PT-PT" },
            "log_level": "debug"
        }"#,
    )
    .unwrap();

    let config = Config::from_file(&path).expect("Failed to load config");

    assert_eq!(config.provider.api_key, "secret");
    assert_eq!(config.provider.endpoint, "https://api.deepl.com");
    assert_eq!(config.provider.timeout_secs, 10);
    assert_eq!(config.locale_mapping.get("pt").unwrap(), "PT-PT");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.validate().is_ok());
}

#[test]
fn test_fromFile_withPartialJson_shouldFillDefaults() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(
        &dir.path().to_path_buf(),
        "conf.json",
        r#"{ "provider": { "api_key": "secret" } }"#,
    )
    .unwrap();

    let config = Config::from_file(&path).expect("Failed to load config");

    assert_eq!(config.provider.endpoint, "https://api-free.deepl.com");
    assert_eq!(config.provider.timeout_secs, 30);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_fromFile_withMissingFile_shouldFail() {
    let dir = common::create_temp_dir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_fromFile_withInvalidJson_shouldFail() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(&dir.path().to_path_buf(), "conf.json", "{ not json")
        .unwrap();

    assert!(Config::from_file(&path).is_err());
}
