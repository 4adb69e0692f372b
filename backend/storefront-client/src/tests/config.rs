// Unit tests for StorefrontConfig defaults, persistence and overrides

use crate::STOREFRONT_SERVER_BASE_URL;
use crate::config::{BASE_URL_ENV, StorefrontConfig, TOKEN_KEY_ENV};
use crate::error::ConfigError;

use std::collections::HashMap;

#[test]
fn given_defaults_when_inspected_then_match_backend_conventions() {
    // GIVEN: Default config
    let config = StorefrontConfig::default();

    // THEN: Token key, login path and marker match what the backend uses
    assert_eq!(config.server.base_url, STOREFRONT_SERVER_BASE_URL);
    assert_eq!(config.server.base_url, "http://127.0.0.1:5000/");
    assert_eq!(config.storage.token_key, "token");
    assert_eq!(config.navigation.login_path, "/login");
    assert_eq!(config.messages.reset_success_marker, "başarıyla");
    assert_eq!(config.messages.product_added, "Product added!");
    assert!(config.validate().is_ok());
}

#[test]
fn given_missing_config_file_when_loaded_then_returns_defaults() {
    // GIVEN: An empty directory
    let dir = tempfile::tempdir().unwrap();

    // WHEN: Loading
    let config = StorefrontConfig::load(dir.path()).unwrap();

    // THEN: Defaults
    assert_eq!(config.storage.token_key, "token");
}

/// **VALUE**: Verifies save + load preserves user edits.
///
/// **BUG THIS CATCHES**: Would catch a field missing `serde(default)` or a broken
/// temp-file rename that leaves `config.json` absent.
#[test]
fn given_saved_config_when_loaded_then_values_survive() {
    // GIVEN: A config with custom values saved to disk
    let dir = tempfile::tempdir().unwrap();
    let mut config = StorefrontConfig::default();
    config.server.base_url = "http://shop.local:8080/".to_string();
    config.messages.product_added = "Ürün eklendi!".to_string();
    config.save(dir.path()).unwrap();

    // WHEN: Loading it back
    let loaded = StorefrontConfig::load(dir.path()).unwrap();

    // THEN: Custom values are preserved and no temp file remains
    assert_eq!(loaded.server.base_url, "http://shop.local:8080/");
    assert_eq!(loaded.messages.product_added, "Ürün eklendi!");
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn given_partial_config_file_when_loaded_then_missing_fields_take_defaults() {
    // GIVEN: A config file that only sets the login path
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "navigation": { "login_path": "/giris" } }"#,
    )
    .unwrap();

    // WHEN: Loading
    let config = StorefrontConfig::load(dir.path()).unwrap();

    // THEN: Set value kept, everything else defaulted
    assert_eq!(config.navigation.login_path, "/giris");
    assert_eq!(config.storage.token_key, "token");
    assert_eq!(config.server.timeout_secs, 30);
}

#[test]
fn given_corrupt_config_file_when_loaded_then_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    let result = StorefrontConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_invalid_values_when_validated_then_each_is_rejected() {
    let mut bad_url = StorefrontConfig::default();
    bad_url.server.base_url = "not a url".to_string();
    assert!(matches!(bad_url.validate(), Err(ConfigError::ValidationError { .. })));

    let mut empty_key = StorefrontConfig::default();
    empty_key.storage.token_key = "  ".to_string();
    assert!(empty_key.validate().is_err());

    let mut relative_login = StorefrontConfig::default();
    relative_login.navigation.login_path = "login".to_string();
    assert!(relative_login.validate().is_err());

    let mut zero_timeout = StorefrontConfig::default();
    zero_timeout.server.timeout_secs = 0;
    assert!(zero_timeout.validate().is_err());

    let mut empty_marker = StorefrontConfig::default();
    empty_marker.messages.reset_success_marker.clear();
    assert!(empty_marker.validate().is_err());
}

#[test]
fn given_invalid_config_when_saved_then_nothing_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = StorefrontConfig::default();
    config.navigation.login_path = "login".to_string();

    let result = config.save(dir.path());

    assert!(result.is_err());
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn given_overrides_when_applied_then_base_url_and_token_key_change() {
    // GIVEN: An override source
    let vars: HashMap<&str, &str> = HashMap::from([
        (BASE_URL_ENV, "http://staging.shop.local/"),
        (TOKEN_KEY_ENV, "auth_token"),
    ]);
    let mut config = StorefrontConfig::default();

    // WHEN: Applying overrides
    config
        .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
        .unwrap();

    // THEN: Both values replaced
    assert_eq!(config.server.base_url, "http://staging.shop.local/");
    assert_eq!(config.storage.token_key, "auth_token");
}

#[test]
fn given_invalid_override_when_applied_then_returns_validation_error() {
    let mut config = StorefrontConfig::default();

    let result = config.apply_overrides(|key| (key == BASE_URL_ENV).then(|| "::".to_string()));

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
