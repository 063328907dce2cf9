//! # Configuration Tests

use std::collections::HashMap;
use storefront_bot::config::{Config, ConfigError, DEFAULT_PORT};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_defaults_apply_when_optional_vars_are_unset() {
    let config = Config::from_lookup(lookup(&[
        ("WHATSAPP_TOKEN", "secret"),
        ("PHONE_NUMBER_ID", "1234"),
    ]))
    .unwrap();

    assert_eq!(config.whatsapp_token, "secret");
    assert_eq!(config.phone_number_id, "1234");
    assert_eq!(config.verify_token, "my_verify_token");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.locale, "ar");
    assert!(config.catalog_path.is_none());
    assert_eq!(config.graph_api_base, "https://graph.facebook.com");
    assert_eq!(config.graph_api_version, "v18.0");
}

#[test]
fn test_overrides() {
    let config = Config::from_lookup(lookup(&[
        ("WHATSAPP_TOKEN", "secret"),
        ("PHONE_NUMBER_ID", "1234"),
        ("VERIFY_TOKEN", "hub-secret"),
        ("PORT", "8080"),
        ("BOT_LOCALE", "en"),
        ("CATALOG_PATH", "/etc/bot/catalog.json"),
    ]))
    .unwrap();

    assert_eq!(config.verify_token, "hub-secret");
    assert_eq!(config.port, 8080);
    assert_eq!(config.locale, "en");
    assert_eq!(
        config.catalog_path.as_deref(),
        Some(std::path::Path::new("/etc/bot/catalog.json"))
    );
}

#[test]
fn test_missing_credentials() {
    let err = Config::from_lookup(lookup(&[("PHONE_NUMBER_ID", "1234")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("WHATSAPP_TOKEN"));

    let err = Config::from_lookup(lookup(&[("WHATSAPP_TOKEN", "secret"), ("PHONE_NUMBER_ID", "  ")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::Missing("PHONE_NUMBER_ID"));
}

#[test]
fn test_invalid_port() {
    let err = Config::from_lookup(lookup(&[
        ("WHATSAPP_TOKEN", "secret"),
        ("PHONE_NUMBER_ID", "1234"),
        ("PORT", "http"),
    ]))
    .unwrap_err();

    assert_eq!(
        err,
        ConfigError::Invalid {
            var: "PORT",
            value: "http".to_string()
        }
    );
    assert_eq!(err.to_string(), "PORT has an invalid value `http`");
}
