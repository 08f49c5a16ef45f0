use std::collections::HashMap;

use pretty_assertions::assert_eq;
use schedulesync_api::config::ApiConfig;
use schedulesync_core::dates::DateLocale;
use tracing::Level;

fn config_from(pairs: &[(&str, &str)]) -> eyre::Result<ApiConfig> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ApiConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[("DATABASE_URL", "postgres://localhost/schedulesync")]).unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.cors_origins, None);
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.public_origin, "http://localhost:3000");
    assert_eq!(config.date_locale, DateLocale::EnUs);
    assert_eq!(config.server_addr(), "0.0.0.0:3000");
    assert!(!config.uses_memory_store());
}

#[test]
fn test_overrides() {
    let config = config_from(&[
        ("DATABASE_URL", "memory"),
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
        ("LOG_LEVEL", "DEBUG"),
        ("API_CORS_ORIGINS", "https://a.example, https://b.example,"),
        ("API_REQUEST_TIMEOUT_SECONDS", "5"),
        ("PUBLIC_ORIGIN", "https://sync.example.com/"),
        ("DATE_LOCALE", "fr-FR"),
    ])
    .unwrap();

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(
        config.cors_origins,
        Some(vec![
            "https://a.example".to_string(),
            "https://b.example".to_string()
        ])
    );
    assert_eq!(config.request_timeout, 5);
    assert_eq!(config.public_origin, "https://sync.example.com");
    assert_eq!(config.date_locale, DateLocale::FrFr);
    assert!(config.uses_memory_store());
}

#[test]
fn test_database_url_is_required() {
    assert!(config_from(&[]).is_err());
}

#[test]
fn test_invalid_port_and_locale_are_errors() {
    assert!(config_from(&[("DATABASE_URL", "memory"), ("API_PORT", "http")]).is_err());
    assert!(config_from(&[("DATABASE_URL", "memory"), ("DATE_LOCALE", "xx-YY")]).is_err());
}
