use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "BREWMAP_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.arcgis_base_url, DEFAULT_ARCGIS_BASE_URL);
    assert!(cfg.arcgis_token.is_none());
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.user_agent, "brewmap/0.1 (coffee-finder)");
    assert_eq!(cfg.shop_category, "Coffee Shop");
    assert_eq!(cfg.max_locations, 50);
    assert_eq!(cfg.max_suggestions, 10);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("BREWMAP_ENV", "production");
    map.insert("BREWMAP_ARCGIS_BASE_URL", "http://localhost:9000/geocode");
    map.insert("BREWMAP_ARCGIS_TOKEN", "secret-token");
    map.insert("BREWMAP_REQUEST_TIMEOUT_SECS", "3");
    map.insert("BREWMAP_SHOP_CATEGORY", "Bakery");
    map.insert("BREWMAP_MAX_LOCATIONS", "20");
    map.insert("BREWMAP_MAX_SUGGESTIONS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.arcgis_base_url, "http://localhost:9000/geocode");
    assert_eq!(cfg.arcgis_token.as_deref(), Some("secret-token"));
    assert_eq!(cfg.request_timeout_secs, 3);
    assert_eq!(cfg.shop_category, "Bakery");
    assert_eq!(cfg.max_locations, 20);
    assert_eq!(cfg.max_suggestions, 5);
}

#[test]
fn blank_token_is_treated_as_absent() {
    let mut map = HashMap::new();
    map.insert("BREWMAP_ARCGIS_TOKEN", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.arcgis_token.is_none());
}

#[test]
fn debug_output_redacts_token() {
    let mut map = HashMap::new();
    map.insert("BREWMAP_ARCGIS_TOKEN", "secret-token");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("secret-token"));
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn build_app_config_fails_with_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("BREWMAP_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BREWMAP_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(BREWMAP_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("BREWMAP_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BREWMAP_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(BREWMAP_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_max_locations() {
    let mut map = HashMap::new();
    map.insert("BREWMAP_MAX_LOCATIONS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BREWMAP_MAX_LOCATIONS"),
        "expected InvalidEnvVar(BREWMAP_MAX_LOCATIONS), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_max_suggestions() {
    let mut map = HashMap::new();
    map.insert("BREWMAP_MAX_SUGGESTIONS", "many");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BREWMAP_MAX_SUGGESTIONS"),
        "expected InvalidEnvVar(BREWMAP_MAX_SUGGESTIONS), got: {result:?}"
    );
}
