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
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "TEXTLENS_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert!(cfg.is_development());
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.max_body_bytes, 65_536);
    assert_eq!(cfg.rate_limit_per_minute, 120);
    assert!(cfg.api_keys.is_empty());
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("TEXTLENS_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TEXTLENS_BIND_ADDR"),
        "expected InvalidEnvVar(TEXTLENS_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_unknown_env() {
    let mut map = HashMap::new();
    map.insert("TEXTLENS_ENV", "staging");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TEXTLENS_ENV"),
        "expected InvalidEnvVar(TEXTLENS_ENV), got: {result:?}"
    );
}

#[test]
fn max_body_bytes_override() {
    let mut map = HashMap::new();
    map.insert("TEXTLENS_MAX_BODY_BYTES", "1024");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_body_bytes, 1024);
}

#[test]
fn max_body_bytes_invalid() {
    let mut map = HashMap::new();
    map.insert("TEXTLENS_MAX_BODY_BYTES", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TEXTLENS_MAX_BODY_BYTES"),
        "expected InvalidEnvVar(TEXTLENS_MAX_BODY_BYTES), got: {result:?}"
    );
}

#[test]
fn max_body_bytes_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("TEXTLENS_MAX_BODY_BYTES", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TEXTLENS_MAX_BODY_BYTES"),
        "expected InvalidEnvVar(TEXTLENS_MAX_BODY_BYTES), got: {result:?}"
    );
}

#[test]
fn rate_limit_override() {
    let mut map = HashMap::new();
    map.insert("TEXTLENS_RATE_LIMIT_PER_MINUTE", "10");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.rate_limit_per_minute, 10);
}

#[test]
fn rate_limit_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("TEXTLENS_RATE_LIMIT_PER_MINUTE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TEXTLENS_RATE_LIMIT_PER_MINUTE"),
        "expected InvalidEnvVar(TEXTLENS_RATE_LIMIT_PER_MINUTE), got: {result:?}"
    );
}

#[test]
fn api_keys_are_split_and_trimmed() {
    let mut map = HashMap::new();
    map.insert("TEXTLENS_API_KEYS", " alpha , ,beta,");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_keys, vec!["alpha", "beta"]);
}

#[test]
fn debug_output_redacts_api_keys() {
    let mut map = HashMap::new();
    map.insert("TEXTLENS_API_KEYS", "super-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("super-secret"), "leaked key: {debug}");
    assert!(debug.contains("[1 redacted]"));
}

#[test]
fn production_env_is_not_development() {
    let mut map = HashMap::new();
    map.insert("TEXTLENS_ENV", "production");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert!(!cfg.is_development());
}
