use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load server configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load server configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build server configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup
/// instead of calling `set_var`/`remove_var`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` naming the first variable that fails
/// to parse.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>().map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("TEXTLENS_ENV", "development"))?;

    let bind_addr = or_default("TEXTLENS_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("TEXTLENS_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("TEXTLENS_LOG_LEVEL", "info");

    let max_body_bytes = parse_usize("TEXTLENS_MAX_BODY_BYTES", "65536")?;
    if max_body_bytes == 0 {
        return Err(invalid(
            "TEXTLENS_MAX_BODY_BYTES",
            "must be greater than zero".to_string(),
        ));
    }

    let rate_limit_per_minute = parse_usize("TEXTLENS_RATE_LIMIT_PER_MINUTE", "120")?;
    if rate_limit_per_minute == 0 {
        return Err(invalid(
            "TEXTLENS_RATE_LIMIT_PER_MINUTE",
            "must be greater than zero".to_string(),
        ));
    }

    let api_keys = parse_api_keys(&or_default("TEXTLENS_API_KEYS", ""));

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        max_body_bytes,
        rate_limit_per_minute,
        api_keys,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TEXTLENS_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Split a comma-separated token list, dropping blanks.
fn parse_api_keys(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
