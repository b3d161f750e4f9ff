use crate::app_config::{AppConfig, Environment};
use crate::locale::Locale;
use crate::ConfigError;

/// Load application configuration from environment variables.
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

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so the only failure mode is a value that
/// does not parse.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
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

    let env = parse_environment(&or_default("FIBERCHECK_ENV", "development"))?;

    let bind_addr = or_default("FIBERCHECK_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("FIBERCHECK_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("FIBERCHECK_LOG_LEVEL", "info");

    let locale = or_default("FIBERCHECK_LOCALE", "it")
        .parse::<Locale>()
        .map_err(|e| invalid("FIBERCHECK_LOCALE", e.to_string()))?;

    let endpoint_url = or_default("FIBERCHECK_ENDPOINT_URL", "http://127.0.0.1:3000");

    let request_timeout_secs = match lookup("FIBERCHECK_REQUEST_TIMEOUT_SECS") {
        Ok(raw) if !raw.trim().is_empty() => Some(
            raw.trim()
                .parse::<u64>()
                .map_err(|e| invalid("FIBERCHECK_REQUEST_TIMEOUT_SECS", e.to_string()))?,
        ),
        _ => None,
    };

    let user_agent = or_default("FIBERCHECK_USER_AGENT", "fibercheck/0.1 (coverage-lookup)");

    let rate_limit_per_minute = or_default("FIBERCHECK_RATE_LIMIT_PER_MINUTE", "120")
        .parse::<usize>()
        .map_err(|e| invalid("FIBERCHECK_RATE_LIMIT_PER_MINUTE", e.to_string()))?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        locale,
        endpoint_url,
        request_timeout_secs,
        user_agent,
        rate_limit_per_minute,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "production" => Ok(Environment::Production),
        "test" => Ok(Environment::Test),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FIBERCHECK_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
