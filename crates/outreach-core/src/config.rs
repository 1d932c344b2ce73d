use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
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
/// Every variable has a default, so an empty environment yields a usable
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse = |var: &str, default: &str| -> Result<std::net::SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("OUTREACH_ENV", "development"))?;

    let api_url = or_default("OUTREACH_API_URL", "http://localhost:5000/api");
    if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "OUTREACH_API_URL".to_string(),
            reason: format!("'{api_url}' must start with http:// or https://"),
        });
    }

    let bind_addr = parse("OUTREACH_BIND_ADDR", "127.0.0.1:5000")?;
    let log_level = or_default("OUTREACH_LOG_LEVEL", "info");
    let optional_path = |var: &str| -> Option<PathBuf> {
        lookup(var)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    };
    let roster_path = optional_path("OUTREACH_ROSTER_PATH");
    let performance_path = optional_path("OUTREACH_PERFORMANCE_PATH");

    let upload_tick_ms = parse_u64("OUTREACH_UPLOAD_TICK_MS", "300")?;
    if upload_tick_ms == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "OUTREACH_UPLOAD_TICK_MS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let search_limit = parse_u32("OUTREACH_SEARCH_LIMIT", "10")?;

    Ok(AppConfig {
        env,
        api_url,
        bind_addr,
        log_level,
        roster_path,
        performance_path,
        upload_tick_ms,
        search_limit,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "OUTREACH_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
