use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
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
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// config. Decoupled from the process environment so tests can drive it with
/// a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_positive_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let value = parse_u32(var, default)?;
        if value == 0 {
            return Err(invalid(var, "must be at least 1".to_string()));
        }
        Ok(value)
    };

    let webdriver_url = or_default("MAPSCOUT_WEBDRIVER_URL", "http://localhost:4444");
    let log_level = or_default("MAPSCOUT_LOG_LEVEL", "info");
    let headless = parse_bool(&or_default("MAPSCOUT_HEADLESS", "false"))
        .ok_or_else(|| invalid("MAPSCOUT_HEADLESS", "expected true or false".to_string()))?;
    let output_path = PathBuf::from(or_default(
        "MAPSCOUT_OUTPUT_PATH",
        "newyork_restaurants_complete.xlsx",
    ));

    let feed_timeout_secs = parse_u64("MAPSCOUT_FEED_TIMEOUT_SECS", "15")?;
    let scroll_pause_ms = parse_u64("MAPSCOUT_SCROLL_PAUSE_MS", "2000")?;
    let scroll_stable_reads = parse_positive_u32("MAPSCOUT_SCROLL_STABLE_READS", "3")?;
    let scroll_max_iterations = parse_positive_u32("MAPSCOUT_SCROLL_MAX_ITERATIONS", "50")?;
    let list_settle_ms = parse_u64("MAPSCOUT_LIST_SETTLE_MS", "2000")?;
    let detail_timeout_secs = parse_u64("MAPSCOUT_DETAIL_TIMEOUT_SECS", "3")?;
    let inter_request_delay_ms = parse_u64("MAPSCOUT_INTER_REQUEST_DELAY_MS", "2000")?;

    Ok(AppConfig {
        webdriver_url,
        log_level,
        headless,
        output_path,
        feed_timeout_secs,
        scroll_pause_ms,
        scroll_stable_reads,
        scroll_max_iterations,
        list_settle_ms,
        detail_timeout_secs,
        inter_request_delay_ms,
    })
}

/// Parse a boolean flag. Accepts `true`/`false`, `1`/`0` and `yes`/`no`,
/// case-insensitively.
fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
