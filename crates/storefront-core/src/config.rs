use crate::app_config::{AppConfig, Environment, TerminalTransitionPolicy};
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
/// Decoupled from the real environment so tests can feed a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str, min: usize| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if value < min {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("must be at least {min}"),
            });
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("STOREFRONT_ENV", "development")).ok_or_else(|| {
        ConfigError::InvalidEnvVar {
            var: "STOREFRONT_ENV".to_string(),
            reason: "expected \"development\", \"test\" or \"production\"".to_string(),
        }
    })?;
    let log_level = or_default("STOREFRONT_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default(
        "STOREFRONT_CATALOG_PATH",
        "./config/catalog.yaml",
    ));
    let orders_path = PathBuf::from(or_default("STOREFRONT_ORDERS_PATH", "./config/orders.json"));

    let items_per_page = parse_usize("STOREFRONT_ITEMS_PER_PAGE", "12", 1)?;
    let recent_orders = parse_usize("STOREFRONT_RECENT_ORDERS", "3", 0)?;

    let terminal_policy = parse_terminal_policy(&or_default("STOREFRONT_TERMINAL_POLICY", "reject"))
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            var: "STOREFRONT_TERMINAL_POLICY".to_string(),
            reason: "expected \"reject\" or \"warn\"".to_string(),
        })?;

    Ok(AppConfig {
        env,
        log_level,
        catalog_path,
        orders_path,
        items_per_page,
        recent_orders,
        terminal_policy,
    })
}

/// Parse a string into an `Environment` variant, case-insensitively.
///
/// Returns `None` for anything unrecognized.
fn parse_environment(s: &str) -> Option<Environment> {
    match s.trim().to_ascii_lowercase().as_str() {
        "development" => Some(Environment::Development),
        "test" => Some(Environment::Test),
        "production" => Some(Environment::Production),
        _ => None,
    }
}

fn parse_terminal_policy(s: &str) -> Option<TerminalTransitionPolicy> {
    match s.trim().to_ascii_lowercase().as_str() {
        "reject" => Some(TerminalTransitionPolicy::Reject),
        "warn" => Some(TerminalTransitionPolicy::Warn),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
