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
    assert_eq!(parse_environment("development"), Some(Environment::Development));
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Some(Environment::Test));
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment(" Production "), Some(Environment::Production));
}

#[test]
fn parse_environment_unknown_is_none() {
    assert_eq!(parse_environment("prod"), None);
}

#[test]
fn unknown_environment_is_rejected() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_ENV", "prod");
    let err = build_app_config(lookup_from_map(&map)).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidEnvVar { ref var, .. } if var == "STOREFRONT_ENV"
    ));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.catalog_path.to_str(), Some("./config/catalog.yaml"));
    assert_eq!(cfg.orders_path.to_str(), Some("./config/orders.json"));
    assert_eq!(cfg.items_per_page, 12);
    assert_eq!(cfg.recent_orders, 3);
    assert_eq!(cfg.terminal_policy, TerminalTransitionPolicy::Reject);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_ENV", "production");
    map.insert("STOREFRONT_LOG_LEVEL", "debug");
    map.insert("STOREFRONT_CATALOG_PATH", "/srv/catalog.json");
    map.insert("STOREFRONT_ITEMS_PER_PAGE", "24");
    map.insert("STOREFRONT_RECENT_ORDERS", "5");
    map.insert("STOREFRONT_TERMINAL_POLICY", "Warn");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.catalog_path.to_str(), Some("/srv/catalog.json"));
    assert_eq!(cfg.items_per_page, 24);
    assert_eq!(cfg.recent_orders, 5);
    assert_eq!(cfg.terminal_policy, TerminalTransitionPolicy::Warn);
}

#[test]
fn items_per_page_invalid() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_ITEMS_PER_PAGE", "a dozen");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_ITEMS_PER_PAGE"),
        "expected InvalidEnvVar(STOREFRONT_ITEMS_PER_PAGE), got: {result:?}"
    );
}

#[test]
fn items_per_page_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_ITEMS_PER_PAGE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref reason, .. }) if reason.contains("at least 1")),
        "expected minimum violation, got: {result:?}"
    );
}

#[test]
fn recent_orders_zero_is_allowed() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_RECENT_ORDERS", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.recent_orders, 0);
}

#[test]
fn terminal_policy_invalid() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_TERMINAL_POLICY", "ignore");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_TERMINAL_POLICY"),
        "expected InvalidEnvVar(STOREFRONT_TERMINAL_POLICY), got: {result:?}"
    );
}

#[test]
fn terminal_policy_display() {
    assert_eq!(TerminalTransitionPolicy::Reject.to_string(), "reject");
    assert_eq!(TerminalTransitionPolicy::Warn.to_string(), "warn");
}
