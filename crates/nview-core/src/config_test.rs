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
fn empty_env_yields_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let config = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.api_base_url, "https://vt-api.poi.cat/");
    assert_eq!(config.request_timeout_secs, None);
}

#[test]
fn overrides_are_applied() {
    let map = HashMap::from([
        ("NVIEW_API_BASE_URL", "http://127.0.0.1:9000"),
        ("NVIEW_REQUEST_TIMEOUT_SECS", "15"),
        ("NVIEW_USER_AGENT", "nview-test/0.1"),
    ]);
    let config = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
    assert_eq!(config.request_timeout_secs, Some(15));
    assert_eq!(config.user_agent, "nview-test/0.1");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let map = HashMap::from([
        ("NVIEW_API_BASE_URL", "  "),
        ("NVIEW_REQUEST_TIMEOUT_SECS", ""),
    ]);
    let config = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn non_numeric_timeout_is_rejected() {
    let map = HashMap::from([("NVIEW_REQUEST_TIMEOUT_SECS", "soon")]);
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NVIEW_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(NVIEW_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn non_http_base_url_is_rejected() {
    let map = HashMap::from([("NVIEW_API_BASE_URL", "ftp://vt-api.poi.cat")]);
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NVIEW_API_BASE_URL"),
        "expected InvalidEnvVar(NVIEW_API_BASE_URL), got: {result:?}"
    );
}
