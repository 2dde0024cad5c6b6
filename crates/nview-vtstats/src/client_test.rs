use super::*;

fn test_client(base_url: &str) -> VtStatsClient {
    VtStatsClient::with_base_url(base_url, "nview-test/0.1", Some(5))
        .expect("client construction should not fail")
}

#[test]
fn build_url_appends_path_to_base() {
    let client = test_client("https://vt-api.poi.cat");
    let url = client.build_url(CATALOG_PATH, &[]).unwrap();
    assert_eq!(url.as_str(), "https://vt-api.poi.cat/api/v4/catalog");
}

#[test]
fn build_url_keeps_base_path_prefix() {
    let client = test_client("http://localhost:8080/proxy/");
    let url = client.build_url(CATALOG_PATH, &[]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/proxy/api/v4/catalog");
}

#[test]
fn build_url_encodes_joined_channel_ids() {
    let client = test_client("https://vt-api.poi.cat/");
    let url = client
        .build_url(ENDED_STREAMS_PATH, &[("channelIds", "7,8")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://vt-api.poi.cat/api/v4/streams/ended?channelIds=7%2C8"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = VtStatsClient::with_base_url("not a url", "nview-test/0.1", None);
    assert!(matches!(result, Err(VtStatsError::InvalidBaseUrl { .. })));
}

#[test]
fn from_config_uses_configured_base_url() {
    let config = AppConfig {
        api_base_url: "http://127.0.0.1:1".to_string(),
        ..AppConfig::default()
    };
    let client = VtStatsClient::from_config(&config).unwrap();
    assert_eq!(client.base_url.as_str(), "http://127.0.0.1:1/");
}
