/// Production VtStats API root.
pub const DEFAULT_API_BASE_URL: &str = "https://vt-api.poi.cat/";

pub const DEFAULT_USER_AGENT: &str = "nview/0.1 (popularity-lookup)";

/// Runtime settings for the VtStats client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// `None` leaves the transport default in place.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
