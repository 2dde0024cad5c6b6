//! HTTP client for the VtStats REST API.
//!
//! Wraps `reqwest` with base URL handling, status checks, and typed response
//! deserialization. Malformed bodies surface as
//! [`VtStatsError::Deserialize`] rather than decoding to empty collections.

use std::time::{Duration, Instant};

use nview_core::{AppConfig, Catalog, StreamRecord};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::VtStatsError;

const CATALOG_PATH: &str = "api/v4/catalog";
const ENDED_STREAMS_PATH: &str = "api/v4/streams/ended";

/// Client for the VtStats REST API.
///
/// Use [`VtStatsClient::from_config`] for production or
/// [`VtStatsClient::with_base_url`] to point at a mock server in tests.
pub struct VtStatsClient {
    client: Client,
    base_url: Url,
}

impl VtStatsClient {
    /// Creates a client from loaded application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VtStatsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`VtStatsError::InvalidBaseUrl`] if the
    /// configured base URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, VtStatsError> {
        Self::with_base_url(
            &config.api_base_url,
            &config.user_agent,
            config.request_timeout_secs,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// `timeout_secs` of `None` keeps the transport default.
    ///
    /// # Errors
    ///
    /// Returns [`VtStatsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`VtStatsError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        user_agent: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, VtStatsError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        // Exactly one trailing slash, so `join` appends to the base path
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| VtStatsError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches the performer/channel/group catalog.
    ///
    /// # Errors
    ///
    /// - [`VtStatsError::Http`] on network failure or non-2xx HTTP status.
    /// - [`VtStatsError::Deserialize`] if the body is not a catalog.
    pub async fn fetch_catalog(&self) -> Result<Catalog, VtStatsError> {
        let url = self.build_url(CATALOG_PATH, &[])?;
        let catalog: Catalog = self.request_json(&url, "catalog").await?;
        tracing::debug!(
            performers = catalog.performers.len(),
            channels = catalog.channels.len(),
            groups = catalog.groups.len(),
            "catalog decoded"
        );
        Ok(catalog)
    }

    /// Fetches recently ended streams for all `channel_ids` in one request.
    ///
    /// # Errors
    ///
    /// - [`VtStatsError::Http`] on network failure or non-2xx HTTP status.
    /// - [`VtStatsError::Deserialize`] if the body is not a list of streams.
    pub async fn fetch_ended_streams(
        &self,
        channel_ids: &[String],
    ) -> Result<Vec<StreamRecord>, VtStatsError> {
        let joined = channel_ids.join(",");
        let url = self.build_url(ENDED_STREAMS_PATH, &[("channelIds", &joined)])?;
        self.request_json(&url, "ended streams").await
    }

    /// Joins `path` onto the base URL and appends percent-encoded query pairs.
    fn build_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, VtStatsError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| VtStatsError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx status, and decodes the JSON body.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        label: &str,
    ) -> Result<T, VtStatsError> {
        tracing::debug!(url = %url, "fetching {label}");
        let started = Instant::now();
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        tracing::debug!(
            url = %url,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            bytes = body.len(),
            "completed fetching {label}"
        );

        serde_json::from_str(&body).map_err(|e| VtStatsError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
