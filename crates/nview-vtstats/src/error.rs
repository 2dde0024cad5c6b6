use nview_core::ResolveError;
use thiserror::Error;

/// Errors returned by the VtStats client and the profile pipeline.
#[derive(Debug, Error)]
pub enum VtStatsError {
    /// Network or TLS failure, or a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
