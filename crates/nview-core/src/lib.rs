pub mod app_config;
pub mod catalog;
pub mod config;
pub mod locale;
pub mod log_level;
pub mod metrics;
pub mod profile;
pub mod resolve;

use thiserror::Error;

pub use app_config::AppConfig;
pub use catalog::{Catalog, Channel, Group, GroupChild, Performer, StreamRecord};
pub use config::{load_app_config, load_app_config_from_env};
pub use locale::{display_name, Locale, LocalizedNames, DISPLAY_LOCALES};
pub use log_level::LogLevel;
pub use metrics::{compute_ccv, compute_n_view, ViewerMetrics};
pub use profile::Profile;
pub use resolve::{affiliation, resolve, ResolvedIdentity, INDIE_GROUP_ID, INDIE_LABEL};

/// Failures while mapping a display name onto catalog identifiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("performer not found: {name}")]
    PerformerNotFound { name: String },

    #[error("no channels linked to performer: {name}")]
    ChannelNotFound { name: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
