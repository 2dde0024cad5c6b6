//! The assembled popularity snapshot and its renderings.

use std::fmt;

use serde::Serialize;

use crate::metrics::ViewerMetrics;
use crate::resolve::ResolvedIdentity;

/// Popularity snapshot for one performer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    /// Group label, or `"Indie"`.
    pub affiliation: String,
    pub ccv: i64,
    pub n_view: u32,
    #[serde(skip)]
    pub identity: ResolvedIdentity,
}

impl Profile {
    #[must_use]
    pub fn new(
        name: &str,
        affiliation: String,
        identity: ResolvedIdentity,
        metrics: ViewerMetrics,
    ) -> Self {
        Self {
            name: name.to_string(),
            affiliation,
            ccv: metrics.ccv,
            n_view: metrics.n_view,
            identity,
        }
    }

    /// Serialises the public fields as a single-line JSON object.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) is a {}view (with {} CCV)",
            self.name, self.affiliation, self.n_view, self.ccv
        )
    }
}
