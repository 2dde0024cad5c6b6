use clap::ValueEnum;
use nview_core::Profile;

/// How the profile is printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// `<name> (<affiliation>) is a <NView>view (with <CCV> CCV)`
    Text,
    /// `{"name":…,"affiliation":…,"ccv":…,"n_view":…}`
    Json,
    /// NView only
    Number,
}

impl OutputFormat {
    pub(crate) fn render(self, profile: &Profile) -> anyhow::Result<String> {
        Ok(match self {
            Self::Text => profile.to_string(),
            Self::Json => profile.to_json()?,
            Self::Number => profile.n_view.to_string(),
        })
    }
}
