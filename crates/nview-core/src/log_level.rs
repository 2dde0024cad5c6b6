use std::fmt;
use std::str::FromStr;

/// Verbosity accepted by the `--log` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Parses `raw`, falling back to [`LogLevel::Warn`] for unknown values.
    ///
    /// The second element is `false` when the fallback was taken.
    #[must_use]
    pub fn parse_or_default(raw: &str) -> (Self, bool) {
        match raw.parse() {
            Ok(level) => (level, true),
            Err(()) => (Self::default(), false),
        }
    }

    /// Directive string understood by `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub fn as_filter_directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(()),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_directive())
    }
}
