use nview_core::LogLevel;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub(crate) fn init(level: LogLevel) -> anyhow::Result<()> {
    let env_filter = build_filter(level)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

pub(crate) fn build_filter(level: LogLevel) -> anyhow::Result<EnvFilter> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.as_filter_directive()))?;
    Ok(filter)
}
