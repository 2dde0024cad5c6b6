mod logging;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use nview_core::LogLevel;
use nview_vtstats::{fetch_profile, VtStatsClient};

use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "nview")]
#[command(about = "Look up a VTuber's average viewers (CCV) and NView order")]
struct Cli {
    /// Name of the VTuber, as shown in English (or native name if none)
    #[arg(short, long, default_value = "")]
    name: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let (level, recognised) = LogLevel::parse_or_default(&cli.log);
    if !recognised {
        eprintln!("Invalid log level");
    }
    logging::init(level)?;

    let config = nview_core::load_app_config().context("failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");
    let client = VtStatsClient::from_config(&config).context("failed to build VtStats client")?;

    let rendered = run(&cli, &client, &mut io::stdout().lock()).await?;
    Ok(if rendered {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Looks up `cli.name` and writes the rendered profile to `out`.
///
/// An empty name writes a prompt and skips the lookup. A failed lookup is
/// logged, nothing is written, and `false` is returned.
async fn run<W: Write>(cli: &Cli, client: &VtStatsClient, out: &mut W) -> anyhow::Result<bool> {
    if cli.name.is_empty() {
        writeln!(out, "Please provide a name")?;
        return Ok(true);
    }

    let profile = match fetch_profile(client, &cli.name).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!(name = %cli.name, error = %e, "failed to fetch profile");
            return Ok(false);
        }
    };

    writeln!(out, "{}", cli.output.render(&profile)?)?;
    Ok(true)
}
