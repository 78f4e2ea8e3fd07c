use acad_config::AcademyConfig;
use anyhow::Context;
use clap::Parser;

use crate::cli::GlobalFlags;

mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("acad error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = AcademyConfig::load_with_dotenv().context("failed to load academy config")?;
    let flags = cli.global_flags();
    init_tracing(&flags, &config.general.log_level)?;

    commands::dispatch(cli.command, &config, &flags).await
}

/// `--quiet` wins over `--verbose`; without either the configured level applies.
fn log_level<'a>(flags: &GlobalFlags, configured: &'a str) -> &'a str {
    if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        configured
    }
}

fn init_tracing(flags: &GlobalFlags, configured: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("ACADEMY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level(flags, configured)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use pretty_assertions::assert_eq;

    fn flags(quiet: bool, verbose: bool) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet,
            verbose,
            database: None,
        }
    }

    #[test]
    fn log_level_follows_flags_then_config() {
        assert_eq!(log_level(&flags(false, false), "info"), "info");
        assert_eq!(log_level(&flags(false, true), "info"), "debug");
        assert_eq!(log_level(&flags(true, false), "info"), "error");
        assert_eq!(log_level(&flags(true, true), "info"), "error");
    }
}
