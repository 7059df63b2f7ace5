#![forbid(unsafe_code)]

use anyhow::Context as _;
use clap::Parser;
use cmdrouter::cli::{AppState, Cli, demo_router};
use cmdrouter::{Config, Router};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?.with_env_overrides(|key| std::env::var(key).ok())?,
        None => Config::discover()?,
    };
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(color) = cli.color {
        config.output.color = color;
    }

    let mut router = Router::with_config(config);
    demo_router(&mut router);

    let outcome = router
        .run_args(cli.args, &AppState::default())
        .context("failed to write command output")?;
    tracing::debug!(?outcome, "dispatch finished");

    Ok(())
}
