//! # Tabula CLI
//!
//! Inspect binner configurations and discretize points from the shell.

use anyhow::Result;
use clap::Parser;
use tabula::{app, cli::Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = app::execute(&cli.command)?;
    print!("{output}");
    Ok(())
}
