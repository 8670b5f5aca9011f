// ABOUTME: Main application entry point.
// ABOUTME: Sets up logging, parses arguments and runs against the real terminal.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tile_app::Cli;
use tile_script::Osascript;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::info!("Starting sshtile with pattern {:?}", cli.pattern);

    let stdin = io::stdin();
    let stdout = io::stdout();
    tile_app::run(&cli, &Osascript, &mut stdin.lock(), &mut stdout.lock())
}
