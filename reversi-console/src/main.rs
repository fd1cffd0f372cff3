//! `reversi`: two players sharing one console.

use anyhow::Result;
use clap::Parser;
use reversi_console::cli::Cli;
use reversi_console::config::AppConfig;
use reversi_console::connector::ConsoleConnector;
use reversi_console::session::Session;
use reversi_grid::TextRenderer;
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)?;
    run(&cli, &config)
}

#[instrument(skip(config))]
fn run(cli: &Cli, config: &AppConfig) -> Result<()> {
    let dimensions = cli.dimensions().or_else(|| config.board.dimensions());
    let renderer = TextRenderer::new((&config.glyphs).into());

    let stdin = io::stdin();
    let connector = ConsoleConnector::new(stdin.lock(), io::stdout());
    let end = Session::new(connector, renderer)
        .with_dimensions(dimensions)
        .run()?;

    info!(%end, "exiting");
    Ok(())
}
