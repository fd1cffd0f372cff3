//! Command-line interface for the `reversi` binary.

use clap::Parser;
use std::path::PathBuf;

use crate::input::Dimensions;

/// Two-player Reversi on the console
#[derive(Parser, Debug)]
#[command(name = "reversi")]
#[command(about = "Play Reversi on a board of any even size", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of rows; skips the size prompt together with --columns
    #[arg(long, requires = "columns")]
    pub rows: Option<usize>,

    /// Number of columns; skips the size prompt together with --rows
    #[arg(long, requires = "rows")]
    pub columns: Option<usize>,

    /// Path to the TOML config file
    #[arg(short, long, default_value = "reversi.toml")]
    pub config: PathBuf,

    /// Print the default config file and exit
    #[arg(long)]
    pub print_default_config: bool,
}

impl Cli {
    /// Board dimensions given on the command line, if any.
    pub fn dimensions(&self) -> Option<Dimensions> {
        Some(Dimensions {
            rows: self.rows?,
            columns: self.columns?,
        })
    }
}
