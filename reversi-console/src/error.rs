use derive_more::{Display, Error, From};
use reversi_grid::ParseLocationError;
use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display("failed to read config file {}: {source}", path.display())]
    #[from(skip)]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[display("failed to parse TOML: {_0}")]
    TomlParse(toml::de::Error),

    #[display("config validation error: {_0}")]
    #[from(skip)]
    Validation(#[error(not(source))] String),
}

/// Errors in a line typed at the console.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum InputError {
    #[display("expected {expected} values but found {found}")]
    FieldCount { expected: usize, found: usize },

    #[display("'{_0}' is not a non-negative number")]
    NotANumber(#[error(not(source))] String),

    #[display("'{_0}' is not a single coin character")]
    NotACoin(#[error(not(source))] String),

    #[display("{_0} '{_1}'")]
    Location(ParseLocationError, #[error(not(source))] String),
}
