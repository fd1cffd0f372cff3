//! Parsing of the lines typed at the console.
//!
//! Fields may be separated by whitespace, commas, or both, so `3 4 x`,
//! `3,4,x` and `3, 4 x` all read the same.

use crate::error::InputError;
use reversi_grid::Location;
use std::str::FromStr;

/// Grid dimensions as typed at the size prompt. Not yet validated against
/// the grid's own constraints.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

/// A placement as typed at a turn prompt: a location and the coin being placed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Turn {
    pub location: Location,
    pub coin: char,
}

fn fields(line: &str) -> Vec<&str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .collect()
}

fn expect_fields<'a>(line: &'a str, expected: usize) -> Result<Vec<&'a str>, InputError> {
    let fields = fields(line);
    if fields.len() != expected {
        return Err(InputError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn number(field: &str) -> Result<usize, InputError> {
    field
        .parse()
        .map_err(|_| InputError::NotANumber(field.to_string()))
}

impl FromStr for Dimensions {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = expect_fields(s, 2)?;
        Ok(Self {
            rows: number(fields[0])?,
            columns: number(fields[1])?,
        })
    }
}

impl FromStr for Turn {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = expect_fields(s, 3)?;

        let mut chars = fields[2].chars();
        let coin = match (chars.next(), chars.next()) {
            (Some(coin), None) => coin,
            _ => return Err(InputError::NotACoin(fields[2].to_string())),
        };

        let position = fields[..2].join(" ");
        let location = position
            .parse::<Location>()
            .map_err(|e| InputError::Location(e, position.clone()))?;

        Ok(Self { location, coin })
    }
}

/// Returns whether `line` asks to end the session.
pub fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}
