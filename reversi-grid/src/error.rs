use crate::{Color, Location};
use derive_more::{Display, Error};
use std::collections::TryReserveError;

/// Errors raised by [`Grid`](crate::Grid) construction and access.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum GridError {
    /// Both edges must be even and at least [`MIN_EDGE_LENGTH`](crate::MIN_EDGE_LENGTH).
    #[display("invalid grid dimensions {rows}x{columns}: edges must be even and at least 2")]
    Dimension { rows: usize, columns: usize },

    #[display("failed to allocate {cells} grid cells")]
    Allocation {
        cells: usize,
        source: TryReserveError,
    },

    #[display("position {location} is outside the {rows}x{columns} grid")]
    CoordinateOutOfRange {
        location: Location,
        rows: usize,
        columns: usize,
    },

    #[display("{mover} cannot move to {location}")]
    IllegalMove { location: Location, mover: Color },
}
