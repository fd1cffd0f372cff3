//! Code for working with [`Location`]s and scan [`Direction`]s on a grid.

use derive_more::{Display, Error, From, Into};

/// A cell on the grid, addressed by zero-based row and column.
///
/// A location carries no bounds of its own; the [`Grid`](crate::Grid) it is
/// used with decides whether it is in range.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Ord, PartialOrd, From, Into)]
#[display("({row}, {col})")]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighboring location one step in `direction`.
    /// Returns None if the step would leave the non-negative quadrant.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.offset();
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

/// One of the eight compass directions a bracket can run in.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Direction {
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
    East,
    NorthEast,
}

impl Direction {
    /// Every direction, clockwise from north as seen with row 0 at the top.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
        Direction::East,
        Direction::NorthEast,
    ];

    /// The (row, column) change for one step in this direction.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::West => (0, -1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::East => (0, 1),
            Direction::NorthEast => (-1, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display("invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from "row col" or "row,col".
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let row = parts
            .next()
            .ok_or(ParseLocationError)?
            .parse()
            .or(Err(ParseLocationError))?;
        let col = parts
            .next()
            .ok_or(ParseLocationError)?
            .parse()
            .or(Err(ParseLocationError))?;

        if parts.next().is_some() {
            return Err(ParseLocationError);
        }

        Ok(Self::new(row, col))
    }
}
