//! `reversi-grid` is a Reversi (Othello) rules engine for boards of any even size.
//!
//! The crate is organized around a passive [`Grid`]:
//!
//!  - [`Grid`] owns the cells and answers the two questions the rules need:
//!    whether a placement is legal for a [`Color`], and which opponent tokens it
//!    captures. It keeps no turn state; sequencing moves is up to the caller.
//!  - [`Renderer`]s turn a shared borrow of a grid into a display representation.
//!    [`TextRenderer`] draws the classic console layout.
//!  - [`test_utils`] holds perft counting used by tests and benchmarks.
//!
//! ```
//! use reversi_grid::{Color, Grid, Location, Token};
//!
//! let mut grid = Grid::with_initial_layout(8, 8)?;
//! let loc = Location::new(2, 4);
//! assert!(grid.is_legal_move(loc, Color::Dark)?);
//!
//! grid.place(loc, Token::Dark)?;
//! assert_eq!(grid.apply_captures(loc, Color::Dark)?, 1);
//! assert_eq!(grid.get(Location::new(3, 4))?, Token::Dark);
//! # Ok::<(), reversi_grid::GridError>(())
//! ```

pub mod test_utils;

mod error;
mod grid;
mod location;
mod render;
mod token;

pub use error::*;
pub use grid::*;
pub use location::*;
pub use render::{Glyphs, Renderer, TextRenderer};
pub use token::*;

/// The shortest allowed grid edge.
pub const MIN_EDGE_LENGTH: usize = 2;

/// The edge length of a standard Othello board.
pub const STANDARD_EDGE_LENGTH: usize = 8;
