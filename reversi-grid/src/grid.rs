//! The Reversi grid and its move dynamics.
//!
//! Cells are stored row-major in a single owned buffer. Every public accessor
//! validates its coordinates; the private helpers below assume a location
//! already checked with [`Grid::contains`].

use crate::{Color, Direction, GridError, Location, Token, MIN_EDGE_LENGTH};
use std::fmt;
use tracing::{debug, trace};

/// A rectangular Reversi board of fixed dimensions.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Token>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Both edges must be even and at least [`MIN_EDGE_LENGTH`], so that the
    /// starting block sits exactly in the center.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        let valid_edge = |edge: usize| edge >= MIN_EDGE_LENGTH && edge % 2 == 0;
        if !valid_edge(rows) || !valid_edge(columns) {
            return Err(GridError::Dimension { rows, columns });
        }
        let len = rows
            .checked_mul(columns)
            .ok_or(GridError::Dimension { rows, columns })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|source| GridError::Allocation { cells: len, source })?;
        cells.resize(len, Token::Empty);

        debug!(rows, columns, "created grid");
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Create a grid holding the four starting tokens.
    pub fn with_initial_layout(rows: usize, columns: usize) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, columns)?;
        grid.set_initial_layout();
        Ok(grid)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns whether `loc` lies on this grid.
    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        loc.row < self.rows && loc.col < self.columns
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Token] {
        &self.cells
    }

    /// Iterate over the grid one row at a time, top to bottom.
    pub fn rows_iter(&self) -> impl ExactSizeIterator<Item = &[Token]> + '_ {
        self.cells.chunks_exact(self.columns)
    }

    pub fn get(&self, loc: Location) -> Result<Token, GridError> {
        self.index(loc).map(|index| self.cells[index])
    }

    /// Count the cells holding `token`.
    pub fn count(&self, token: Token) -> usize {
        self.cells.iter().filter(|&&cell| cell == token).count()
    }

    /// Set every cell to [`Token::Empty`].
    pub fn clear(&mut self) {
        self.cells.fill(Token::Empty);
    }

    /// Place the four starting tokens in the central 2x2 block: dark on the
    /// main diagonal, light on the anti-diagonal. Other cells are untouched.
    pub fn set_initial_layout(&mut self) {
        let (top, left) = (self.rows / 2 - 1, self.columns / 2 - 1);
        let seeds = [
            (Location::new(top, left), Token::Dark),
            (Location::new(top + 1, left), Token::Light),
            (Location::new(top, left + 1), Token::Light),
            (Location::new(top + 1, left + 1), Token::Dark),
        ];

        for (loc, token) in seeds {
            let index = self.index_unchecked(loc);
            self.cells[index] = token;
        }
    }

    /// Write `token` at `loc` without any legality check.
    pub fn place(&mut self, loc: Location, token: Token) -> Result<(), GridError> {
        let index = self.index(loc)?;
        self.cells[index] = token;
        Ok(())
    }

    /// Returns whether `mover` may place a token at `loc`: the cell must be
    /// empty and bracket at least one run of opponent tokens.
    pub fn is_legal_move(&self, loc: Location, mover: Color) -> Result<bool, GridError> {
        self.index(loc)?;
        Ok(self.is_legal_unchecked(loc, mover))
    }

    /// Flip every opponent run bracketed from `loc` to `mover`'s color.
    /// Returns the number of flipped tokens.
    ///
    /// Assumes the move was already validated and placed; the token at `loc`
    /// itself is neither read nor written.
    pub fn apply_captures(&mut self, loc: Location, mover: Color) -> Result<usize, GridError> {
        self.index(loc)?;

        // Measure every direction before flipping anything.
        let runs = Direction::ALL
            .map(|direction| (direction, self.bracket_len(loc, direction, mover)));

        let mut flipped = 0;
        for (direction, len) in runs {
            for target in self.ray(loc, direction).take(len) {
                let index = self.index_unchecked(target);
                self.cells[index] = mover.into();
            }
            flipped += len;
        }

        trace!(%loc, %mover, flipped, "applied captures");
        Ok(flipped)
    }

    /// The tokens that [`apply_captures`](Self::apply_captures) would flip if
    /// `mover` played at `loc`. Empty if `loc` is occupied.
    pub fn captures(&self, loc: Location, mover: Color) -> Result<Vec<Location>, GridError> {
        let index = self.index(loc)?;
        if !self.cells[index].is_empty() {
            return Ok(Vec::new());
        }

        Ok(Direction::ALL
            .iter()
            .flat_map(|&direction| {
                let len = self.bracket_len(loc, direction, mover);
                self.ray(loc, direction).take(len)
            })
            .collect())
    }

    /// Get every legal move for `mover`, in row-major order.
    pub fn legal_moves(&self, mover: Color) -> Vec<Location> {
        self.locations()
            .filter(|&loc| self.is_legal_unchecked(loc, mover))
            .collect()
    }

    /// Returns whether `mover` has any legal move.
    pub fn has_legal_move(&self, mover: Color) -> bool {
        self.locations().any(|loc| self.is_legal_unchecked(loc, mover))
    }

    /// Check, place, and capture as one step.
    /// Leaves the grid untouched and returns [`GridError::IllegalMove`] if the
    /// move is not legal; otherwise returns the number of flipped tokens.
    pub fn play(&mut self, loc: Location, mover: Color) -> Result<usize, GridError> {
        if !self.is_legal_move(loc, mover)? {
            return Err(GridError::IllegalMove { location: loc, mover });
        }

        self.place(loc, mover.into())?;
        self.apply_captures(loc, mover)
    }

    /// Map a location to its buffer index, or fail if it is off the grid.
    fn index(&self, loc: Location) -> Result<usize, GridError> {
        if self.contains(loc) {
            Ok(self.index_unchecked(loc))
        } else {
            Err(GridError::CoordinateOutOfRange {
                location: loc,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    #[inline]
    fn index_unchecked(&self, loc: Location) -> usize {
        loc.row * self.columns + loc.col
    }

    #[inline]
    fn token_unchecked(&self, loc: Location) -> Token {
        self.cells[self.index_unchecked(loc)]
    }

    fn locations(&self) -> impl Iterator<Item = Location> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |col| Location::new(row, col)))
    }

    fn is_legal_unchecked(&self, loc: Location, mover: Color) -> bool {
        self.token_unchecked(loc).is_empty()
            && Direction::ALL
                .iter()
                .any(|&direction| self.bracket_len(loc, direction, mover) > 0)
    }

    /// Walk outward from `origin`, excluding it, until the edge of the grid.
    /// The iterator does not borrow the grid, so cells can be written while walking.
    fn ray(&self, origin: Location, direction: Direction) -> impl Iterator<Item = Location> {
        let (rows, columns) = (self.rows, self.columns);
        std::iter::successors(origin.step(direction), move |&loc| loc.step(direction))
            .take_while(move |loc| loc.row < rows && loc.col < columns)
    }

    /// Length of the opponent run starting next to `origin` in `direction`,
    /// or zero if that run is not closed by one of `mover`'s tokens.
    fn bracket_len(&self, origin: Location, direction: Direction, mover: Color) -> usize {
        let opponent = Token::from(!mover);
        let mut len = 0;

        for loc in self.ray(origin, direction) {
            match self.token_unchecked(loc) {
                token if token == opponent => len += 1,
                Token::Empty => return 0,
                // A mover token: closes the run, which may be empty.
                _ => return len,
            }
        }

        // Ran off the edge.
        0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::render::GridText {
            grid: self,
            glyphs: &crate::Glyphs::default(),
        };
        fmt::Display::fmt(&text, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> Grid {
        Grid::with_initial_layout(8, 8).unwrap()
    }

    /// Build a grid from rows of glyphs: `.` empty, `x` dark, `o` light.
    fn from_rows(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len(), rows[0].len()).unwrap();
        for (row, line) in rows.iter().enumerate() {
            for (col, glyph) in line.chars().enumerate() {
                let token = match glyph {
                    'x' => Token::Dark,
                    'o' => Token::Light,
                    _ => Token::Empty,
                };
                grid.place(Location::new(row, col), token).unwrap();
            }
        }
        grid
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(6, 4).unwrap();
        assert_eq!(grid.rows(), 6);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.cells().len(), 24);
        assert_eq!(grid.count(Token::Empty), 24);
    }

    #[test]
    fn new_rejects_bad_dimensions() {
        for (rows, columns) in [(0, 8), (1, 1), (8, 1), (3, 4), (4, 7), (9, 9)] {
            assert_eq!(
                Grid::new(rows, columns),
                Err(GridError::Dimension { rows, columns })
            );
        }
    }

    #[test]
    fn new_rejects_overflowing_dimensions() {
        let edge = usize::MAX - 1;
        assert_eq!(
            Grid::new(edge, edge),
            Err(GridError::Dimension {
                rows: edge,
                columns: edge
            })
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn new_reports_failed_allocation() {
        // 2^62 one-byte cells fit the size limit but no address space.
        let edge = 1 << 31;
        match Grid::new(edge, edge) {
            Err(GridError::Allocation { cells, .. }) => assert_eq!(cells, edge * edge),
            other => panic!("expected an allocation failure, got {:?}", other),
        }
    }

    #[test]
    fn set_initial_layout_keeps_other_cells() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.place(Location::new(0, 5), Token::Light).unwrap();
        grid.place(Location::new(2, 2), Token::Light).unwrap();
        grid.set_initial_layout();

        assert_eq!(grid.get(Location::new(0, 5)), Ok(Token::Light));
        // Seed cells are overwritten.
        assert_eq!(grid.get(Location::new(2, 2)), Ok(Token::Dark));
        assert_eq!(grid.count(Token::Empty), 31);
    }

    #[test]
    fn initial_layout_standard() {
        let grid = standard();
        assert_eq!(grid.get(Location::new(3, 3)), Ok(Token::Dark));
        assert_eq!(grid.get(Location::new(4, 4)), Ok(Token::Dark));
        assert_eq!(grid.get(Location::new(3, 4)), Ok(Token::Light));
        assert_eq!(grid.get(Location::new(4, 3)), Ok(Token::Light));
        assert_eq!(grid.count(Token::Empty), 60);
    }

    #[test]
    fn initial_layout_smallest_grid() {
        let grid = Grid::with_initial_layout(2, 2).unwrap();
        assert_eq!(
            grid.cells(),
            &[Token::Dark, Token::Light, Token::Light, Token::Dark]
        );
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut grid = standard();
        grid.clear();
        assert_eq!(grid.count(Token::Empty), 64);
        assert_eq!(grid, Grid::new(8, 8).unwrap());
    }

    #[test]
    fn place_and_get_out_of_range() {
        let mut grid = standard();
        let outside = Location::new(2, 8);
        let expected = GridError::CoordinateOutOfRange {
            location: outside,
            rows: 8,
            columns: 8,
        };
        assert_eq!(grid.get(outside), Err(expected.clone()));
        assert_eq!(grid.place(outside, Token::Dark), Err(expected));
        assert_eq!(grid, standard());
    }

    #[test]
    fn place_overwrites_without_checks() {
        let mut grid = standard();
        grid.place(Location::new(3, 3), Token::Light).unwrap();
        grid.place(Location::new(0, 0), Token::Dark).unwrap();
        assert_eq!(grid.get(Location::new(3, 3)), Ok(Token::Light));
        assert_eq!(grid.get(Location::new(0, 0)), Ok(Token::Dark));
    }

    #[test]
    fn legal_moves_from_start() {
        let grid = standard();
        assert_eq!(
            grid.legal_moves(Color::Dark),
            vec![
                Location::new(2, 4),
                Location::new(3, 5),
                Location::new(4, 2),
                Location::new(5, 3),
            ]
        );
        assert_eq!(
            grid.legal_moves(Color::Light),
            vec![
                Location::new(2, 3),
                Location::new(3, 2),
                Location::new(4, 5),
                Location::new(5, 4),
            ]
        );
    }

    #[test]
    fn adjacent_own_token_is_not_a_bracket() {
        let grid = standard();
        // South of (2, 3) is dark itself; no opponent run precedes it.
        assert_eq!(grid.is_legal_move(Location::new(2, 3), Color::Dark), Ok(false));
    }

    #[test]
    fn occupied_cell_is_never_legal() {
        // Both ends of the row bracket the dark pair, but are occupied.
        let mut grid = from_rows(&["oxxo", "....", "....", "...."]);
        assert_eq!(grid.is_legal_move(Location::new(0, 0), Color::Light), Ok(false));
        assert_eq!(grid.is_legal_move(Location::new(0, 3), Color::Light), Ok(false));
        assert_eq!(grid.is_legal_move(Location::new(0, 1), Color::Light), Ok(false));
        assert!(grid.captures(Location::new(0, 0), Color::Light).unwrap().is_empty());

        grid.place(Location::new(0, 0), Token::Empty).unwrap();
        assert_eq!(grid.is_legal_move(Location::new(0, 0), Color::Light), Ok(true));
    }

    #[test]
    fn run_ending_at_edge_or_gap_is_not_a_bracket() {
        let grid = from_rows(&[
            "oo.x", //
            "o...", //
            "....", //
            "x.o.", //
        ]);
        // Runs reaching the edge.
        assert_eq!(grid.is_legal_move(Location::new(0, 2), Color::Dark), Ok(false));
        assert_eq!(grid.is_legal_move(Location::new(2, 0), Color::Dark), Ok(false));
        // Runs ending in a gap.
        assert_eq!(grid.is_legal_move(Location::new(3, 1), Color::Dark), Ok(false));
        assert_eq!(grid.is_legal_move(Location::new(3, 3), Color::Dark), Ok(false));
        assert!(!grid.has_legal_move(Color::Dark));
        assert!(grid.legal_moves(Color::Dark).is_empty());
    }

    #[test]
    fn is_legal_move_out_of_range() {
        let grid = standard();
        assert!(matches!(
            grid.is_legal_move(Location::new(8, 8), Color::Dark),
            Err(GridError::CoordinateOutOfRange { .. })
        ));
    }

    #[test]
    fn apply_captures_single_direction() {
        let mut grid = standard();
        let loc = Location::new(2, 4);
        grid.place(loc, Token::Dark).unwrap();
        assert_eq!(grid.apply_captures(loc, Color::Dark), Ok(1));
        assert_eq!(grid.get(Location::new(3, 4)), Ok(Token::Dark));
        assert_eq!(grid.get(Location::new(4, 3)), Ok(Token::Light));
        assert_eq!(grid.count(Token::Dark), 4);
        assert_eq!(grid.count(Token::Light), 1);
    }

    #[test]
    fn apply_captures_every_direction() {
        let mut grid = from_rows(&[
            "x.x.x.", //
            ".ooo..", //
            "xo.oox", //
            ".ooo..", //
            "x.x.x.", //
            "......", //
        ]);
        let loc = Location::new(2, 2);
        assert_eq!(grid.captures(loc, Color::Dark).unwrap().len(), 9);

        grid.place(loc, Token::Dark).unwrap();
        assert_eq!(grid.apply_captures(loc, Color::Dark), Ok(9));
        assert_eq!(
            grid,
            from_rows(&[
                "x.x.x.", //
                ".xxx..", //
                "xxxxxx", //
                ".xxx..", //
                "x.x.x.", //
                "......", //
            ])
        );
    }

    #[test]
    fn apply_captures_leaves_unbracketed_runs() {
        let mut grid = from_rows(&[
            "....", //
            "o.oo", //
            "..o.", //
            "...x", //
        ]);
        let loc = Location::new(1, 1);
        grid.place(loc, Token::Dark).unwrap();
        assert_eq!(grid.apply_captures(loc, Color::Dark), Ok(1));
        assert_eq!(
            grid,
            from_rows(&[
                "....", //
                "oxoo", //
                "..x.", //
                "...x", //
            ])
        );
    }

    #[test]
    fn apply_captures_runs_longer_than_eight() {
        let mut row = String::from(".");
        row.push_str(&"o".repeat(10));
        row.push('x');
        let empty = ".".repeat(12);
        let mut grid = from_rows(&[&row, &empty]);

        assert_eq!(grid.play(Location::new(0, 0), Color::Dark), Ok(10));
        assert_eq!(grid.count(Token::Light), 0);
        assert_eq!(grid.count(Token::Dark), 12);
    }

    #[test]
    fn play_rejects_illegal_move() {
        let mut grid = standard();
        let loc = Location::new(0, 0);
        assert_eq!(
            grid.play(loc, Color::Dark),
            Err(GridError::IllegalMove {
                location: loc,
                mover: Color::Dark
            })
        );
        assert_eq!(grid, standard());
    }

    #[test]
    fn play_places_and_flips() {
        let mut grid = standard();
        assert_eq!(grid.play(Location::new(2, 3), Color::Light), Ok(1));
        assert_eq!(grid.get(Location::new(2, 3)), Ok(Token::Light));
        assert_eq!(grid.get(Location::new(3, 3)), Ok(Token::Light));
        assert_eq!(grid.count(Token::Light), 4);
        assert_eq!(grid.count(Token::Dark), 1);
    }

    #[test]
    fn rows_iter_matches_cells() {
        let grid = Grid::with_initial_layout(4, 6).unwrap();
        let rows: Vec<&[Token]> = grid.rows_iter().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.len() == 6));
        assert_eq!(rows[1][2], Token::Dark);
        assert_eq!(rows[1][3], Token::Light);
        assert_eq!(rows[2][2], Token::Light);
        assert_eq!(rows[2][3], Token::Dark);
    }
}
