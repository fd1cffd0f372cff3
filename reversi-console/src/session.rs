//! The console game loop.
//!
//! Players alternate, dark first, each typing a position and their coin until
//! the move is accepted. The grid itself has no notion of turns, so this loop
//! owns the alternation. There is no pass and no scoring: the session stops
//! as soon as the active player has nothing to play.

use derive_more::Display;
use reversi_grid::{Color, Grid, GridError, Renderer, TextRenderer};
use std::io;
use tracing::{debug, info};

use crate::connector::Connector;
use crate::input::{self, Dimensions, Turn};

/// Why a session ended.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum SessionEnd {
    #[display("input closed")]
    InputClosed,
    #[display("quit requested")]
    Quit,
    #[display("{_0} has no legal move")]
    NoLegalMove(Color),
}

/// One game played through a [`Connector`].
pub struct Session<C> {
    connector: C,
    renderer: TextRenderer,
    dimensions: Option<Dimensions>,
}

impl<C: Connector> Session<C> {
    pub fn new(connector: C, renderer: TextRenderer) -> Self {
        Self {
            connector,
            renderer,
            dimensions: None,
        }
    }

    /// Use `dimensions` instead of asking for the board size.
    pub fn with_dimensions(mut self, dimensions: Option<Dimensions>) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn into_connector(self) -> C {
        self.connector
    }

    /// Play until the input closes, a player quits, or the active player is stuck.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        self.connector.show("Reversi started.\n")?;

        let mut grid = match self.setup_grid()? {
            Ok(grid) => grid,
            Err(end) => return Ok(end),
        };
        self.show_grid(&grid)?;

        let mut mover = Color::default();
        loop {
            if !grid.has_legal_move(mover) {
                let end = SessionEnd::NoLegalMove(mover);
                self.connector
                    .show(&format!("{} has no legal move.", self.player_label(mover)))?;
                info!(%end, "session finished");
                return Ok(end);
            }

            if let Some(end) = self.take_turn(&mut grid, mover)? {
                info!(%end, "session finished");
                return Ok(end);
            }

            self.show_grid(&grid)?;
            mover = !mover;
        }
    }

    /// Build the starting grid, asking for its size until a valid one is given.
    fn setup_grid(&mut self) -> io::Result<Result<Grid, SessionEnd>> {
        if let Some(Dimensions { rows, columns }) = self.dimensions {
            match Grid::with_initial_layout(rows, columns) {
                Ok(grid) => return Ok(Ok(grid)),
                Err(e) => self.connector.show(&format!("{}.", capitalize(&e.to_string())))?,
            }
        }

        loop {
            let line = match self
                .connector
                .prompt("Please enter the size (rows, columns) of the game: ")?
            {
                Some(line) => line,
                None => return Ok(Err(SessionEnd::InputClosed)),
            };
            if input::is_quit(&line) {
                return Ok(Err(SessionEnd::Quit));
            }

            let result = line
                .parse::<Dimensions>()
                .map_err(|e| e.to_string())
                .and_then(|Dimensions { rows, columns }| {
                    Grid::with_initial_layout(rows, columns).map_err(|e| e.to_string())
                });
            match result {
                Ok(grid) => return Ok(Ok(grid)),
                Err(reason) => {
                    debug!(%line, %reason, "rejected board size");
                    self.connector
                        .show(&format!("{}. Try again.", capitalize(&reason)))?;
                }
            }
        }
    }

    /// Prompt `mover` until they make a legal move. Returns why the session
    /// ended if it did so instead.
    fn take_turn(&mut self, grid: &mut Grid, mover: Color) -> io::Result<Option<SessionEnd>> {
        let coin = self.renderer.glyphs().glyph(mover.into());
        let prompt = format!(
            "{}: Enter a position (row, column) and a coin: ",
            self.player_label(mover)
        );

        loop {
            let line = match self.connector.prompt(&prompt)? {
                Some(line) => line,
                None => return Ok(Some(SessionEnd::InputClosed)),
            };
            if input::is_quit(&line) {
                return Ok(Some(SessionEnd::Quit));
            }

            let turn: Turn = match line.parse() {
                Ok(turn) => turn,
                Err(e) => {
                    debug!(%line, error = %e, "unparseable turn");
                    self.connector.show(&format!(
                        "{}. Enter a position and a coin.",
                        capitalize(&e.to_string())
                    ))?;
                    continue;
                }
            };

            if self.renderer.glyphs().color_of(turn.coin) != Some(mover) {
                debug!(%line, %mover, "wrong coin");
                self.connector
                    .show(&format!("Invalid character! Only '{}' is allowed", coin))?;
                continue;
            }

            match grid.play(turn.location, mover) {
                Ok(flipped) => {
                    debug!(location = %turn.location, %mover, flipped, "accepted move");
                    return Ok(None);
                }
                Err(GridError::IllegalMove { .. }) => {
                    debug!(location = %turn.location, %mover, "illegal move");
                    self.connector
                        .show("Invalid move. Enter a new position and coin.")?;
                }
                Err(e) => {
                    debug!(location = %turn.location, %mover, error = %e, "rejected move");
                    self.connector.show(&format!(
                        "{}. Enter a new position and coin.",
                        capitalize(&e.to_string())
                    ))?;
                }
            }
        }
    }

    fn show_grid(&mut self, grid: &Grid) -> io::Result<()> {
        let rendered = self.renderer.render(grid);
        self.connector.show(&rendered)
    }

    fn player_label(&self, color: Color) -> String {
        let number = match color {
            Color::Dark => 1,
            Color::Light => 2,
        };
        format!(
            "Player {} ({})",
            number,
            self.renderer.glyphs().glyph(color.into())
        )
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
