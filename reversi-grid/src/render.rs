//! Text rendering of a [`Grid`].
//!
//! Renderers only ever see `&Grid`, so they read through the grid's public
//! accessors and cannot change its state.

use crate::{Color, Grid, Token};
use itertools::Itertools;
use std::fmt;

/// The characters used to draw each kind of cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Glyphs {
    pub empty: char,
    pub dark: char,
    pub light: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            empty: '.',
            dark: 'x',
            light: 'o',
        }
    }
}

impl Glyphs {
    pub fn glyph(&self, token: Token) -> char {
        match token {
            Token::Empty => self.empty,
            Token::Dark => self.dark,
            Token::Light => self.light,
        }
    }

    /// Look up the player whose glyph is `glyph`.
    pub fn color_of(&self, glyph: char) -> Option<Color> {
        if glyph == self.dark {
            Some(Color::Dark)
        } else if glyph == self.light {
            Some(Color::Light)
        } else {
            None
        }
    }
}

/// Something that can produce a display representation of a grid.
pub trait Renderer {
    type Output;

    fn render(&self, grid: &Grid) -> Self::Output;
}

/// Renders a grid as lines of text: a header of column indices, then one
/// line per row starting with its index.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TextRenderer {
    glyphs: Glyphs,
}

impl TextRenderer {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, grid: &Grid) -> String {
        GridText {
            grid,
            glyphs: &self.glyphs,
        }
        .to_string()
    }
}

/// A grid paired with the glyphs to draw it with.
pub(crate) struct GridText<'a> {
    pub(crate) grid: &'a Grid,
    pub(crate) glyphs: &'a Glyphs,
}

/// Right-aligns every index and glyph to the width of the largest index.
impl fmt::Display for GridText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { grid, glyphs } = self;
        let width = (grid.rows().max(grid.columns()) - 1).to_string().len();

        writeln!(
            f,
            "{:width$} {}",
            "",
            (0..grid.columns()).map(|col| format!("{col:>width$}")).join(" ")
        )?;

        for (row, cells) in grid.rows_iter().enumerate() {
            writeln!(
                f,
                "{row:>width$} {}",
                cells
                    .iter()
                    .map(|&token| format!("{:>width$}", glyphs.glyph(token)))
                    .join(" ")
            )?;
        }

        Ok(())
    }
}
