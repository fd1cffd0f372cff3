//! Cell contents and player colors.

use derive_more::Display;

/// One of the two players in a game, identified by the color they place.
#[derive(Clone, Copy, Debug, Display, Hash, PartialEq, Eq)]
pub enum Color {
    Dark,
    Light,
}

impl Default for Color {
    /// Gets the starting player (dark).
    fn default() -> Self {
        Self::Dark
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }
}

/// The content of a single grid cell.
#[derive(Clone, Copy, Debug, Default, Display, Hash, PartialEq, Eq)]
pub enum Token {
    #[default]
    Empty,
    Light,
    Dark,
}

impl Token {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Token::Empty
    }

    /// The color occupying this cell, if any.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Token::Empty => None,
            Token::Light => Some(Color::Light),
            Token::Dark => Some(Color::Dark),
        }
    }
}

impl From<Color> for Token {
    fn from(color: Color) -> Self {
        match color {
            Color::Dark => Token::Dark,
            Color::Light => Token::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_negation() {
        assert_eq!(!Color::Dark, Color::Light);
        assert_eq!(!Color::Light, Color::Dark);
        assert_eq!(!!Color::Dark, Color::Dark);
    }

    #[test]
    fn dark_moves_first() {
        assert_eq!(Color::default(), Color::Dark);
    }

    #[test]
    fn token_color_round_trip() {
        assert_eq!(Token::from(Color::Dark).color(), Some(Color::Dark));
        assert_eq!(Token::from(Color::Light).color(), Some(Color::Light));
        assert_eq!(Token::Empty.color(), None);
        assert!(Token::default().is_empty());
    }
}
