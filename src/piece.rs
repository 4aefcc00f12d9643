//! The two piece colors and the pieces that sit on the board.

use derive_more::{Display, Error};
use std::fmt;

/// One of the two piece colors in a game.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Default for Color {
    /// Gets the starting color (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other color.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Color {
    /// The single-character glyph used in board notation and rendering.
    pub fn glyph(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid color name")]
pub struct ParseColorError;

impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("black") {
            Ok(Color::Black)
        } else if s.eq_ignore_ascii_case("white") {
            Ok(Color::White)
        } else {
            Err(ParseColorError)
        }
    }
}

/// A single token on the board.
///
/// A piece is created when a move places it (or when the board is set up) and
/// is owned exclusively by the cell holding it. A captured piece is never
/// removed; it changes color in place via [`flip`](Piece::flip).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    color: Color,
}

impl Piece {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// The color this piece currently shows.
    #[inline]
    pub fn color(self) -> Color {
        self.color
    }

    /// Toggle the piece to the opposite color.
    #[inline]
    pub fn flip(&mut self) {
        self.color = !self.color;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color.glyph())
    }
}
