//! Code for working with [`Position`]s on the Othello board.

use crate::EDGE_LENGTH;
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// A row/column coordinate pair addressing one cell of the board.
///
/// Coordinates are signed and unrestricted at construction: a `Position` may
/// lie off the board, and validity is checked by [`Board::is_valid_pos`]
/// rather than by clamping here.
///
/// [`Board::is_valid_pos`]: crate::Board::is_valid_pos
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, From, Into)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

/// One of the eight unit step vectors used to scan for capturable lines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Direction {
    row_step: i8,
    col_step: i8,
}

/// Every direction a capturing line can run in: the four orthogonals and the
/// four diagonals.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(0, 1),
    Direction::new(1, 1),
    Direction::new(1, 0),
    Direction::new(1, -1),
    Direction::new(0, -1),
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
];

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Get the neighboring position one step along `dir`.
    /// The result may lie off the board.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        Self {
            row: self.row + dir.row_step,
            col: self.col + dir.col_step,
        }
    }
}

impl Direction {
    const fn new(row_step: i8, col_step: i8) -> Self {
        Self { row_step, col_step }
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid position notation")]
pub struct ParsePositionError;

/// Build a [`Position`] from 1-indexed string notation ("A4").
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParsePositionError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParsePositionError)? as i8;
        let row = chars
            .next()
            .ok_or(ParsePositionError)?
            .to_digit(10)
            .ok_or(ParsePositionError)? as i8;

        if row < 1 || row > 8 || chars.next() != None {
            return Err(ParsePositionError);
        }

        Ok(Self::new(row - 1, col))
    }
}

/// Convert this [`Position`] into string notation ("A4").
/// Fails for positions off the board.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH"
            .chars()
            .nth(self.col as usize)
            .ok_or(fmt::Error)?;
        let row_str = "12345678"
            .chars()
            .nth(self.row as usize)
            .ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

/// Iterate all on-board positions in row-major order.
pub(crate) fn all_positions() -> impl Iterator<Item = Position> {
    (0..EDGE_LENGTH as i8)
        .flat_map(|row| (0..EDGE_LENGTH as i8).map(move |col| Position::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn step_covers_all_neighbors() {
        let center = Position::new(4, 4);
        let mut neighbors: Vec<Position> =
            DIRECTIONS.iter().map(|&dir| center.step(dir)).collect();
        neighbors.sort();
        neighbors.dedup();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&center));
    }

    #[test]
    fn step_off_board() {
        assert_eq!(
            Position::new(0, 0).step(Direction::new(-1, -1)),
            Position::new(-1, -1)
        );
    }

    #[test]
    fn position_from_str_success() {
        assert_eq!(Position::from_str("A1"), Ok(Position::new(0, 0)));
        assert_eq!(Position::from_str("h8"), Ok(Position::new(7, 7)));
        assert_eq!(Position::from_str("D7"), Ok(Position::new(6, 3)));
    }

    #[test]
    fn position_from_str_fail() {
        assert_eq!(Position::from_str(""), Err(ParsePositionError));
        assert_eq!(Position::from_str("A12"), Err(ParsePositionError));
        assert_eq!(Position::from_str("AA"), Err(ParsePositionError));
        assert_eq!(Position::from_str("A9"), Err(ParsePositionError));
        assert_eq!(Position::from_str("I5"), Err(ParsePositionError));
    }

    #[test]
    fn position_to_str() {
        assert_eq!(Position::new(0, 0).to_string(), "A1");
        assert_eq!(Position::new(7, 7).to_string(), "H8");
        assert_eq!(Position::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Position::from_str("F6").unwrap().to_string(), "F6");
    }

    #[test]
    fn position_from_tuple() {
        assert_eq!(Position::from((2, 3)), Position::new(2, 3));
        let (row, col): (i8, i8) = Position::new(5, 4).into();
        assert_eq!((row, col), (5, 4));
    }

    #[test]
    fn all_positions_row_major() {
        let positions: Vec<Position> = all_positions().collect();
        assert_eq!(positions.len(), 64);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[1], Position::new(0, 1));
        assert_eq!(positions[63], Position::new(7, 7));
    }
}
