//! The rules core: an 8x8 grid of [`Piece`]s with move legality, capture
//! resolution, and end-of-game detection.
//!
//! Legality is recomputed from the grid on every query; the only state
//! transition is [`Board::place_piece`], which moves the grid from one valid
//! configuration to the next with no partially-flipped state observable.

use crate::location::{all_positions, Direction, Position, DIRECTIONS};
use crate::piece::{Color, Piece};
use crate::EDGE_LENGTH;
use derive_more::{Display, Error};
use std::fmt;

/// The 8x8 grid. Each cell holds at most one piece, owned exclusively by
/// that cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; EDGE_LENGTH]; EDGE_LENGTH],
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum BoardError {
    /// A coordinate pair outside the board was passed to a query.
    #[display(fmt = "position is off the board")]
    InvalidPosition,
    /// A placement on an occupied cell, or one that captures nothing.
    #[display(fmt = "move is not legal")]
    InvalidMove,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position: white on (3,3) and (4,4), black on
    /// (3,4) and (4,3), every other cell empty.
    pub fn new() -> Self {
        let mut board = Self::empty();
        *board.cell_mut(Position::new(3, 3)) = Some(Piece::new(Color::White));
        *board.cell_mut(Position::new(3, 4)) = Some(Piece::new(Color::Black));
        *board.cell_mut(Position::new(4, 3)) = Some(Piece::new(Color::Black));
        *board.cell_mut(Position::new(4, 4)) = Some(Piece::new(Color::White));
        board
    }

    fn empty() -> Self {
        Self {
            grid: [[None; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// Whether both coordinates of `pos` lie on the board.
    #[inline]
    pub fn is_valid_pos(pos: Position) -> bool {
        (0..EDGE_LENGTH as i8).contains(&pos.row) && (0..EDGE_LENGTH as i8).contains(&pos.col)
    }

    // Cell accessors for positions already known to be on the board.
    #[inline]
    fn cell(&self, pos: Position) -> Option<Piece> {
        self.grid[pos.row as usize][pos.col as usize]
    }

    #[inline]
    fn cell_mut(&mut self, pos: Position) -> &mut Option<Piece> {
        &mut self.grid[pos.row as usize][pos.col as usize]
    }

    /// Get the piece at `pos`, or `None` for an empty cell.
    pub fn piece_at(&self, pos: Position) -> Result<Option<Piece>, BoardError> {
        if Self::is_valid_pos(pos) {
            Ok(self.cell(pos))
        } else {
            Err(BoardError::InvalidPosition)
        }
    }

    /// Whether the cell at `pos` holds a piece.
    pub fn is_occupied(&self, pos: Position) -> Result<bool, BoardError> {
        Ok(self.piece_at(pos)?.is_some())
    }

    /// Whether the cell at `pos` holds a piece of `color`.
    /// An empty cell is nobody's.
    pub fn is_mine(&self, pos: Position, color: Color) -> Result<bool, BoardError> {
        Ok(self
            .piece_at(pos)?
            .map_or(false, |piece| piece.color() == color))
    }

    /// Walk away from `pos` along `dir`, collecting the run of opposing
    /// pieces, until one of the stopping conditions:
    ///
    ///  - off the board or an empty cell: the line never closes, so nothing
    ///    is captured and the result is empty;
    ///  - a piece of `color`: the run collected so far is captured (possibly
    ///    empty, when the first neighbor is already our own).
    fn positions_to_flip(&self, pos: Position, color: Color, dir: Direction) -> Vec<Position> {
        let mut run = Vec::new();
        let mut cursor = pos.step(dir);
        while Self::is_valid_pos(cursor) {
            match self.cell(cursor) {
                None => return Vec::new(),
                Some(piece) if piece.color() == color => return run,
                Some(_) => run.push(cursor),
            }
            cursor = cursor.step(dir);
        }
        Vec::new()
    }

    /// Whether placing `color` at `pos` is legal: the cell is empty and at
    /// least one direction captures.
    pub fn is_valid_move(&self, pos: Position, color: Color) -> Result<bool, BoardError> {
        if self.is_occupied(pos)? {
            return Ok(false);
        }
        Ok(DIRECTIONS
            .iter()
            .any(|&dir| !self.positions_to_flip(pos, color, dir).is_empty()))
    }

    /// Place a new piece of `color` at `pos` and flip every captured run, in
    /// every direction at once.
    ///
    /// Fails with [`BoardError::InvalidMove`] when the placement is illegal
    /// (occupied cell, or no direction captures), leaving the grid untouched.
    pub fn place_piece(&mut self, pos: Position, color: Color) -> Result<(), BoardError> {
        if !self.is_valid_move(pos, color)? {
            return Err(BoardError::InvalidMove);
        }

        // Resolve every capture run before the first mutation.
        let flips: Vec<Position> = DIRECTIONS
            .iter()
            .flat_map(|&dir| self.positions_to_flip(pos, color, dir))
            .collect();

        *self.cell_mut(pos) = Some(Piece::new(color));
        for flip_pos in flips {
            if let Some(piece) = self.cell_mut(flip_pos) {
                piece.flip();
            }
        }
        Ok(())
    }

    /// Every legal placement for `color`, in row-major scan order.
    pub fn valid_moves(&self, color: Color) -> Vec<Position> {
        all_positions()
            .filter(|&pos| self.is_valid_move(pos, color).unwrap_or(false))
            .collect()
    }

    /// Whether `color` has at least one legal placement.
    pub fn has_move(&self, color: Color) -> bool {
        !self.valid_moves(color).is_empty()
    }

    /// Whether the game has ended: neither color has a legal placement.
    /// A board can be over well before it is full.
    pub fn is_over(&self) -> bool {
        !self.has_move(Color::White) && !self.has_move(Color::Black)
    }

    /// Count the pieces showing `color`.
    pub fn count(&self, color: Color) -> usize {
        all_positions()
            .filter(|&pos| self.cell(pos).map_or(false, |piece| piece.color() == color))
            .count()
    }
}

// Board formatted like:
//    A B C D E F G H
//  1 . . . . . . . .
//  4 . . . O X . . .
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   A B C D E F G H")?;
        for row in 0..EDGE_LENGTH {
            write!(f, "\n {} ", row + 1)?;
            for col in 0..EDGE_LENGTH {
                match self.grid[row][col] {
                    Some(piece) => write!(f, "{} ", piece)?,
                    None => write!(f, ". ")?,
                }
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[display(fmt = "expected exactly 64 cell glyphs")]
    WrongLength,
    #[display(fmt = "unrecognized cell glyph")]
    BadGlyph,
}

/// Build a [`Board`] from a 64-glyph string in row-major order: `X` black,
/// `O` white, `.` or `-` empty. Whitespace is ignored, so multi-line
/// literals work. Intended for setting up synthetic positions.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut glyphs = s.chars().filter(|c| !c.is_whitespace());
        let mut board = Board::empty();
        for pos in all_positions() {
            *board.cell_mut(pos) = match glyphs.next().ok_or(ParseBoardError::WrongLength)? {
                'X' | 'x' => Some(Piece::new(Color::Black)),
                'O' | 'o' => Some(Piece::new(Color::White)),
                '.' | '-' => None,
                _ => return Err(ParseBoardError::BadGlyph),
            };
        }
        match glyphs.next() {
            None => Ok(board),
            Some(_) => Err(ParseBoardError::WrongLength),
        }
    }
}
