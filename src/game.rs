//! Game-level logic: turn order, pass handling, and outcome.
//!
//! [`Board`] answers questions about a single position; [`Game`] strings
//! positions together into a whole game, enforcing that a color may pass
//! only when it has no placement.

use crate::board::{Board, BoardError};
use crate::location::Position;
use crate::piece::Color;
use derive_more::{Display, Error};
use std::cmp::Ordering;
use std::fmt;

/// An action in an Othello game: pass or place at a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Pass,
    Place(Position),
}

impl From<Position> for Move {
    fn from(pos: Position) -> Self {
        Self::Place(pos)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid move notation")]
pub struct ParseMoveError;

/// Build a [`Move`] from string notation: a position ("A4") or "PASS".
impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pass") {
            Ok(Move::Pass)
        } else {
            s.parse::<Position>()
                .map(Move::Place)
                .map_err(|_| ParseMoveError)
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Pass => f.write_str("PASS"),
            Move::Place(pos) => pos.fmt(f),
        }
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum GameError {
    /// A pass was attempted while a placement is still available.
    #[display(fmt = "cannot pass while a placement is available")]
    IllegalPass,
    /// The board rejected a placement.
    #[display(fmt = "{}", _0)]
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub to_move: Color,
    pub just_passed: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// The starting position, black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Color::Black,
            just_passed: false,
        }
    }

    /// Build a game from an arbitrary board and color to move, for setting
    /// up synthetic positions.
    pub fn from_parts(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            just_passed: false,
        }
    }

    /// The placements available to the active color, in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        self.board.valid_moves(self.to_move)
    }

    /// Apply a move for the active color, yielding the next game state.
    ///
    /// Passing is legal only when the active color has no placement;
    /// placements are validated by the board.
    pub fn apply_move(mut self, mv: Move) -> Result<Self, GameError> {
        match mv {
            Move::Pass => {
                if self.board.has_move(self.to_move) {
                    return Err(GameError::IllegalPass);
                }
                self.just_passed = true;
            }
            Move::Place(pos) => {
                self.board.place_piece(pos, self.to_move)?;
                self.just_passed = false;
            }
        }
        self.to_move = !self.to_move;
        Ok(self)
    }

    /// Whether the game has ended: neither color has a legal placement.
    pub fn is_finished(&self) -> bool {
        self.board.is_over()
    }

    /// The color with more pieces, or `None` on a tie.
    /// Meaningful once [`is_finished`](Game::is_finished) returns true.
    pub fn winner(&self) -> Option<Color> {
        let black = self.board.count(Color::Black);
        let white = self.board.count(Color::White);
        match black.cmp(&white) {
            Ordering::Greater => Some(Color::Black),
            Ordering::Less => Some(Color::White),
            Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.to_move)?;
        if self.just_passed {
            write!(f, " (last move was a pass)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn opening_move_flips_turn() {
        let game = Game::new();
        assert_eq!(game.to_move, Color::Black);

        let game = game.apply_move(Move::Place(Position::new(2, 3))).unwrap();
        assert_eq!(game.to_move, Color::White);
        assert_eq!(game.board.count(Color::Black), 4);
        assert_eq!(game.board.count(Color::White), 1);
        assert!(!game.just_passed);
    }

    #[test]
    fn cannot_pass_with_moves_available() {
        let game = Game::new();
        assert_eq!(game.apply_move(Move::Pass), Err(GameError::IllegalPass));
    }

    #[test]
    fn illegal_placement_propagates_board_error() {
        let game = Game::new();
        assert_eq!(
            game.apply_move(Move::Place(Position::new(0, 0))),
            Err(GameError::Board(BoardError::InvalidMove))
        );
        assert_eq!(
            game.apply_move(Move::Place(Position::new(9, 9))),
            Err(GameError::Board(BoardError::InvalidPosition))
        );
    }

    #[test]
    fn stuck_color_must_pass() {
        // White has no reply; the pass hands the turn back to black.
        let board: Board = "XO......
                            ........
                            ........
                            ........
                            ........
                            ........
                            ........
                            ........"
            .parse()
            .unwrap();
        let game = Game::from_parts(board, Color::White);
        assert!(game.available_moves().is_empty());

        let game = game.apply_move(Move::Pass).unwrap();
        assert_eq!(game.to_move, Color::Black);
        assert!(game.just_passed);
    }

    #[test]
    fn winner_by_count() {
        let board: Board = "XXXXXXXX
                            XXXXXXXX
                            XXXXXXXX
                            XXXXXXXX
                            XXXXXXXX
                            OOOOOOOO
                            OOOOOOOO
                            OOOOOOOO"
            .parse()
            .unwrap();
        let game = Game::from_parts(board, Color::Black);
        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(Color::Black));
    }

    #[test]
    fn tie_has_no_winner() {
        let board: Board = "XXXXXXXX
                            XXXXXXXX
                            XXXXXXXX
                            XXXXXXXX
                            OOOOOOOO
                            OOOOOOOO
                            OOOOOOOO
                            OOOOOOOO"
            .parse()
            .unwrap();
        assert_eq!(Game::from_parts(board, Color::Black).winner(), None);
    }

    #[test]
    fn move_from_str() {
        assert_eq!(Move::from_str("PASS"), Ok(Move::Pass));
        assert_eq!(Move::from_str("pass"), Ok(Move::Pass));
        assert_eq!(
            Move::from_str("C4"),
            Ok(Move::Place(Position::new(3, 2)))
        );
        assert_eq!(Move::from_str("J1"), Err(ParseMoveError));
        assert_eq!(Move::from_str(""), Err(ParseMoveError));
    }

    #[test]
    fn move_to_str() {
        assert_eq!(Move::Pass.to_string(), "PASS");
        assert_eq!(Move::Place(Position::new(3, 2)).to_string(), "C4");
    }
}
