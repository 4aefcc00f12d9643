//! `reversi` is a checked, grid-based rules engine for Reversi/Othello.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] owns the 8x8 grid of [`Piece`]s and implements the rules core:
//!    move legality, capture resolution along all eight directions, and
//!    end-of-game detection. Every position-accepting operation is
//!    bounds-checked and returns a [`Result`] rather than clamping.
//!  - [`Game`] layers turn order and pass handling on top of [`Board`],
//!    for drivers that want a whole game rather than raw board queries.

pub mod test_utils;

mod board;
mod game;
mod location;
mod piece;

pub use board::*;
pub use game::*;
pub use location::*;
pub use piece::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
