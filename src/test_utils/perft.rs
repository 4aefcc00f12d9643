//! "Perft" correctness test: count the number of leaves at a given depth.
//! Useful for validating move generation against published counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::game::{Game, Move};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Game::new(), depth)
}

fn leaves_below(game: Game, depth: u64) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let moves = game.available_moves();
    if moves.is_empty() {
        // Both colors passed: game is over
        if game.just_passed {
            return 1;
        }

        return leaves_below(game.apply_move(Move::Pass).unwrap(), depth - 1);
    }

    moves
        .into_iter()
        .map(|pos| leaves_below(game.apply_move(Move::Place(pos)).unwrap(), depth - 1))
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}
