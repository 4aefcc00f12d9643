use crate::game::{Game, Move, ParseMoveError};

/// Play an interactive Othello game on stdin/stdout.
///
/// This is the illustrative console driver; the rules core does no I/O.
pub fn play_interactive() {
    use std::io::Write;
    let mut game = Game::new();

    while !game.is_finished() {
        println!("\n{}\n", game);

        print!("Enter a move: ");
        std::io::stdout().flush().unwrap();
        let mut input_line = String::new();
        std::io::stdin().read_line(&mut input_line).unwrap();

        let parsed: Result<Move, ParseMoveError> = input_line.trim().parse();
        let mv = match parsed {
            Ok(mv) => mv,
            Err(_) => {
                println!("Cannot parse move.");
                continue;
            }
        };

        match game.apply_move(mv) {
            Ok(next_state) => game = next_state,
            Err(_) => {
                let legal = game.available_moves();
                if legal.is_empty() {
                    println!("Invalid move. Please enter 'pass'.");
                } else {
                    let notation: Vec<String> =
                        legal.iter().map(|pos| pos.to_string()).collect();
                    println!("Invalid move. Legal moves: [{}]", notation.join(", "));
                }
            }
        }
    }

    println!("\n{}\n", game.board);
    match game.winner() {
        Some(color) => println!("{} wins!", color),
        None => println!("The game is a draw."),
    }
}
