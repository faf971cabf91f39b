//! Calculate best move command - determine the best move from a position.

use structopt::StructOpt;

use crate::game::engine::{Engine, EngineConfig};
use crate::tictactoe::Board;

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "9")]
    pub depth: u8,
    #[structopt(long = "position")]
    pub starting_position: Board,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let mut engine = Engine::with_config(EngineConfig {
            search_depth: self.depth,
            starting_position: self.starting_position,
        });

        if engine.check_game_over().is_some() {
            eprintln!("There are no valid moves in the given position.");
            return;
        }

        match engine.make_engine_move() {
            Ok(()) => {
                let (row, col) = engine
                    .last_move()
                    .expect("an accepted engine move should record its square");
                println!("{} {}", row, col);
                if let Some(score) = engine.last_score() {
                    println!("score: {}", score);
                }
            }
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
