use std::time::Duration;

use crate::game::engine::{Engine, EngineConfig};
use crate::game::input_source::InputSource;
use crate::input_handler::{InputError, MoveInput};
use crate::tictactoe::GameEnding;

/// Owns the game state and alternates moves between the configured input
/// sources until the game ends.
pub struct GameLoop<I: InputSource> {
    engine: Engine,
    input: I,
    frame_delay: Option<Duration>,
}

impl<I: InputSource> GameLoop<I> {
    pub fn new(input: I, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            input,
            frame_delay: None,
        }
    }

    /// Pauses after each engine move, for watchable engine-vs-engine games.
    pub fn set_frame_delay(&mut self, delay: Duration) {
        self.frame_delay = Some(delay);
    }

    pub fn run(&mut self) {
        loop {
            println!("{}", self.engine.board());

            if let Some(ending) = self.engine.check_game_over() {
                match ending {
                    GameEnding::Win(player) => println!("{} wins!", player),
                    GameEnding::Draw => println!("Draw!"),
                }
                break;
            }

            let current_turn = self.engine.turn();
            match self.input.get_move(current_turn) {
                Ok(Some(MoveInput::Coordinates { row, col })) => {
                    if let Err(error) = self.engine.make_human_move(row, col) {
                        println!("error: {}", error);
                    }
                }
                Ok(Some(MoveInput::UseEngine)) => match self.engine.make_engine_move() {
                    Ok(()) => {
                        if let (Some((row, col)), Some(score)) =
                            (self.engine.last_move(), self.engine.last_score())
                        {
                            println!("{} plays {} {} (score: {})", current_turn, row, col, score);
                        }
                        if let Some(delay) = self.frame_delay {
                            std::thread::sleep(delay);
                        }
                    }
                    Err(error) => {
                        println!("error: {}", error);
                        break;
                    }
                },
                Ok(None) => println!("Invalid input"),
                Err(InputError::UserExit) => break,
                Err(error) => println!("error: {}", error),
            }
        }
    }
}
