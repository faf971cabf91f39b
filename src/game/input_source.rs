use crate::input_handler::{self, InputError, MoveInput};
use crate::tictactoe::Player;

pub trait InputSource {
    fn get_move(&self, current_turn: Player) -> Result<Option<MoveInput>, InputError>;
}

fn prompt_human(current_turn: Player) -> Result<Option<MoveInput>, InputError> {
    println!("{} to move. Enter `row col` (0-2), or `quit`:", current_turn);
    match input_handler::parse_move_input() {
        Ok(move_input) => Ok(Some(move_input)),
        Err(InputError::UserExit) => Err(InputError::UserExit),
        Err(_) => Ok(None), // Other errors treated as invalid input
    }
}

pub struct HumanInput;

impl InputSource for HumanInput {
    fn get_move(&self, current_turn: Player) -> Result<Option<MoveInput>, InputError> {
        prompt_human(current_turn)
    }
}

pub struct EngineInput;

impl InputSource for EngineInput {
    fn get_move(&self, _current_turn: Player) -> Result<Option<MoveInput>, InputError> {
        Ok(Some(MoveInput::UseEngine))
    }
}

/// A human plays one side, the engine the other.
pub struct ConditionalInput {
    pub human_player: Player,
}

impl InputSource for ConditionalInput {
    fn get_move(&self, current_turn: Player) -> Result<Option<MoveInput>, InputError> {
        if current_turn == self.human_player {
            prompt_human(current_turn)
        } else {
            Ok(Some(MoveInput::UseEngine))
        }
    }
}
