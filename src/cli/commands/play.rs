//! Play command - play a game against the engine.

use structopt::StructOpt;

use crate::game::input_source::ConditionalInput;
use crate::input_handler::notation::EMPTY_POSITION;
use crate::tictactoe::{Board, Player};

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "9")]
    pub depth: u8,
    #[structopt(short = "p", long = "player", default_value = "random")]
    pub player: Player,
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: Board,
}

impl Command for PlayArgs {
    fn execute(self) {
        println!("You are playing as {}", self.player);
        let config = create_config(self.depth, self.starting_position);
        run_game_loop(
            ConditionalInput {
                human_player: self.player,
            },
            config,
            None,
        );
    }
}
