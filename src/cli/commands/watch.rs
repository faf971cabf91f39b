//! Watch command - watch the engine play against itself.

use std::time::Duration;

use structopt::StructOpt;

use crate::game::input_source::EngineInput;
use crate::input_handler::notation::EMPTY_POSITION;
use crate::tictactoe::Board;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "9")]
    pub depth: u8,
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: Board,
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.depth, self.starting_position);
        run_game_loop(
            EngineInput,
            config,
            Some(Duration::from_millis(self.delay_ms)),
        );
    }
}
