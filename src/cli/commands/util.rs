//! Shared utilities for CLI commands.

use std::time::Duration;

use crate::game::engine::EngineConfig;
use crate::game::input_source::InputSource;
use crate::game::r#loop::GameLoop;
use crate::tictactoe::Board;

pub(crate) fn run_game_loop<I: InputSource>(
    input_source: I,
    config: EngineConfig,
    frame_delay: Option<Duration>,
) {
    let mut game = GameLoop::new(input_source, config);
    if let Some(delay) = frame_delay {
        game.set_frame_delay(delay);
    }
    game.run();
}

pub(crate) fn create_config(depth: u8, starting_position: Board) -> EngineConfig {
    EngineConfig {
        search_depth: depth,
        starting_position,
    }
}
