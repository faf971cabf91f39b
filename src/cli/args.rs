//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "minimax",
    about = "A minimax game-tree search engine with alpha-beta pruning, playable at tic-tac-toe"
)]
pub enum Minimax {
    #[structopt(
        name = "play",
        about = "Play tic-tac-toe against the engine, which searches for the best move using alpha-beta pruning at the given `--depth` (default: 9, a full game). Your side is chosen at random unless you specify `--player`. The initial position can be given as a nine-cell string with `--position` (default: empty board)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the engine play against itself at the given `--depth` (default: 9). The initial position can be given as a nine-cell string with `--position` (default: empty board)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Determine the best move from a given position, provided as a nine-cell string with `--position` (required). You can optionally specify the depth of the search with the `--depth` arg (default: 9)."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
}

impl crate::cli::commands::Command for Minimax {
    fn execute(self) {
        match self {
            Self::Play(cmd) => cmd.execute(),
            Self::Watch(cmd) => cmd.execute(),
            Self::CalculateBestMove(cmd) => cmd.execute(),
        }
    }
}
