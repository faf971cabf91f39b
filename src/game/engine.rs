use log::debug;
use thiserror::Error;

use crate::searcher::{minimax_alpha_beta, Position};
use crate::tictactoe::{Board, BoardError, GameEnding, Player};

/// Core engine state and configuration
#[derive(Clone)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub starting_position: Board,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 9, // A full game is at most 9 ply
            starting_position: Board::new(),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("search depth must be at least 1")]
    DepthTooLow,
    #[error("no move matches the root score")]
    NoMatchingMove,
    #[error("Board error: {error:?}")]
    BoardError { error: BoardError },
}

/// Owns the current position and advances it one accepted move at a time,
/// either from a human or from the engine's own search.
pub struct Engine {
    board: Board,
    search_depth: u8,
    last_score: Option<f64>,
    last_move: Option<(usize, usize)>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: config.starting_position,
            search_depth: config.search_depth,
            last_score: None,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.board.turn()
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        self.board.game_ending()
    }

    /// The root score of the most recent engine search.
    pub fn last_score(&self) -> Option<f64> {
        self.last_score
    }

    /// The square filled by the most recent accepted move.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    pub fn make_human_move(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        let next = self
            .board
            .make_move(row, col)
            .map_err(|error| EngineError::BoardError { error })?;
        self.board = next;
        self.last_move = Some((row, col));
        Ok(())
    }

    /// Searches the current position and plays the best move found.
    ///
    /// The search returns a score, not a move, so the move is recovered by
    /// re-searching each child one ply shallower with the roles flipped and
    /// taking the first child that reproduces the root score. Such a child
    /// always exists: the root score is the max (or min) over exactly these
    /// child values.
    pub fn make_engine_move(&mut self) -> Result<(), EngineError> {
        if self.search_depth == 0 {
            return Err(EngineError::DepthTooLow);
        }

        let candidates = self.board.moves();
        if candidates.is_empty() {
            return Err(EngineError::NoAvailableMoves);
        }

        let maximizing = self.board.turn().maximize_score();
        let score = minimax_alpha_beta(
            &self.board,
            self.search_depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            maximizing,
        );
        debug!(
            "searched depth {} for {}: score {}",
            self.search_depth,
            self.board.turn(),
            score
        );

        for candidate in candidates {
            let candidate_score = minimax_alpha_beta(
                &candidate,
                self.search_depth - 1,
                f64::NEG_INFINITY,
                f64::INFINITY,
                !maximizing,
            );
            if candidate_score == score {
                self.last_move = placed_square(&self.board, &candidate);
                self.last_score = Some(score);
                self.board = candidate;
                return Ok(());
            }
        }

        Err(EngineError::NoMatchingMove)
    }
}

/// The square that `after` fills relative to `before`.
fn placed_square(before: &Board, after: &Board) -> Option<(usize, usize)> {
    for row in 0..3 {
        for col in 0..3 {
            if before.get(row, col).is_none() && after.get(row, col).is_some() {
                return Some((row, col));
            }
        }
    }
    None
}
