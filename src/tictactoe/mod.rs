//! The sample game: tic-tac-toe, implemented as a searchable
//! [`Position`](crate::searcher::Position).

pub mod board;
pub mod display;
pub mod error;
pub mod player;

#[cfg(test)]
mod tests;

pub use board::{Board, GameEnding};
pub use error::BoardError;
pub use player::Player;
