//! Parsing of board position strings.
//!
//! A position string lists the nine cells in row-major order: `x`/`o` for
//! occupied squares, `.` for empty ones. For example, `xx.oo....` is the
//! board with `X` on the top row's first two squares and `O` on the middle
//! row's first two.

use std::str::FromStr;

use thiserror::Error;

use crate::tictactoe::{Board, BoardError, Player};

#[derive(Error, Debug, PartialEq)]
pub enum NotationParseError {
    #[error("Wrong number of cells: 9 expected, {cell_count:?} given")]
    WrongNumberOfCells { cell_count: usize },
    #[error("Invalid cell character: {invalid_character:?}")]
    InvalidCellCharacter { invalid_character: char },
    #[error("Error placing piece: {board_error:?}")]
    ErrorPlacingPiece { board_error: BoardError },
    #[error("Unreachable position: {x_count:?} x's and {o_count:?} o's")]
    UnreachablePosition { x_count: usize, o_count: usize },
}

pub const EMPTY_POSITION: &str = ".........";

/// Parses a nine-character cell string into a Board. Rejects piece counts
/// that cannot arise from alternating play starting with `x`.
pub fn parse_position(notation: &str) -> Result<Board, NotationParseError> {
    let cell_count = notation.chars().count();
    if cell_count != 9 {
        return Err(NotationParseError::WrongNumberOfCells { cell_count });
    }

    let mut board = Board::new();
    let mut x_count = 0;
    let mut o_count = 0;

    for (i, c) in notation.chars().enumerate() {
        let player = match c {
            'x' | 'X' => Some(Player::X),
            'o' | 'O' => Some(Player::O),
            '.' => None,
            _ => {
                return Err(NotationParseError::InvalidCellCharacter {
                    invalid_character: c,
                })
            }
        };

        if let Some(player) = player {
            match player {
                Player::X => x_count += 1,
                Player::O => o_count += 1,
            }
            board
                .put(i / 3, i % 3, player)
                .map_err(|board_error| NotationParseError::ErrorPlacingPiece { board_error })?;
        }
    }

    // X moves first, so x is always equal to o or one ahead.
    if x_count != o_count && x_count != o_count + 1 {
        return Err(NotationParseError::UnreachablePosition { x_count, o_count });
    }

    Ok(board)
}

// used for parsing cli args
impl FromStr for Board {
    type Err = NotationParseError;
    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        parse_position(notation)
    }
}
