//! Parsing of human move input and board position strings.

use std::io;

use regex::Regex;
use thiserror::Error;

pub mod notation;

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exited")]
    UserExit,
}

/// A single move request: coordinates entered by a human, or a delegation to
/// the engine's search.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MoveInput {
    Coordinates { row: usize, col: usize },
    UseEngine,
}

/// Reads one line from stdin and parses it as a move.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let raw = match io::stdin().read_line(&mut input) {
        Ok(_n) => input.trim_start().trim_end(),
        Err(error) => {
            return Err(InputError::IOError {
                error: error.to_string(),
            })
        }
    };

    parse_move_text(raw)
}

/// Parses a move entered as `row col` (also `row,col`), both in `0..=2`.
/// `quit` ends the game.
pub fn parse_move_text(raw: &str) -> Result<MoveInput, InputError> {
    if raw == "quit" {
        return Err(InputError::UserExit);
    }

    let coordinate_re = Regex::new(r"^([0-2])[ ,]\s*([0-2])$").unwrap();

    if let Some(caps) = coordinate_re.captures(raw) {
        // The regex only admits single digits, so these cannot fail.
        let row = caps.get(1).unwrap().as_str().parse::<usize>().unwrap();
        let col = caps.get(2).unwrap().as_str().parse::<usize>().unwrap();
        Ok(MoveInput::Coordinates { row, col })
    } else {
        Err(InputError::InvalidInput {
            input: raw.to_string(),
        })
    }
}
