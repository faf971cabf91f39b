use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot move to a square that is already occupied")]
    SquareOccupied,
    #[error("Square ({row:?}, {col:?}) is outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },
}
