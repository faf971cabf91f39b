use super::error::BoardError;
use super::player::Player;
use crate::searcher::Position;

/// The eight winning lines: three rows, three columns, two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// An immutable 3x3 tic-tac-toe position.
///
/// Applying a move produces a new `Board`; existing boards are never
/// mutated, so the search may freely share an ancestor across branches.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Board {
    cells: [[Option<Player>; 3]; 3],
}

/// The possible endings of a finished game.
#[derive(Debug, PartialEq, Eq)]
pub enum GameEnding {
    Win(Player),
    Draw,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row][col]
    }

    /// Places a piece directly, without regard for whose turn it is. Used by
    /// position parsing and test setup.
    pub fn put(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        if row > 2 || col > 2 {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if self.cells[row][col].is_some() {
            return Err(BoardError::SquareOccupied);
        }
        self.cells[row][col] = Some(player);
        Ok(())
    }

    /// Whose turn it is, derived from the piece count. `X` moves first.
    pub fn turn(&self) -> Player {
        let placed = self
            .cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count();
        if placed % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Plays the current player's piece at the given square, returning the
    /// resulting position. The receiver is left untouched.
    pub fn make_move(&self, row: usize, col: usize) -> Result<Board, BoardError> {
        if row > 2 || col > 2 {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if self.cells[row][col].is_some() {
            return Err(BoardError::SquareOccupied);
        }

        let mut next = *self;
        next.cells[row][col] = Some(self.turn());
        Ok(next)
    }

    pub fn winner(&self) -> Option<Player> {
        for line in &LINES {
            let [a, b, c] = *line;
            if let Some(player) = self.get(a.0, a.1) {
                if self.get(b.0, b.1) == Some(player) && self.get(c.0, c.1) == Some(player) {
                    return Some(player);
                }
            }
        }
        None
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_some())
    }

    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Returns the game ending if the game has ended, otherwise None.
    pub fn game_ending(&self) -> Option<GameEnding> {
        if let Some(player) = self.winner() {
            return Some(GameEnding::Win(player));
        }
        if self.is_full() {
            return Some(GameEnding::Draw);
        }
        None
    }
}

impl Position for Board {
    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    fn moves(&self) -> Vec<Board> {
        let mut moves = Vec::new();

        for row in 0..3 {
            for col in 0..3 {
                // Occupied squares refuse the move; they are simply not
                // legal successors.
                if let Ok(board) = self.make_move(row, col) {
                    moves.push(board);
                }
            }
        }

        moves
    }

    fn evaluate(&self) -> f64 {
        match self.winner() {
            Some(Player::X) => 1.0,
            Some(Player::O) => -1.0,
            None => 0.0,
        }
    }

    fn is_player_one(&self) -> bool {
        self.turn() == Player::X
    }
}
