use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "    0   1   2")?;
        writeln!(f, "  ┌───┬───┬───┐")?;
        for row in 0..3 {
            write!(f, "{} │", row)?;
            for col in 0..3 {
                match self.get(row, col) {
                    Some(player) => write!(f, " {} │", player)?,
                    None => write!(f, "   │")?,
                }
            }
            writeln!(f)?;
            if row < 2 {
                writeln!(f, "  ├───┼───┼───┤")?;
            }
        }
        writeln!(f, "  └───┴───┴───┘")
    }
}

/// Builds a [`Board`] from a literal 3x3 layout, e.g.:
///
/// ```
/// use minimax::tictactoe_position;
///
/// let board = tictactoe_position! {
///     X X .
///     O O .
///     . . .
/// };
/// assert_eq!(board.winner(), None);
/// ```
#[macro_export]
macro_rules! tictactoe_position {
    ($($cell:tt)*) => {{
        // Convert all input tokens to a string and filter out whitespace
        // characters.
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 9 squares
        assert_eq!(cells.len(), 9, "Invalid number of squares. Expected 9, got {}", cells.len());
        let mut board = $crate::tictactoe::Board::new();
        for (i, &c) in cells.iter().enumerate() {
            let player = match c {
                'X' | 'x' => Some($crate::tictactoe::Player::X),
                'O' | 'o' => Some($crate::tictactoe::Player::O),
                '.' => None,
                _ => panic!("Invalid character in tic-tac-toe position"),
            };
            if let Some(player) = player {
                board.put(i / 3, i % 3, player).unwrap();
            }
        }
        board
    }};
}
