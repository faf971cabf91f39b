use super::*;
use crate::searcher::{minimax, minimax_alpha_beta, Position};
use crate::tictactoe_position;

#[test]
fn test_empty_board_starts_with_x() {
    let board = Board::new();
    assert_eq!(board.turn(), Player::X);
    assert!(board.is_player_one());
}

#[test]
fn test_turn_alternates() {
    let board = Board::new();
    let board = board.make_move(1, 1).unwrap();
    assert_eq!(board.turn(), Player::O);
    let board = board.make_move(0, 0).unwrap();
    assert_eq!(board.turn(), Player::X);
}

#[test]
fn test_make_move_does_not_mutate_the_receiver() {
    let board = Board::new();
    let next = board.make_move(0, 0).unwrap();
    assert_eq!(board.get(0, 0), None);
    assert_eq!(next.get(0, 0), Some(Player::X));
}

#[test]
fn test_make_move_on_occupied_square() {
    let board = Board::new().make_move(1, 1).unwrap();
    assert_eq!(board.make_move(1, 1), Err(BoardError::SquareOccupied));
}

#[test]
fn test_make_move_out_of_bounds() {
    let board = Board::new();
    assert_eq!(
        board.make_move(3, 0),
        Err(BoardError::OutOfBounds { row: 3, col: 0 })
    );
    assert_eq!(
        board.make_move(0, 9),
        Err(BoardError::OutOfBounds { row: 0, col: 9 })
    );
}

#[test]
fn test_winner_rows() {
    let board = tictactoe_position! {
        X X X
        O O .
        . . .
    };
    assert_eq!(board.winner(), Some(Player::X));
}

#[test]
fn test_winner_columns() {
    let board = tictactoe_position! {
        O X .
        O X .
        O . X
    };
    assert_eq!(board.winner(), Some(Player::O));
}

#[test]
fn test_winner_diagonals() {
    let board = tictactoe_position! {
        X O .
        O X .
        . . X
    };
    assert_eq!(board.winner(), Some(Player::X));

    let board = tictactoe_position! {
        X . O
        X O .
        O . X
    };
    assert_eq!(board.winner(), Some(Player::O));
}

#[test]
fn test_no_winner_on_open_board() {
    let board = tictactoe_position! {
        X O X
        . . .
        . . .
    };
    assert_eq!(board.winner(), None);
    assert!(!board.is_terminal());
}

#[test]
fn test_moves_enumerates_empty_squares() {
    let board = Board::new();
    assert_eq!(board.moves().len(), 9);

    let board = board.make_move(1, 1).unwrap();
    let successors = board.moves();
    assert_eq!(successors.len(), 8);
    // Every successor keeps the original move and fills a different square.
    for successor in &successors {
        assert_eq!(successor.get(1, 1), Some(Player::X));
        assert_eq!(successor.turn(), Player::X);
    }
}

#[test]
fn test_moves_empty_on_full_board() {
    let board = tictactoe_position! {
        X O X
        X O O
        O X X
    };
    assert!(board.moves().is_empty());
    assert!(board.is_terminal());
}

#[test]
fn test_drawn_board_evaluates_to_zero_at_any_depth() {
    let board = tictactoe_position! {
        X O X
        X O O
        O X X
    };
    assert!(board.is_draw());
    assert_eq!(board.evaluate(), 0.0);
    for depth in 0..=9 {
        assert_eq!(minimax(&board, depth, true), 0.0);
        assert_eq!(
            minimax_alpha_beta(&board, depth, f64::NEG_INFINITY, f64::INFINITY, true),
            0.0
        );
    }
}

#[test]
fn test_won_board_evaluation() {
    let x_wins = tictactoe_position! {
        X X X
        O O .
        . . .
    };
    assert_eq!(x_wins.evaluate(), 1.0);

    let o_wins = tictactoe_position! {
        X X .
        O O O
        X . .
    };
    assert_eq!(o_wins.evaluate(), -1.0);
}

#[test]
fn test_immediate_win_searches_positive() {
    // X to move with two in a row and the third square open.
    let board = tictactoe_position! {
        X X .
        O O .
        . . .
    };
    assert_eq!(board.turn(), Player::X);
    assert!(minimax(&board, 1, true) > 0.0);
    assert!(minimax_alpha_beta(&board, 1, f64::NEG_INFINITY, f64::INFINITY, true) > 0.0);
}

#[test]
fn test_empty_board_full_depth_is_a_draw() {
    let board = Board::new();
    assert_eq!(minimax(&board, 9, true), 0.0);
    assert_eq!(
        minimax_alpha_beta(&board, 9, f64::NEG_INFINITY, f64::INFINITY, true),
        0.0
    );
}

#[test]
fn test_game_ending() {
    assert_eq!(Board::new().game_ending(), None);

    let won = tictactoe_position! {
        X X X
        O O .
        . . .
    };
    assert_eq!(won.game_ending(), Some(GameEnding::Win(Player::X)));

    let drawn = tictactoe_position! {
        X O X
        X O O
        O X X
    };
    assert_eq!(drawn.game_ending(), Some(GameEnding::Draw));
}

#[test]
fn test_display_renders_all_pieces() {
    let board = tictactoe_position! {
        X . .
        . O .
        . . X
    };
    let rendered = board.to_string();
    assert!(rendered.contains('X'));
    assert!(rendered.contains('O'));
}
