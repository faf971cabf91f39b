//! Minimax search, plain and with alpha-beta pruning.
//!
//! # Core Algorithm
//!
//! Minimax evaluates a position by walking the game tree to a fixed depth,
//! assuming both players play optimally: the maximizing player picks the
//! child with the highest score, the minimizing player the lowest, and the
//! roles alternate every ply. Search bottoms out when the depth budget is
//! exhausted or the position is terminal, at which point the position's
//! static evaluation is taken.
//!
//! Alpha-beta pruning is an optimization of minimax that maintains a window
//! `[alpha, beta]` representing the range of scores that can still matter:
//! `alpha` is the best score the maximizing side is already guaranteed along
//! the path to the current node, `beta` the best the minimizing side is
//! guaranteed. Once `beta <= alpha`, the remaining siblings cannot affect the
//! result and are skipped. The pruned search always returns the same value as
//! plain minimax on the same tree; it only skips subtrees that provably
//! cannot change the result.
//!
//! Both searches are pure functions: no caching between calls, no shared
//! state, no move ordering. Stack usage is bounded by the search depth.

use super::Position;

/// Standard minimax, where the maximizing player plays against an opponent
/// attempting to minimize. Visits every node in the depth-bounded game tree.
///
/// Returns an evaluation of the position.
pub fn minimax<P: Position>(position: &P, depth: u8, maximizing_player: bool) -> f64 {
    if depth == 0 || position.is_terminal() {
        return position.evaluate();
    }

    if maximizing_player {
        let mut max_eval = f64::NEG_INFINITY;
        for child in position.moves() {
            let evaluation = minimax(&child, depth - 1, false);
            max_eval = max_eval.max(evaluation);
        }
        max_eval
    } else {
        let mut min_eval = f64::INFINITY;
        for child in position.moves() {
            let evaluation = minimax(&child, depth - 1, true);
            min_eval = min_eval.min(evaluation);
        }
        min_eval
    }
}

/// Minimax with alpha-beta pruning. Returns the same evaluation as
/// [`minimax`] for any position and depth, but skips siblings once the
/// `[alpha, beta]` window closes.
///
/// Top-level callers pass `alpha = f64::NEG_INFINITY` and
/// `beta = f64::INFINITY`.
pub fn minimax_alpha_beta<P: Position>(
    position: &P,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    maximizing_player: bool,
) -> f64 {
    if depth == 0 || position.is_terminal() {
        return position.evaluate();
    }

    if maximizing_player {
        let mut max_eval = f64::NEG_INFINITY;
        for child in position.moves() {
            let evaluation = minimax_alpha_beta(&child, depth - 1, alpha, beta, false);
            max_eval = max_eval.max(evaluation);
            alpha = alpha.max(evaluation);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = f64::INFINITY;
        for child in position.moves() {
            let evaluation = minimax_alpha_beta(&child, depth - 1, alpha, beta, true);
            min_eval = min_eval.min(evaluation);
            beta = beta.min(evaluation);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
