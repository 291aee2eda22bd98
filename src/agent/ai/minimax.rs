// Fixed-depth minimax with alpha-beta pruning

use super::evaluation::evaluate;
use super::move_ordering::sort_captures_first;
use crate::game_repr::{all_moves, Board, Color};

/// Score assigned to a won position. Larger than any evaluation the scoring
/// tiers can produce, so a forced win always dominates.
pub const TERMINAL_SCORE: i32 = 10_000;

/// Search `board` to `depth` plies and return its score from `root_player`'s
/// point of view.
///
/// `maximizing` tells whose turn it is in this hypothetical future: the root
/// player's when true, the opponent's when false. A side to move with no
/// legal moves has lost, which surfaces as `-TERMINAL_SCORE` on the root
/// player's turns and `TERMINAL_SCORE` on the opponent's.
pub fn minimax(
    board: &Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    root_player: Color,
) -> i32 {
    if depth == 0 {
        return evaluate(board, root_player);
    }

    let current = if maximizing {
        root_player
    } else {
        root_player.opposite()
    };

    let mut moves = all_moves(board, current);
    if moves.is_empty() {
        return if maximizing {
            -TERMINAL_SCORE
        } else {
            TERMINAL_SCORE
        };
    }

    // Captures first tightens the window early and prunes harder
    sort_captures_first(&mut moves);

    if maximizing {
        let mut best = i32::MIN;
        for mv in &moves {
            let score = minimax(&board.apply_move(mv), depth - 1, alpha, beta, false, root_player);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in &moves {
            let score = minimax(&board.apply_move(mv), depth - 1, alpha, beta, true, root_player);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
