// Move ordering for the alpha-beta search

use crate::game_repr::{Board, Color, Move};

const CAPTURE_BASE: i32 = 10_000;
const CAPTURE_STEP: i32 = 100;
const PROMOTION_BONUS: i32 = 9_000;

/// Does this move crown the moving piece?
pub fn is_promotion(board: &Board, mv: &Move, color: Color) -> bool {
    board
        .piece_at(mv.from)
        .is_some_and(|piece| !piece.king && mv.to.row == color.crowning_row())
}

/// Score a single move for ordering purposes, higher = searched earlier.
///
/// Chains outrank single jumps, jumps outrank promotions, promotions outrank
/// quiet moves. Under mandatory capture a move list is either all jumps or
/// all quiet moves, so mostly this spreads chains ahead of shorter jumps.
fn score_move(board: &Board, mv: &Move, color: Color) -> i32 {
    let mut score = 0;
    if mv.is_jump() {
        score += CAPTURE_BASE + mv.captures() as i32 * CAPTURE_STEP;
    }
    if is_promotion(board, mv, color) {
        score += PROMOTION_BONUS;
    }
    score
}

/// Reorder `moves` so captures come first.
///
/// The sort is stable: moves with equal scores keep their generation order,
/// which keeps the search deterministic.
pub fn sort_captures_first(moves: &mut [Move]) {
    moves.sort_by_key(|mv| if mv.is_jump() { 0 } else { 1 });
}

/// Full ordering used at the search root.
pub fn sort_root_moves(board: &Board, moves: &mut [Move], color: Color) {
    moves.sort_by_key(|mv| -score_move(board, mv, color));
}
