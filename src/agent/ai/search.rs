// Root move selection for the three difficulty tiers

use std::time::{Duration, Instant};

use log::debug;
use rand::seq::SliceRandom;

use super::minimax::minimax;
use super::move_ordering::sort_root_moves;
use crate::game_repr::{all_moves, Board, Color, Move, MoveList};

/// Nominal search depth for the strongest tier. The root ply counts as one,
/// so each branch is searched `MINIMAX_DEPTH - 1` plies deep.
pub const MINIMAX_DEPTH: u32 = 6;

/// If a single root branch takes longer than this, the position is too busy
/// for the host we are on. Remaining branches get searched one ply shallower.
const BRANCH_LATENCY_BUDGET: Duration = Duration::from_millis(200);

/// Depth reduction never goes below this
const MIN_SEARCH_DEPTH: u32 = 3;

/// Playing strength of the AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Picks a uniformly random legal move
    Beginner,
    /// One-ply lookahead per candidate move
    #[default]
    Intermediate,
    /// Full alpha-beta search with adaptive depth
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// Pick a move for `player` at the given difficulty.
///
/// Returns `None` only when `player` has no legal moves. Ties between
/// equally scored candidates resolve to the earlier one in the ordered
/// list, so the search is deterministic above Beginner.
pub fn find_best_move(board: &Board, player: Color, difficulty: Difficulty) -> Option<Move> {
    let moves = all_moves(board, player);
    if moves.is_empty() {
        return None;
    }

    let chosen = match difficulty {
        Difficulty::Beginner => moves.choose(&mut rand::thread_rng()).cloned(),
        Difficulty::Intermediate => pick_shallow(board, player, &moves),
        Difficulty::Advanced => pick_deep(board, player, moves),
    };

    // The tiers only return None on an empty list, but a fallback to the
    // first legal move keeps that a local invariant rather than a global one.
    chosen.or_else(|| all_moves(board, player).first().cloned())
}

/// Intermediate: score each candidate with a single reply ply.
fn pick_shallow(board: &Board, player: Color, moves: &[Move]) -> Option<Move> {
    let mut best: Option<&Move> = None;
    let mut best_score = i32::MIN;

    for mv in moves {
        let score = minimax(&board.apply_move(mv), 1, i32::MIN, i32::MAX, false, player);
        if score > best_score {
            best_score = score;
            best = Some(mv);
        }
    }

    best.cloned()
}

/// Advanced: full-width alpha-beta per branch with a latency governor.
fn pick_deep(board: &Board, player: Color, mut moves: MoveList) -> Option<Move> {
    sort_root_moves(board, &mut moves, player);

    let mut best: Option<&Move> = None;
    let mut best_score = i32::MIN;
    let mut depth = MINIMAX_DEPTH - 1;

    for mv in &moves {
        let start = Instant::now();
        let score = minimax(&board.apply_move(mv), depth, i32::MIN, i32::MAX, false, player);

        if start.elapsed() > BRANCH_LATENCY_BUDGET && depth > MIN_SEARCH_DEPTH {
            depth -= 1;
            debug!(
                "slow branch ({:?}), reducing remaining search depth to {}",
                start.elapsed(),
                depth
            );
        }

        if score > best_score {
            best_score = score;
            best = Some(mv);
        }
    }

    best.cloned()
}
