// Position evaluation
// Scores are in abstract points (positive = good for the scored side)

use crate::game_repr::{mobility, Board, Color, Pos, BOARD_SIZE};

// Material values
pub const REGULAR_VALUE: i32 = 10;
pub const KING_VALUE: i32 = 15;

// Strategy weights
const MOBILITY_WEIGHT: i32 = 2;
const ADVANCEMENT_WEIGHT: i32 = 1;
const BACK_RANK_WEIGHT: i32 = 5;
const CENTER_CONTROL_WEIGHT: i32 = 3;
const SUPPORT_WEIGHT: i32 = 2;

// Central files, inclusive
const CENTER_MIN_COL: i8 = 2;
const CENTER_MAX_COL: i8 = 5;

/// Per-side score broken into the three tiers shown in the UI.
///
/// `total` is always the sum of the other three fields. Kings count in both
/// `material` and `power`, so a king is worth twice a man overall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub material: i32,
    pub power: i32,
    pub strategy: i32,
    pub total: i32,
}

/// Breakdown for both sides of a position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameScores {
    pub red: ScoreBreakdown,
    pub black: ScoreBreakdown,
}

impl GameScores {
    pub fn of(board: &Board) -> Self {
        Self {
            red: calculate_score(board, Color::Red),
            black: calculate_score(board, Color::Black),
        }
    }
}

/// Score `player`'s side of the position in isolation.
///
/// Three tiers:
/// - material: 10 per man, 15 per king
/// - power: 15 per king again
/// - strategy: mobility, advancement, back-rank guard, center control and
///   rear-diagonal support
///
/// Mobility counts single steps and single jumps; a multi-jump chain still
/// counts as one move per first leg.
pub fn calculate_score(board: &Board, player: Color) -> ScoreBreakdown {
    let mut material = 0;
    let mut power = 0;
    let mut strategy = mobility(board, player) * MOBILITY_WEIGHT;

    for (pos, piece) in board.pieces(player) {
        if piece.king {
            material += KING_VALUE;
            power += KING_VALUE;
        } else {
            material += REGULAR_VALUE;
        }

        if !piece.king {
            // Forward progress toward the crowning row
            let advancement = match player {
                Color::Red => (BOARD_SIZE - 1 - pos.row) as i32,
                Color::Black => pos.row as i32,
            };
            strategy += advancement * ADVANCEMENT_WEIGHT;

            // Home-row guards deny the opponent easy crownings
            if pos.row == player.home_row() {
                strategy += BACK_RANK_WEIGHT;
            }
        }

        if (CENTER_MIN_COL..=CENTER_MAX_COL).contains(&pos.col) {
            strategy += CENTER_CONTROL_WEIGHT;
        }

        // Friendly pieces on the rear diagonals cover this one against jumps
        let rear = pos.row - player.forward();
        for col in [pos.col - 1, pos.col + 1] {
            let support = Pos::new(rear, col);
            if support.in_bounds()
                && board.piece_at(support).is_some_and(|p| p.color == player)
            {
                strategy += SUPPORT_WEIGHT;
            }
        }
    }

    ScoreBreakdown {
        material,
        power,
        strategy,
        total: material + power + strategy,
    }
}

/// Full-board evaluation from `player`'s point of view.
pub fn evaluate(board: &Board, player: Color) -> i32 {
    calculate_score(board, player).total - calculate_score(board, player.opposite()).total
}
