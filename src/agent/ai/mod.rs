pub mod ai_player;
pub mod evaluation;
pub mod minimax;
pub mod move_ordering;
pub mod search;

#[cfg(test)]
mod tests;

pub use ai_player::AiPlayer;
pub use evaluation::{calculate_score, evaluate, GameScores, ScoreBreakdown};
pub use search::{find_best_move, Difficulty, MINIMAX_DEPTH};
