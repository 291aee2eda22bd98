pub mod ai;
pub mod player;

pub use ai::{find_best_move, AiPlayer, Difficulty};
pub use player::{GameResult, Player};
