//! Player trait and associated types for checkers game agents.
//!
//! This module provides the core abstraction for entities that can provide
//! moves. Different player types (human, AI, replay) implement the `Player`
//! trait to participate in games run by the orchestrator.
//!
//! The trait focuses on behavior rather than construction: an AI player needs
//! a difficulty, a human player needs an input surface, so each implementation
//! provides its own constructor.
//!
//! `get_move()` is intentionally synchronous. The orchestrator calls it and
//! waits; implementations that want to compute off-thread (see `AiPlayer`)
//! hide that behind the blocking call.

use crate::game_repr::{Board, Color, Move};

/// Result of a completed checkers game.
///
/// Draws do not exist under these rules: the game ends exactly when one side
/// has no legal move, and that side loses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    RedWins,
    BlackWins,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::Red => GameResult::RedWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// The color that won
    pub fn winner(&self) -> Color {
        match self {
            GameResult::RedWins => Color::Red,
            GameResult::BlackWins => Color::Black,
        }
    }
}

/// Trait for entities that can provide checkers moves.
///
/// A player is anything that can be asked for a move in a given position:
/// a human behind a UI, an AI searching the tree, or a replay reading a
/// saved game.
///
/// Only `get_move()` must be implemented; the notification hooks have no-op
/// defaults.
pub trait Player {
    /// Request the next move from this player.
    ///
    /// May block until a move is available. Returns `None` when the player
    /// cannot produce one, which only happens when `color` has no legal
    /// moves in `board`.
    ///
    /// The returned move must be one of the legal moves for `color`;
    /// a multi-jump is returned as a single move carrying the whole chain.
    fn get_move(&mut self, board: &Board, color: Color) -> Option<Move>;

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: &Move) {}

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {}

    /// Display name, used in logs and the UI.
    fn name(&self) -> &str {
        "Player"
    }
}
