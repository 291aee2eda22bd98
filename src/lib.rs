//! Checkers rules engine with a minimax AI opponent.
//!
//! The crate splits into three layers:
//! - [`game_repr`]: board, pieces, moves and legal-move generation,
//!   including mandatory captures and multi-jump chains
//! - [`agent`]: the [`agent::Player`] abstraction and the AI built on
//!   alpha-beta minimax with three difficulty tiers
//! - [`orchestrator`]: turn coordination between a human and the AI,
//!   with multi-jump turn locking and per-player timing

pub mod agent;
pub mod game_repr;
pub mod orchestrator;
