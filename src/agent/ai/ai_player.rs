//! AI-controlled player.
//!
//! Wraps [`find_best_move`] in the [`Player`] trait and runs the search on a
//! worker thread so a deep search cannot wedge the caller. The blocking
//! `get_move()` contract is kept: the caller waits on a channel with a
//! timeout, and if the worker overruns it the search is redone inline at the
//! same difficulty as a fallback.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use log::{debug, warn};

use super::search::{find_best_move, Difficulty};
use crate::agent::player::{GameResult, Player};
use crate::game_repr::{Board, Color, Move};

/// How long to wait for the search worker before falling back to a
/// synchronous search.
const SEARCH_TIMEOUT: Duration = Duration::from_secs(5);

pub struct AiPlayer {
    difficulty: Difficulty,
    name: String,
    timeout: Duration,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            name: format!("AI ({})", difficulty.label()),
            timeout: SEARCH_TIMEOUT,
        }
    }

    /// Override the worker timeout, mainly for tests.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Player for AiPlayer {
    fn get_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let worker_board = board.clone();
        let difficulty = self.difficulty;
        let (tx, rx) = mpsc::channel();

        let spawned = thread::Builder::new()
            .name("checkers-search".into())
            .spawn(move || {
                // The receiver may have given up on us; a closed channel
                // just means the result is discarded.
                let _ = tx.send(find_best_move(&worker_board, color, difficulty));
            });

        match spawned {
            Ok(_) => match rx.recv_timeout(self.timeout) {
                Ok(mv) => {
                    debug!("{} picked {:?}", self.name, mv);
                    mv
                }
                Err(err) => {
                    warn!(
                        "search worker unavailable ({}), searching inline",
                        err
                    );
                    find_best_move(board, color, difficulty)
                }
            },
            Err(err) => {
                warn!("could not spawn search worker ({}), searching inline", err);
                find_best_move(board, color, difficulty)
            }
        }
    }

    fn game_ended(&mut self, result: GameResult) {
        debug!("{}: game over, {:?}", self.name, result);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
