//! Game lifecycle management and turn coordination.
//!
//! The [`Orchestrator`] is the root coordinator for a match: it owns the
//! board, sequences human input and AI search into alternating turns, and
//! enforces the rules the move generator cannot see from a single square,
//! like refusing to select a piece that cannot jump while another piece
//! must.
//!
//! Human input arrives as the two renderer intents `select_square` and
//! `attempt_move`; rejected intents come back as a [`Notice`] rather than an
//! error, since an illegal click is a normal part of play. The AI side of
//! the loop is driven by [`play_ai_turn`](Orchestrator::play_ai_turn), which
//! applies the chain-complete move atomically and hands it back so a caller
//! can replay the landing sequence step by step for presentation.
//!
//! Turns are strictly alternating: a "thinking" flag guards against a second
//! AI request while one is pending, and human intents are rejected with
//! [`Notice::NotYourTurn`] until the AI turn resolves.

use std::time::{Duration, Instant};

use log::info;

use crate::agent::ai::{Difficulty, GameScores};
use crate::agent::{AiPlayer, GameResult, Player};
use crate::game_repr::{
    all_moves, hint_moves_for_piece, Board, Color, Move, MoveList, Pos,
};

/// The human always plays Red, the machine Black. `ai_moves_first` only
/// changes who moves first, not who plays which color.
pub const HUMAN_COLOR: Color = Color::Red;
pub const AI_COLOR: Color = Color::Black;

/// Match configuration, immutable for the duration of one game.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub ai_moves_first: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            ai_moves_first: false,
        }
    }
}

/// Why a human intent was rejected. Surfaced to the user as a transient
/// notice, never treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A jump exists somewhere; the chosen piece or target ignores it
    JumpMandatory,
    /// Mid-chain, only the locked piece may be selected or moved
    MustContinueJump,
    /// Mid-chain, deselecting is not allowed until the chain resolves
    MustFinishChain,
    /// Input while the AI is thinking or after the game ended
    NotYourTurn,
    /// The target square is not among the selected piece's legal landings
    NoMoveThere,
}

/// Turn ownership and selection state, the only mutable state the
/// coordinator manages beyond the board itself.
#[derive(Debug, Clone)]
pub struct TurnState {
    pub current_player: Color,
    pub selected: Option<Pos>,
    pub valid_moves: MoveList,
    /// Landing square of an in-progress multi-jump; pins selection
    pub multi_jump_lock: Option<Pos>,
    pub winner: Option<Color>,
}

impl TurnState {
    fn new(starting_player: Color) -> Self {
        Self {
            current_player: starting_player,
            selected: None,
            valid_moves: MoveList::new(),
            multi_jump_lock: None,
            winner: None,
        }
    }
}

/// Read-only view for the renderer collaborator.
pub struct RenderState<'a> {
    pub board: &'a Board,
    pub selected: Option<Pos>,
    pub valid_moves: &'a [Move],
    pub last_move: Option<&'a Move>,
    pub winner: Option<Color>,
}

/// Notification hook fired once when the game ends, with the winner and the
/// number of completed turns. For statistics consumers outside the core.
pub type GameEndHook = Box<dyn FnMut(Color, u32)>;

pub struct Orchestrator {
    board: Board,
    turn: TurnState,
    settings: Settings,
    ai: Box<dyn Player>,
    thinking: bool,
    scores: GameScores,
    move_count: u32,
    last_move: Option<Move>,
    turn_start: Instant,
    red_time: Duration,
    black_time: Duration,
    game_end_hook: Option<GameEndHook>,
}

impl Orchestrator {
    pub fn new(settings: Settings) -> Self {
        Self::with_ai(settings, Box::new(AiPlayer::new(settings.difficulty)))
    }

    /// Build with a caller-supplied AI, mainly for tests and replays.
    pub fn with_ai(settings: Settings, ai: Box<dyn Player>) -> Self {
        let board = Board::initial();
        let starting_player = if settings.ai_moves_first {
            AI_COLOR
        } else {
            HUMAN_COLOR
        };
        let scores = GameScores::of(&board);

        Self {
            board,
            turn: TurnState::new(starting_player),
            settings,
            ai,
            thinking: false,
            scores,
            move_count: 0,
            last_move: None,
            turn_start: Instant::now(),
            red_time: Duration::ZERO,
            black_time: Duration::ZERO,
            game_end_hook: None,
        }
    }

    pub fn set_game_end_hook(&mut self, hook: GameEndHook) {
        self.game_end_hook = Some(hook);
    }

    /// Human intent: select (or deselect) a square.
    ///
    /// Selecting an own piece computes its shallow move hints, one landing
    /// square at a time even mid-chain. Under mandatory capture, pieces
    /// without a jump are refused. Selecting elsewhere deselects, unless a
    /// multi-jump is in progress.
    pub fn select_square(&mut self, pos: Pos) -> Result<(), Notice> {
        if self.thinking || self.turn.winner.is_some() || self.turn.current_player != HUMAN_COLOR {
            return Err(Notice::NotYourTurn);
        }

        let piece = self
            .board
            .piece_at(pos)
            .filter(|p| p.is(self.turn.current_player));

        let Some(piece) = piece else {
            if self.turn.multi_jump_lock.is_some() {
                return Err(Notice::MustFinishChain);
            }
            self.turn.selected = None;
            self.turn.valid_moves.clear();
            return Ok(());
        };

        if let Some(lock) = self.turn.multi_jump_lock {
            if lock != pos {
                return Err(Notice::MustContinueJump);
            }
        }

        let must_jump = all_moves(&self.board, self.turn.current_player)
            .iter()
            .any(Move::is_jump);

        let mut moves = hint_moves_for_piece(&self.board, piece, pos);
        if must_jump {
            moves.retain(|mv| mv.is_jump());
            if moves.is_empty() {
                return Err(Notice::JumpMandatory);
            }
        }

        self.turn.selected = Some(pos);
        self.turn.valid_moves = moves;
        Ok(())
    }

    /// Human intent: move the piece on `from` to `to`.
    ///
    /// Goes through the same selection gate as `select_square`, so the
    /// filtered move list stays authoritative. Mid-chain this applies one
    /// jump leg at a time; when further captures exist from the landing
    /// square the turn is retained and selection pinned there. A leg that
    /// promotes ends the turn immediately.
    pub fn attempt_move(&mut self, from: Pos, to: Pos) -> Result<(), Notice> {
        self.select_square(from)?;
        if self.turn.selected != Some(from) {
            return Err(Notice::NoMoveThere);
        }

        let mv = self
            .turn
            .valid_moves
            .iter()
            .find(|mv| mv.to == to)
            .cloned()
            .ok_or(Notice::NoMoveThere)?;

        self.apply_human_move(mv);
        Ok(())
    }

    fn apply_human_move(&mut self, mv: Move) {
        let was_king = self
            .board
            .piece_at(mv.from)
            .map(|p| p.king)
            .unwrap_or(false);

        self.board = self.board.apply_move(&mv);
        self.scores = GameScores::of(&self.board);

        let promoted = !was_king
            && self
                .board
                .piece_at(mv.to)
                .map(|p| p.king)
                .unwrap_or(false);

        // Crowning ends the turn even when another capture would be
        // geometrically available from the new square
        if mv.is_jump() && !promoted {
            let piece = self
                .board
                .piece_at(mv.to)
                .expect("moved piece missing from landing square");
            let mut follow_ups = hint_moves_for_piece(&self.board, piece, mv.to);
            follow_ups.retain(|m| m.is_jump());

            if !follow_ups.is_empty() {
                self.turn.multi_jump_lock = Some(mv.to);
                self.turn.selected = Some(mv.to);
                self.turn.valid_moves = follow_ups;
                self.last_move = Some(mv);
                return;
            }
        }

        self.last_move = Some(mv);
        self.finish_turn();
    }

    /// Run one AI turn to completion.
    ///
    /// Returns the applied chain-complete move so the caller can replay its
    /// landing sequence with delays. Returns `None` without acting when it
    /// is not the AI's turn, a search is already pending, or the game is
    /// over. An AI with no legal moves loses on the spot.
    pub fn play_ai_turn(&mut self) -> Option<Move> {
        if self.thinking || self.turn.winner.is_some() || self.turn.current_player != AI_COLOR {
            return None;
        }

        self.thinking = true;
        let chosen = self.ai.get_move(&self.board, AI_COLOR);
        self.thinking = false;

        match chosen {
            Some(mv) => {
                self.board = self.board.apply_move(&mv);
                self.scores = GameScores::of(&self.board);
                self.last_move = Some(mv.clone());
                self.finish_turn();
                Some(mv)
            }
            None => {
                self.declare_winner(HUMAN_COLOR);
                None
            }
        }
    }

    /// Close out the current player's turn: timing, terminal check, handover.
    fn finish_turn(&mut self) {
        let elapsed = self.turn_start.elapsed();
        match self.turn.current_player {
            Color::Red => self.red_time += elapsed,
            Color::Black => self.black_time += elapsed,
        }

        self.move_count += 1;
        self.turn.selected = None;
        self.turn.valid_moves.clear();
        self.turn.multi_jump_lock = None;

        if let Some(winner) = self.board.check_game_over() {
            self.declare_winner(winner);
            return;
        }

        self.turn.current_player = self.turn.current_player.opposite();
        self.turn_start = Instant::now();
    }

    fn declare_winner(&mut self, winner: Color) {
        self.turn.winner = Some(winner);
        info!("game over: {:?} wins after {} moves", winner, self.move_count);

        self.ai.game_ended(GameResult::from_winner(winner));
        if let Some(hook) = &mut self.game_end_hook {
            hook(winner, self.move_count);
        }
    }

    /// Reset to the starting position, keeping settings and hooks.
    pub fn restart(&mut self) {
        self.board = Board::initial();
        let starting_player = if self.settings.ai_moves_first {
            AI_COLOR
        } else {
            HUMAN_COLOR
        };
        self.turn = TurnState::new(starting_player);
        self.scores = GameScores::of(&self.board);
        self.move_count = 0;
        self.last_move = None;
        self.turn_start = Instant::now();
        self.red_time = Duration::ZERO;
        self.black_time = Duration::ZERO;
    }

    pub fn render_state(&self) -> RenderState<'_> {
        RenderState {
            board: &self.board,
            selected: self.turn.selected,
            valid_moves: &self.turn.valid_moves,
            last_move: self.last_move.as_ref(),
            winner: self.turn.winner,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn scores(&self) -> GameScores {
        self.scores
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    pub fn elapsed_time(&self, color: Color) -> Duration {
        match color {
            Color::Red => self.red_time,
            Color::Black => self.black_time,
        }
    }
}
