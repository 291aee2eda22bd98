use smallvec::SmallVec;

use super::board::Pos;

/// Landing squares of a jump chain, in order. Most chains are short; four
/// inline slots cover anything that comes up in real play.
pub type JumpSequence = SmallVec<[Pos; 4]>;

/// A single turn's worth of movement: one diagonal step, one jump, or a
/// whole multi-jump chain.
///
/// Invariants:
/// - `jumped.is_some()` exactly when the move captures at least one piece.
/// - For jumps, `sequence` holds every landing square in order and `to`
///   equals its last element. A shallow single jump carries a one-element
///   sequence; a simple step carries an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
    /// First captured square. Enough on its own to execute a single jump.
    pub jumped: Option<Pos>,
    pub sequence: JumpSequence,
}

impl Move {
    /// A non-capturing diagonal step.
    pub fn step(from: Pos, to: Pos) -> Self {
        Self {
            from,
            to,
            jumped: None,
            sequence: JumpSequence::new(),
        }
    }

    /// A single jump over `jumped`, landing on `to`.
    pub fn jump(from: Pos, to: Pos, jumped: Pos) -> Self {
        let mut sequence = JumpSequence::new();
        sequence.push(to);
        Self {
            from,
            to,
            jumped: Some(jumped),
            sequence,
        }
    }

    /// A full jump chain. `sequence` must be non-empty; `first_jumped` is
    /// the square captured by the first leg.
    pub fn chain(from: Pos, first_jumped: Pos, sequence: JumpSequence) -> Self {
        debug_assert!(!sequence.is_empty());
        Self {
            from,
            to: *sequence.last().expect("chain move with empty sequence"),
            jumped: Some(first_jumped),
            sequence,
        }
    }

    pub fn is_jump(&self) -> bool {
        self.jumped.is_some()
    }

    /// Number of pieces this move captures.
    pub fn captures(&self) -> usize {
        if self.is_jump() {
            self.sequence.len().max(1)
        } else {
            0
        }
    }
}
