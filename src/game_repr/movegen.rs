//! Legal-move generation, including mandatory captures and multi-jump
//! chains.
//!
//! The capture rule operates at two scopes. Per piece: if a piece can jump,
//! its simple moves are suppressed. Per player: if any piece can jump, only
//! jump moves are legal for the whole side. `all_moves` enforces the latter;
//! `moves_for_piece` the former.
//!
//! Jump lookup comes in two named flavors rather than a flag threaded
//! through one function: `maximal_jump_chains` expands whole chains for the
//! search, `immediate_jumps` returns only the next single hop for selection
//! hints, so a human picks one landing square at a time.

use smallvec::SmallVec;

use super::board::{Board, Pos};
use super::moves::{JumpSequence, Move};
use super::piece::{Color, Piece};

pub type MoveList = SmallVec<[Move; 16]>;

/// Non-capturing diagonal steps into empty squares.
pub fn simple_moves_for_piece(board: &Board, piece: Piece, pos: Pos) -> MoveList {
    let mut moves = MoveList::new();
    for &(d_row, d_col) in piece.directions() {
        let target = pos.offset(d_row, d_col);
        if target.in_bounds() && board.piece_at(target).is_none() {
            moves.push(Move::step(pos, target));
        }
    }
    moves
}

/// The immediate single-jump options from `pos`, without recursing into
/// continuations.
pub fn immediate_jumps(board: &Board, piece: Piece, pos: Pos) -> MoveList {
    let mut jumps = MoveList::new();
    for &(d_row, d_col) in piece.directions() {
        let landing = pos.offset(2 * d_row, 2 * d_col);
        if !landing.in_bounds() || board.piece_at(landing).is_some() {
            continue;
        }
        let mid = pos.offset(d_row, d_col);
        match board.piece_at(mid) {
            Some(other) if !other.is(piece.color) => {
                jumps.push(Move::jump(pos, landing, mid));
            }
            _ => {}
        }
    }
    jumps
}

/// Every maximal jump chain starting at `pos`, one `Move` per chain with the
/// full landing sequence. A chain terminates when no further capture is
/// available from its landing square.
pub fn maximal_jump_chains(board: &Board, piece: Piece, pos: Pos) -> MoveList {
    let mut chains = MoveList::new();
    expand_chains(
        board,
        piece,
        pos,
        pos,
        None,
        &JumpSequence::new(),
        &SmallVec::new(),
        &mut chains,
    );
    chains
}

/// Recursive chain expansion over a scratch copy of the board. Each capture
/// is simulated (victim removed, jumper relocated, never crowned mid-chain)
/// before recursing from the landing square. The visited set guards against
/// re-jumping a square captured earlier in the same chain.
#[allow(clippy::too_many_arguments)]
fn expand_chains(
    board: &Board,
    piece: Piece,
    origin: Pos,
    current: Pos,
    first_jumped: Option<Pos>,
    path: &JumpSequence,
    visited: &SmallVec<[Pos; 4]>,
    out: &mut MoveList,
) {
    let mut extended = false;

    for &(d_row, d_col) in piece.directions() {
        let landing = current.offset(2 * d_row, 2 * d_col);
        if !landing.in_bounds() || board.piece_at(landing).is_some() {
            continue;
        }
        let mid = current.offset(d_row, d_col);
        match board.piece_at(mid) {
            Some(other) if !other.is(piece.color) => {}
            _ => continue,
        }
        if visited.contains(&mid) {
            continue;
        }

        let mut scratch = board.clone();
        scratch.set(landing, Some(piece));
        scratch.set(current, None);
        scratch.set(mid, None);

        let mut next_path = path.clone();
        next_path.push(landing);
        let mut next_visited = visited.clone();
        next_visited.push(mid);

        extended = true;
        expand_chains(
            &scratch,
            piece,
            origin,
            landing,
            first_jumped.or(Some(mid)),
            &next_path,
            &next_visited,
            out,
        );
    }

    if !extended && !path.is_empty() {
        let first = first_jumped.expect("jump chain without a captured square");
        out.push(Move::chain(origin, first, path.clone()));
    }
}

/// Full-chain move set for one piece, as the search sees it. Jumps, when
/// any exist, suppress the piece's simple moves.
pub fn moves_for_piece(board: &Board, piece: Piece, pos: Pos) -> MoveList {
    let jumps = maximal_jump_chains(board, piece, pos);
    if !jumps.is_empty() {
        return jumps;
    }
    simple_moves_for_piece(board, piece, pos)
}

/// Shallow move set for one piece, as selection hints see it: only the next
/// single jump per direction, or simple steps when no jump exists.
pub fn hint_moves_for_piece(board: &Board, piece: Piece, pos: Pos) -> MoveList {
    let jumps = immediate_jumps(board, piece, pos);
    if !jumps.is_empty() {
        return jumps;
    }
    simple_moves_for_piece(board, piece, pos)
}

/// Every legal move for `player`. If any piece of this color can capture,
/// only capture moves are returned: whoever can jump, must jump, though with
/// any piece able to.
pub fn all_moves(board: &Board, player: Color) -> MoveList {
    let mut jumps = MoveList::new();
    let mut steps = MoveList::new();

    for (pos, piece) in board.pieces(player) {
        for mv in moves_for_piece(board, piece, pos) {
            if mv.is_jump() {
                jumps.push(mv);
            } else {
                steps.push(mv);
            }
        }
    }

    if !jumps.is_empty() {
        jumps
    } else {
        steps
    }
}

/// Pseudo-legal mobility: single steps plus single jumps (not chains),
/// ignoring the mandatory-capture rule. Feeds the evaluator.
pub fn mobility(board: &Board, player: Color) -> i32 {
    let mut count = 0;
    for (pos, piece) in board.pieces(player) {
        count += simple_moves_for_piece(board, piece, pos).len() as i32;
        count += immediate_jumps(board, piece, pos).len() as i32;
    }
    count
}
