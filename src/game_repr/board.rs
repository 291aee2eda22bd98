//! The 8x8 board and the operations that change it.
//!
//! Boards are values: `apply_move` returns a fresh board and never edits in
//! place, so a caller can keep the previous position around for animation or
//! history without any aliasing concerns.

use super::movegen;
use super::moves::Move;
use super::piece::{Color, Piece};

pub const BOARD_SIZE: i8 = 8;

/// A square coordinate. Valid iff both components are in `[0, 8)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i8,
    pub col: i8,
}

impl Pos {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    pub fn offset(&self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// The square halfway between `self` and `other`. Only meaningful for
    /// jump legs, which are exactly two squares apart on both axes.
    pub fn midpoint(&self, other: &Pos) -> Self {
        Self {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            grid: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Standard starting position: Black men on the dark squares of rows
    /// 0-2, Red men on the dark squares of rows 5-7.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if (row + col) % 2 != 1 {
                    continue;
                }
                if row < 3 {
                    board.set(Pos::new(row, col), Some(Piece::new(Color::Black)));
                } else if row > 4 {
                    board.set(Pos::new(row, col), Some(Piece::new(Color::Red)));
                }
            }
        }
        board
    }

    /// The piece on `pos`, if any. Out-of-range coordinates are a caller
    /// bug and fail fast rather than read as empty.
    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        assert!(pos.in_bounds(), "piece_at out of bounds: {:?}", pos);
        self.grid[pos.row as usize][pos.col as usize]
    }

    pub(crate) fn set(&mut self, pos: Pos, piece: Option<Piece>) {
        assert!(pos.in_bounds(), "set out of bounds: {:?}", pos);
        debug_assert!(
            piece.is_none() || (pos.row + pos.col) % 2 == 1,
            "piece placed on a light square: {:?}",
            pos
        );
        self.grid[pos.row as usize][pos.col as usize] = piece;
    }

    /// All of `color`'s pieces with their squares, row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Pos::new(row, col)))
            .filter_map(move |pos| {
                self.piece_at(pos)
                    .filter(|piece| piece.is(color))
                    .map(|piece| (pos, piece))
            })
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    /// Apply a move, returning the resulting board. Handles simple steps,
    /// single jumps, and full jump chains.
    ///
    /// Promotion is evaluated once against the final landing square: a chain
    /// that merely passes through the back row does not crown the piece.
    pub fn apply_move(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        let mut piece = next
            .piece_at(mv.from)
            .expect("apply_move: origin square is empty");

        if !mv.sequence.is_empty() {
            let mut current = mv.from;
            for &landing in &mv.sequence {
                let captured = current.midpoint(&landing);
                next.set(captured, None);
                next.set(landing, Some(piece));
                next.set(current, None);
                current = landing;
            }
        } else {
            next.set(mv.to, Some(piece));
            next.set(mv.from, None);
            if let Some(captured) = mv.jumped {
                next.set(captured, None);
            }
        }

        if !piece.king && mv.to.row == piece.color.crowning_row() {
            piece.king = true;
            next.set(mv.to, Some(piece));
        }

        next
    }

    /// Terminal detection: a side with no legal move has lost. Sides are
    /// checked in a fixed order; a position where both are simultaneously
    /// blocked cannot arise under these movement rules.
    pub fn check_game_over(&self) -> Option<Color> {
        if movegen::all_moves(self, Color::Red).is_empty() {
            return Some(Color::Black);
        }
        if movegen::all_moves(self, Color::Black).is_empty() {
            return Some(Color::Red);
        }
        None
    }
}
