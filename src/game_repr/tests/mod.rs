use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Shorthand piece constructors for position setup.
pub fn red_man() -> Piece {
    Piece::new(Color::Red)
}

pub fn black_man() -> Piece {
    Piece::new(Color::Black)
}

pub fn red_king() -> Piece {
    Piece::king(Color::Red)
}

pub fn black_king() -> Piece {
    Piece::king(Color::Black)
}

/// Place a piece on an otherwise prepared board.
pub fn place(board: &mut Board, row: i8, col: i8, piece: Piece) {
    board.set(Pos::new(row, col), Some(piece));
}

/// Check whether a move list contains a move between two squares.
pub fn has_move(moves: &[Move], from: (i8, i8), to: (i8, i8)) -> bool {
    moves.iter().any(|m| {
        m.from == Pos::new(from.0, from.1) && m.to == Pos::new(to.0, to.1)
    })
}

/// Assert that every occupied square sits on a dark square.
pub fn assert_dark_squares_only(board: &Board) {
    for color in [Color::Red, Color::Black] {
        for (pos, _) in board.pieces(color) {
            assert_eq!(
                (pos.row + pos.col) % 2,
                1,
                "piece on light square {:?}",
                pos
            );
        }
    }
}

// ==================== TEST MODULES ====================

mod executor;
