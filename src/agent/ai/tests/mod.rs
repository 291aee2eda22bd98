use crate::game_repr::{Board, Color, Piece, Pos};

mod evaluation_tests;

fn red_man() -> Piece {
    Piece::new(Color::Red)
}

fn black_man() -> Piece {
    Piece::new(Color::Black)
}

fn red_king() -> Piece {
    Piece::king(Color::Red)
}

fn place(board: &mut Board, row: i8, col: i8, piece: Piece) {
    board.set(Pos::new(row, col), Some(piece));
}
