use super::*;

#[test]
fn test_simple_move_relocates_piece() {
    let mut board = Board::empty();
    place(&mut board, 5, 2, red_man());

    let mv = Move::step(Pos::new(5, 2), Pos::new(4, 3));
    let next = board.apply_move(&mv);

    assert!(next.piece_at(Pos::new(5, 2)).is_none());
    assert_eq!(next.piece_at(Pos::new(4, 3)), Some(red_man()));
}

#[test]
fn test_single_jump_removes_victim() {
    let mut board = Board::empty();
    place(&mut board, 5, 4, red_man());
    place(&mut board, 4, 3, black_man());

    let mv = Move::jump(Pos::new(5, 4), Pos::new(3, 2), Pos::new(4, 3));
    let next = board.apply_move(&mv);

    assert!(next.piece_at(Pos::new(5, 4)).is_none());
    assert!(next.piece_at(Pos::new(4, 3)).is_none());
    assert_eq!(next.piece_at(Pos::new(3, 2)), Some(red_man()));
    assert_eq!(next.piece_count(Color::Black), 0);
}

#[test]
fn test_chain_walks_every_leg() {
    let mut board = Board::empty();
    place(&mut board, 5, 4, red_man());
    place(&mut board, 4, 3, black_man());
    place(&mut board, 2, 1, black_man());

    let chain = &maximal_jump_chains(&board, red_man(), Pos::new(5, 4))[0];
    let next = board.apply_move(chain);

    assert!(next.piece_at(Pos::new(5, 4)).is_none());
    assert!(next.piece_at(Pos::new(4, 3)).is_none(), "first victim gone");
    assert!(next.piece_at(Pos::new(3, 2)).is_none(), "intermediate square vacated");
    assert!(next.piece_at(Pos::new(2, 1)).is_none(), "second victim gone");
    assert_eq!(next.piece_at(Pos::new(1, 0)), Some(red_man()));
    assert_eq!(next.piece_count(Color::Black), 0);
}

#[test]
fn test_apply_move_leaves_original_untouched() {
    let board = {
        let mut b = Board::empty();
        place(&mut b, 5, 4, red_man());
        place(&mut b, 4, 3, black_man());
        b
    };
    let snapshot = board.clone();

    let mv = Move::jump(Pos::new(5, 4), Pos::new(3, 2), Pos::new(4, 3));
    let _ = board.apply_move(&mv);

    assert_eq!(board, snapshot, "boards are immutable values");
}

#[test]
fn test_generated_moves_round_trip() {
    // Every move the generator produces must land the piece on its final
    // square with all jump-leg midpoints cleared.
    let mut board = Board::empty();
    place(&mut board, 5, 4, red_man());
    place(&mut board, 4, 3, black_man());
    place(&mut board, 2, 1, black_man());
    place(&mut board, 5, 0, red_man());

    for mv in all_moves(&board, Color::Red) {
        let next = board.apply_move(&mv);
        assert!(next.piece_at(mv.to).is_some());
        assert!(next.piece_at(mv.from).is_none());

        let mut current = mv.from;
        for &landing in &mv.sequence {
            assert!(next.piece_at(current.midpoint(&landing)).is_none());
            current = landing;
        }
    }
}
