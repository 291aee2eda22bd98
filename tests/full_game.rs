//! Full-game integration tests driving the search layer directly.
//!
//! These play whole games move by move and check the rules invariants the
//! unit tests can only probe locally: dark squares only, monotone piece
//! counts, jump-only move lists, and a terminal verdict consistent with the
//! move generator.

use checkers_engine::agent::ai::{find_best_move, Difficulty};
use checkers_engine::game_repr::{all_moves, Board, Color, Pos, BOARD_SIZE};

const PLY_CAP: usize = 300;

fn assert_board_invariants(board: &Board) {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Pos::new(row, col);
            if board.piece_at(pos).is_some() {
                assert_eq!((row + col) % 2, 1, "piece on light square {:?}", pos);
            }
        }
    }
}

#[test]
fn test_ai_vs_ai_game_preserves_invariants() {
    let mut board = Board::initial();
    let mut player = Color::Red;
    let mut red_count = board.piece_count(Color::Red);
    let mut black_count = board.piece_count(Color::Black);

    for _ in 0..PLY_CAP {
        let legal = all_moves(&board, player);
        if legal.is_empty() {
            assert_eq!(board.check_game_over(), Some(player.opposite()));
            return;
        }
        if legal.iter().any(|mv| mv.is_jump()) {
            assert!(legal.iter().all(|mv| mv.is_jump()), "mixed move list");
        }

        let mv = find_best_move(&board, player, Difficulty::Intermediate)
            .expect("non-empty move list must yield a move");
        assert!(legal.contains(&mv), "search returned an illegal move");

        board = board.apply_move(&mv);
        assert_board_invariants(&board);

        let new_red = board.piece_count(Color::Red);
        let new_black = board.piece_count(Color::Black);
        assert!(new_red <= red_count && new_black <= black_count);
        red_count = new_red;
        black_count = new_black;

        player = player.opposite();
    }
}

#[test]
fn test_mandatory_captures_thin_the_board() {
    // Men can only advance, so two deterministic players must collide and
    // the capture rule must fire well before the ply cap.
    let mut board = Board::initial();
    let mut player = Color::Red;

    for _ in 0..PLY_CAP {
        let Some(mv) = find_best_move(&board, player, Difficulty::Intermediate) else {
            break;
        };
        board = board.apply_move(&mv);
        player = player.opposite();

        if board.piece_count(Color::Red) + board.piece_count(Color::Black) < 24 {
            return;
        }
    }
    panic!("no capture occurred in {} plies", PLY_CAP);
}

#[test]
fn test_advanced_tier_plays_from_the_opening() {
    let board = Board::initial();
    let mv = find_best_move(&board, Color::Black, Difficulty::Advanced)
        .expect("opening position has moves");
    assert!(all_moves(&board, Color::Black).contains(&mv));
}

#[test]
fn test_advanced_does_not_trail_random_play() {
    // Not a guaranteed win in 80 plies, but the searching side should never
    // end the stretch behind on material against random play.
    let mut board = Board::initial();
    let mut player = Color::Red;

    for _ in 0..80 {
        let difficulty = match player {
            Color::Red => Difficulty::Advanced,
            Color::Black => Difficulty::Beginner,
        };
        let Some(mv) = find_best_move(&board, player, difficulty) else {
            break;
        };
        board = board.apply_move(&mv);
        player = player.opposite();
    }

    if board.check_game_over() == Some(Color::Red) {
        return;
    }
    assert!(board.piece_count(Color::Red) >= board.piece_count(Color::Black));
}
