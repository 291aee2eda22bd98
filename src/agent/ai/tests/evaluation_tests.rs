use super::*;
use crate::agent::ai::evaluation::{calculate_score, evaluate, GameScores};

#[test]
fn test_initial_position_is_symmetric() {
    let scores = GameScores::of(&Board::initial());
    assert_eq!(scores.red, scores.black);
    assert_eq!(evaluate(&Board::initial(), Color::Red), 0);
    assert_eq!(evaluate(&Board::initial(), Color::Black), 0);
}

#[test]
fn test_initial_breakdown_values() {
    // 12 men: material 120. Strategy: 7 moves * 2 mobility, advancement
    // 0+1+2 per file pair, 4 back-rank guards, 6 central pieces, 14
    // rear-diagonal contacts.
    let scores = GameScores::of(&Board::initial());
    assert_eq!(scores.red.material, 120);
    assert_eq!(scores.red.power, 0);
    assert_eq!(scores.red.strategy, 92);
    assert_eq!(scores.red.total, 212);
}

#[test]
fn test_king_counts_in_material_and_power() {
    let mut board = Board::empty();
    place(&mut board, 4, 1, red_king());

    let score = calculate_score(&board, Color::Red);
    assert_eq!(score.material, 15);
    assert_eq!(score.power, 15);
    // 4 open steps, no advancement or back-rank credit for kings
    assert_eq!(score.strategy, 8);
    assert_eq!(score.total, 38);
}

#[test]
fn test_man_has_no_power() {
    let mut board = Board::empty();
    place(&mut board, 4, 1, red_man());

    let score = calculate_score(&board, Color::Red);
    assert_eq!(score.material, 10);
    assert_eq!(score.power, 0);
    // 2 steps * 2 + advancement 3
    assert_eq!(score.strategy, 7);
}

#[test]
fn test_advanced_man_outscores_home_man() {
    let mut near = Board::empty();
    place(&mut near, 1, 2, red_man());
    let mut far = Board::empty();
    place(&mut far, 5, 2, red_man());

    let near_score = calculate_score(&near, Color::Red);
    let far_score = calculate_score(&far, Color::Red);
    assert_eq!(near_score.total, 23);
    assert_eq!(far_score.total, 19);
    assert!(near_score.strategy > far_score.strategy);
}

#[test]
fn test_back_rank_guard_bonus() {
    let mut board = Board::empty();
    place(&mut board, 7, 2, red_man());

    // 2 steps * 2 + back rank 5 + center 3
    assert_eq!(calculate_score(&board, Color::Red).strategy, 12);
}

#[test]
fn test_rear_diagonal_support() {
    let mut board = Board::empty();
    place(&mut board, 5, 2, red_man());
    place(&mut board, 6, 1, red_man());

    // Mobility 3 * 2 + advancement 3 + center 3 + one support contact 2.
    // The supporter blocks one of its own steps in the process.
    let score = calculate_score(&board, Color::Red);
    assert_eq!(score.strategy, 14);
    assert_eq!(score.total, 34);
}

#[test]
fn test_mobility_counts_chain_as_one_jump() {
    // The double jump from (5,4) is one mobility entry, not two.
    let mut board = Board::empty();
    place(&mut board, 5, 4, red_man());
    place(&mut board, 4, 3, black_man());
    place(&mut board, 2, 1, black_man());

    let score = calculate_score(&board, Color::Red);
    // 1 step + 1 jump = mobility 4, advancement 2, center 3
    assert_eq!(score.strategy, 9);
    assert_eq!(score.total, 19);
}

#[test]
fn test_evaluate_is_antisymmetric() {
    let mut board = Board::empty();
    place(&mut board, 5, 4, red_man());
    place(&mut board, 5, 0, red_man());
    place(&mut board, 2, 3, black_man());

    assert_eq!(
        evaluate(&board, Color::Red),
        -evaluate(&board, Color::Black)
    );
    assert!(evaluate(&board, Color::Red) > 0);
}
