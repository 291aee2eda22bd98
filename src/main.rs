//! Terminal front end: human (Red) against the AI (Black).
//!
//! Moves are entered as `from_row from_col to_row to_col`. Multi-jumps are
//! played one leg at a time, the same way the engine locks them.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use log::info;

use checkers_engine::agent::ai::Difficulty;
use checkers_engine::game_repr::{Board, Color, Piece, Pos, BOARD_SIZE};
use checkers_engine::orchestrator::{Notice, Orchestrator, Settings, AI_COLOR};

/// Pause between replayed AI jump legs, purely presentational.
const AI_STEP_DELAY: Duration = Duration::from_millis(600);

fn parse_difficulty(arg: &str) -> Option<Difficulty> {
    match arg {
        "beginner" => Some(Difficulty::Beginner),
        "intermediate" => Some(Difficulty::Intermediate),
        "advanced" => Some(Difficulty::Advanced),
        _ => None,
    }
}

fn piece_char(piece: Piece) -> char {
    match (piece.color, piece.king) {
        (Color::Red, false) => 'r',
        (Color::Red, true) => 'R',
        (Color::Black, false) => 'b',
        (Color::Black, true) => 'B',
    }
}

fn print_board(board: &Board) {
    println!("\n    0 1 2 3 4 5 6 7");
    for row in 0..BOARD_SIZE {
        print!("  {} ", row);
        for col in 0..BOARD_SIZE {
            match board.piece_at(Pos::new(row, col)) {
                Some(piece) => print!("{} ", piece_char(piece)),
                None => print!(". "),
            }
        }
        println!();
    }
    println!();
}

fn notice_text(notice: Notice) -> &'static str {
    match notice {
        Notice::JumpMandatory => "jump is mandatory, pick a piece that can jump",
        Notice::MustContinueJump => "you must continue jumping with the active piece",
        Notice::MustFinishChain => "you must finish your multi-jump first",
        Notice::NotYourTurn => "it is not your turn",
        Notice::NoMoveThere => "that piece cannot move there",
    }
}

/// Parse `from_row from_col to_row to_col` into two positions.
fn parse_move(line: &str) -> Option<(Pos, Pos)> {
    let mut nums = line.split_whitespace().map(|tok| tok.parse::<i8>().ok());
    let from = Pos::new(nums.next()??, nums.next()??);
    let to = Pos::new(nums.next()??, nums.next()??);
    if from.in_bounds() && to.in_bounds() {
        Some((from, to))
    } else {
        None
    }
}

fn play_ai(game: &mut Orchestrator) {
    println!("AI is thinking...");
    let Some(mv) = game.play_ai_turn() else {
        return;
    };

    if mv.sequence.len() > 1 {
        let mut current = mv.from;
        for &landing in &mv.sequence {
            println!(
                "AI jumps ({},{}) -> ({},{})",
                current.row, current.col, landing.row, landing.col
            );
            current = landing;
            thread::sleep(AI_STEP_DELAY);
        }
    } else {
        println!(
            "AI plays ({},{}) -> ({},{})",
            mv.from.row, mv.from.col, mv.to.row, mv.to.col
        );
    }
}

fn main() {
    env_logger::init();

    let difficulty = std::env::args()
        .nth(1)
        .and_then(|arg| parse_difficulty(&arg))
        .unwrap_or_default();
    info!("starting game at {} difficulty", difficulty.label());

    let mut game = Orchestrator::new(Settings {
        difficulty,
        ai_moves_first: false,
    });
    game.set_game_end_hook(Box::new(|winner, moves| {
        info!("result: {:?} in {} moves", winner, moves);
    }));

    println!("checkers: you are Red (r/R), moving up. Enter moves as: from_row from_col to_row to_col");

    let stdin = io::stdin();
    loop {
        print_board(game.board());

        if let Some(winner) = game.turn().winner {
            println!("{:?} wins after {} moves!", winner, game.move_count());
            break;
        }

        if game.turn().current_player == AI_COLOR {
            play_ai(&mut game);
            continue;
        }

        if game.turn().multi_jump_lock.is_some() {
            println!("(multi-jump in progress, keep jumping)");
        }
        print!("move> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim();
        if line == "q" || line == "quit" {
            break;
        }

        let Some((from, to)) = parse_move(line) else {
            println!("could not parse that, expected: from_row from_col to_row to_col");
            continue;
        };

        if let Err(notice) = game.attempt_move(from, to) {
            println!("{}", notice_text(notice));
        }
    }
}
