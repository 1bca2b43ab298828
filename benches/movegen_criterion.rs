use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use chessx::game_state::board::Board;
use chessx::game_state::chess_types::Color;
use chessx::game_state::game_state::GameState;
use chessx::move_generation::legal_move_generator::LegalMoveGenerator;
use chessx::utils::algebraic::algebraic_to_square;

fn bench_all_moves_startpos(c: &mut Criterion) {
    let board = Board::standard_game();
    let generator = LegalMoveGenerator::new();
    c.bench_function("all_moves_startpos", |b| {
        b.iter(|| {
            let moves = generator.all_moves(black_box(&board), Color::White);
            assert_eq!(moves.len(), 20);
            moves
        })
    });
}

fn bench_fools_mate_playout(c: &mut Criterion) {
    let moves: Vec<((i8, i8), (i8, i8))> = [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")]
        .iter()
        .map(|&(from, to)| {
            (
                algebraic_to_square(from).expect("bench square should parse"),
                algebraic_to_square(to).expect("bench square should parse"),
            )
        })
        .collect();

    c.bench_function("fools_mate_playout", |b| {
        b.iter(|| {
            let mut state = GameState::new_game();
            for &(from, to) in &moves {
                state.select_square(from);
                state.submit_destination(to);
            }
            assert!(state.outcome.is_some());
            state
        })
    });
}

criterion_group!(benches, bench_all_moves_startpos, bench_fools_mate_playout);
criterion_main!(benches);
