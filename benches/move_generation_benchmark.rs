//! Benchmarks for legal move generation, with and without the check filter.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tiered_chess::board::{color::Color, Board};
use tiered_chess::chess_position;
use tiered_chess::move_generator::{all_legal_moves, legal_moves, CheckFilter};

fn benchmark_positions() -> Vec<(&'static str, Board)> {
    vec![
        ("starting", Board::starting_position()),
        (
            "tactical",
            chess_position! {
                ....r..k
                ....q...
                ........
                ........
                ........
                ........
                .....PPP
                R.....K.
            },
        ),
        (
            "middlegame",
            chess_position! {
                r...kb.r
                ppp..ppp
                ..n.bn..
                ...qp...
                ...P....
                ..N..N..
                PPP.BPPP
                R.BQK..R
            },
        ),
    ]
}

fn bench_all_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_legal_moves");
    for (name, board) in benchmark_positions() {
        for &color in &Color::ALL {
            group.bench_with_input(
                BenchmarkId::new(name, color),
                &board,
                |b, board| b.iter(|| all_legal_moves(black_box(board), color)),
            );
        }
    }
    group.finish();
}

fn bench_check_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves_check_filter");
    let board = Board::starting_position();
    for &filter in &[CheckFilter::Enabled, CheckFilter::Disabled] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", filter)),
            &filter,
            |b, &filter| {
                b.iter(|| {
                    board
                        .pieces(Color::White)
                        .map(|(position, _)| legal_moves(black_box(&board), position, filter).len())
                        .sum::<usize>()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_all_legal_moves, bench_check_filter);
criterion_main!(benches);
