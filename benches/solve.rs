//! Solver benchmarks: full-tree search cost for both state disciplines.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_minimax::games::nim;
use rust_minimax::games::tictactoe::{best_move, solve};
use rust_minimax::{Board, Marker};

fn bench_tictactoe(c: &mut Criterion) {
    let opening: Board = "x   o    ".parse().unwrap();

    c.bench_function("tictactoe/functional/opening", |b| {
        b.iter(|| solve(black_box(&opening), Marker::X))
    });

    c.bench_function("tictactoe/in_place/opening", |b| {
        b.iter(|| best_move(black_box(&opening), Marker::X))
    });

    c.bench_function("tictactoe/functional/empty", |b| {
        b.iter(|| solve(black_box(&Board::empty()), Marker::O))
    });
}

fn bench_nim(c: &mut Criterion) {
    c.bench_function("nim/pile_13", |b| {
        b.iter(|| nim::solve(black_box(nim::STARTING_PILE), 1))
    });
}

criterion_group!(benches, bench_tictactoe, bench_nim);
criterion_main!(benches);
