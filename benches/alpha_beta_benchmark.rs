use criterion::{criterion_group, criterion_main, Criterion};
use minimax::searcher::{minimax, minimax_alpha_beta};
use minimax::tictactoe::Board;
use minimax::tictactoe_position;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("minimax full depth", |b| b.iter(search_full_depth_plain));
    c.bench_function("alpha beta full depth", |b| b.iter(search_full_depth_pruned));
    c.bench_function("alpha beta midgame", |b| b.iter(search_midgame_pruned));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn search_full_depth_plain() {
    let board = Board::new();
    assert_eq!(minimax(&board, 9, true), 0.0);
}

fn search_full_depth_pruned() {
    let board = Board::new();
    assert_eq!(
        minimax_alpha_beta(&board, 9, f64::NEG_INFINITY, f64::INFINITY, true),
        0.0
    );
}

fn search_midgame_pruned() {
    let board = tictactoe_position! {
        X . .
        . O .
        . . X
    };
    minimax_alpha_beta(&board, 9, f64::NEG_INFINITY, f64::INFINITY, false);
}
