use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use gambit_core::perft::STARTING_POSITION;
use gambit_core::{all_legal_moves, apply_move, perft, Board, Color, Square};

/// An open middlegame reached from the starting position.
const OPENING: &[(&str, &str)] = &[
    ("e2", "e4"),
    ("e7", "e5"),
    ("g1", "f3"),
    ("b8", "c6"),
    ("f1", "c4"),
    ("f8", "c5"),
    ("d2", "d3"),
    ("g8", "f6"),
];

fn square(name: &str) -> Square {
    name.parse().expect("benchmark square should parse")
}

fn opening_board() -> Board {
    let mut board = Board::new();
    for &(from, to) in OPENING {
        apply_move(&mut board, square(from), square(to)).expect("opening move should apply");
    }
    board
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for (name, board) in [("start", Board::new()), ("opening", opening_board())] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &board, |b, board| {
            let mut board = board.clone();
            b.iter(|| black_box(all_legal_moves(black_box(&mut board), Color::White).len()));
        });
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_start");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    let board = Board::new();
    for &(depth, expected) in &STARTING_POSITION[..3] {
        // Correctness guard before benchmarking.
        assert_eq!(
            perft(&board, Color::White, depth),
            expected,
            "node mismatch at depth {}",
            depth
        );

        group.throughput(Throughput::Elements(expected));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(perft(black_box(&board), Color::White, depth)));
        });
    }

    group.finish();
}

criterion_group!(move_gen_benches, bench_legal_moves, bench_perft);
criterion_main!(move_gen_benches);
