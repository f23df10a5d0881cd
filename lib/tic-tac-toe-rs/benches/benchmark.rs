use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
};
use std::time::Duration;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("best move empty board", |b| {
        b.iter(|| {
            let mut board = black_box(tic_tac_toe::Board::new());
            tic_tac_toe::best_move(&mut board)
        })
    });

    c.bench_function("evaluate after corner", |b| {
        let board: tic_tac_toe::Board = "X__ ___ ___".parse().expect("invalid board");
        b.iter(|| {
            let mut board = black_box(board);
            tic_tac_toe::evaluate(&mut board, true)
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = criterion_benchmark
}
criterion_main!(benches);
