use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mineboard_core::*;

fn generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, rows, cols) in [("beginner", 9, 9), ("expert", 16, 30), ("max", 255, 255)] {
        let config = GameConfig::new(rows, cols).unwrap();
        let mut seed = 0;
        group.bench_function(name, |b| {
            b.iter(|| {
                seed += 1;
                black_box(Board::generate(black_box(config), seed))
            })
        });
    }
    group.finish();
}

fn cascade(c: &mut Criterion) {
    let layout = MineLayout::from_mine_coords((255, 255), &[(254, 254)]).unwrap();
    let board = Board::from_layout(layout);

    c.bench_function("cascade/open_255x255", |b| {
        b.iter_batched(
            || board.clone(),
            |mut board| black_box(board.reveal((0, 0))),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, generation, cascade);
criterion_main!(benches);
