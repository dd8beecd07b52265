use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use sortpolicy::generic;
use sortpolicy::prelude::*;
use std::hint::black_box;

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Policy Dispatch");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;
    let input: Vec<i32> = (0..count).map(|_| rng.random()).collect();

    // Policy bound to the sorter type
    group.bench_function("template (AscendingSorter)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| AscendingSorter.sort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    // Policy as a trait object
    group.bench_function("strategy (&dyn Comparator)", |b| {
        let sorter = StrategySorter::new();
        b.iter_batched(
            || input.clone(),
            |mut data| sorter.sort(black_box(&mut data), &Ascending),
            BatchSize::SmallInput,
        )
    });

    // Policy as a monomorphized closure
    group.bench_function("generic (closure)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| generic::sort(black_box(&mut data), |x, y| x < y),
            BatchSize::SmallInput,
        )
    });

    // Baseline
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_direction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Runtime Direction");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;
    let input: Vec<i32> = (0..count).map(|_| rng.random_range(-1_000..1_000)).collect();

    for order in [SortOrder::Ascending, SortOrder::Descending] {
        group.bench_function(format!("SortOrder::{order:?}"), |b| {
            b.iter_batched(
                || input.clone(),
                |mut data| order.sort(black_box(&mut data)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_direction);
criterion_main!(benches);
