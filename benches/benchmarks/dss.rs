use criterion::{BatchSize, Criterion, criterion_group};
use digitline::{
    Point2,
    dss::{Dss4, Dss8},
};
use rand::Rng;

const STEPS: usize = 10_000;

fn random_walk(steps: [[i32; 2]; 2]) -> Vec<Point2<i32>> {
    let mut rng = rand::rng();
    let mut point = Point2::zero();

    std::iter::once(point)
        .chain((1..STEPS).map(|_| {
            point = point + steps[rng.random_range(0..steps.len())].into();
            point
        }))
        .collect()
}

pub fn greedy_segmentation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("greedy segmentation");

    group.bench_function("4-connected walk", |b| {
        b.iter_batched(
            || random_walk([[1, 0], [0, 1]]),
            |walk| {
                Dss4::greedy(&walk);
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("8-connected walk", |b| {
        b.iter_batched(
            || random_walk([[1, 0], [1, 1]]),
            |walk| {
                Dss8::greedy(&walk);
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, greedy_segmentation);
