use criterion::{BatchSize, Criterion, criterion_group};
use digitline::volumetric::{
    Chessboard, DistanceTransformation, Domain, Image, Manhattan, SquaredEuclidean,
};
use rand::Rng;

const SIDE: i64 = 256;
const SEEDS: usize = 64;

fn random_seeds() -> Image<u8, 2> {
    let mut rng = rand::rng();

    let domain = Domain::new([0, 0], [SIDE - 1, SIDE - 1]).unwrap();

    let mut image = Image::filled(domain, 1);
    (0..SEEDS).for_each(|_| {
        let point = [rng.random_range(0..SIDE), rng.random_range(0..SIDE)].into();
        image.set(&point, 0).unwrap();
    });

    image
}

pub fn large_images(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("large images");

    group.bench_function("chessboard", |b| {
        b.iter_batched(
            random_seeds,
            |image| {
                DistanceTransformation::new(Chessboard).compute(&image);
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("manhattan", |b| {
        b.iter_batched(
            random_seeds,
            |image| {
                DistanceTransformation::new(Manhattan).compute(&image);
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("squared euclidean", |b| {
        b.iter_batched(
            random_seeds,
            |image| {
                DistanceTransformation::new(SquaredEuclidean).compute(&image);
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, large_images);
