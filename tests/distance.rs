use digitline::{
    Error, Point,
    volumetric::{
        Chessboard, DistanceTransformation, Domain, Exponent, Image, Manhattan, Metric,
        SquaredEuclidean,
    },
};
use rand::Rng;

fn chessboard<const N: usize>(a: &Point<i64, N>, b: &Point<i64, N>) -> u64 {
    (0..N).map(|axis| a[axis].abs_diff(b[axis])).max().unwrap_or(0)
}

fn manhattan<const N: usize>(a: &Point<i64, N>, b: &Point<i64, N>) -> u64 {
    (0..N).map(|axis| a[axis].abs_diff(b[axis])).sum()
}

fn squared_euclidean<const N: usize>(a: &Point<i64, N>, b: &Point<i64, N>) -> u64 {
    (0..N).map(|axis| a[axis].abs_diff(b[axis]).pow(2)).sum()
}

/// Returns the distance from every point of the image to its closest zero valued point.
fn brute_force<const N: usize>(
    image: &Image<u32, N>,
    distance: fn(&Point<i64, N>, &Point<i64, N>) -> u64,
) -> Vec<u64> {
    let background: Vec<Point<i64, N>> = image
        .iter()
        .filter(|(_, value)| **value == 0)
        .map(|(point, _)| point)
        .collect();

    image
        .domain()
        .iter()
        .map(|point| {
            background
                .iter()
                .map(|closest| distance(&point, closest))
                .min()
                .unwrap_or(u64::MAX)
        })
        .collect()
}

/// Compares the transformation of the given image with the brute force distances, for every
/// metric.
fn check<const N: usize>(name: &str, image: &Image<u32, N>) {
    fn compare<M: Metric, const N: usize>(
        name: &str,
        image: &Image<u32, N>,
        metric: M,
        distance: fn(&Point<i64, N>, &Point<i64, N>) -> u64,
    ) {
        let got = DistanceTransformation::new(metric).compute(image);
        let want = brute_force(image, distance);

        got.iter()
            .zip(want)
            .for_each(|((point, got), want)| {
                assert_eq!(*got, want, "{name}: at {point}");
            });
    }

    compare(&format!("{name} (chessboard)"), image, Chessboard, chessboard);
    compare(&format!("{name} (manhattan)"), image, Manhattan, manhattan);
    compare(
        &format!("{name} (squared euclidean)"),
        image,
        SquaredEuclidean,
        squared_euclidean,
    );
}

/// Returns an image over the given domain whose foreground is made of the points satisfying the
/// given predicate.
fn shape<const N: usize>(domain: Domain<N>, inside: impl Fn(&Point<i64, N>) -> bool) -> Image<u32, N> {
    let values = domain
        .iter()
        .map(|point| if inside(&point) { 128 } else { 0 })
        .collect();

    Image::from_values(domain, values).unwrap()
}

/// Returns an image over the given domain whose background is made of the given amount of
/// random points.
fn random_seeds<const N: usize>(domain: Domain<N>, seeds: usize) -> Image<u32, N> {
    let mut rng = rand::rng();
    let mut image = Image::filled(domain, 128);

    (0..seeds).for_each(|_| {
        let index = rng.random_range(0..domain.len());
        let point = domain.point_at(index).unwrap();
        image.set(&point, 0).unwrap();
    });

    image
}

#[test]
fn square_blob() {
    let domain = Domain::new([2, 2], [15, 15]).unwrap();
    let image = shape(domain, |point| {
        (5..12).contains(&point[0]) && (5..12).contains(&point[1])
    });

    check("square blob", &image);

    let result = DistanceTransformation::new(Chessboard).compute(&image);
    assert_eq!(result.get(&[8, 8].into()), Some(&4));
    assert_eq!(result.get(&[5, 5].into()), Some(&1));
    assert_eq!(result.get(&[2, 2].into()), Some(&0));
}

#[test]
fn negative_coordinates() {
    let domain = Domain::new([-10, -10], [10, 10]).unwrap();
    let image = shape(domain, |point| point[0].abs() < 7 && point[1].abs() < 5);

    check("negative coordinates", &image);
}

#[test]
fn random_seeds_in_a_plane() {
    let domain = Domain::new([0, 0], [32, 32]).unwrap();
    (0..5).for_each(|_| check("random seeds", &random_seeds(domain, 19)));
}

#[test]
fn ball_in_the_space() {
    let domain = Domain::new([0, 0, 0], [15, 15, 15]).unwrap();
    let image = shape(domain, |point| {
        (0..3).map(|axis| (point[axis] - 8).pow(2)).sum::<i64>() < 49
    });

    check("ball", &image);
}

#[test]
fn random_seeds_in_the_space() {
    let domain = Domain::new([-4, 0, 3], [6, 9, 11]).unwrap();
    (0..3).for_each(|_| check("random seeds", &random_seeds(domain, 7)));
}

#[test]
fn set_of_points() {
    let domain = Domain::new([-11, -11], [11, 11]).unwrap();
    let disk = domain
        .iter()
        .filter(|point| point[0].pow(2) + point[1].pow(2) <= 100);

    let dt = DistanceTransformation::new(SquaredEuclidean);
    let got = dt.compute_set(domain, disk).unwrap();

    let image = shape(domain, |point| point[0].pow(2) + point[1].pow(2) <= 100);
    assert_eq!(got, dt.compute(&image));
    assert_eq!(got.into_values(), brute_force(&image, squared_euclidean));
}

#[test]
fn background_is_exactly_zero() {
    let domain = Domain::new([0, 0], [40, 25]).unwrap();
    let image = random_seeds(domain, 30);

    let result = DistanceTransformation::new(SquaredEuclidean).compute(&image);
    image.iter().zip(result.values()).for_each(|((point, value), distance)| {
        assert_eq!(*value == 0, *distance == 0, "at {point}");
    });
}

#[test]
fn computation_is_deterministic() {
    let domain = Domain::new([0, 0, 0], [12, 7, 9]).unwrap();
    let image = random_seeds(domain, 11);

    let dt = DistanceTransformation::new(Exponent(3)).with_output::<u32>();
    assert_eq!(dt.compute(&image), dt.compute(&image));
}

#[test]
fn arbitrary_exponent() {
    fn cubic(a: &Point<i64, 2>, b: &Point<i64, 2>) -> u64 {
        (0..2).map(|axis| a[axis].abs_diff(b[axis]).pow(3)).sum()
    }

    let domain = Domain::new([0, 0], [20, 20]).unwrap();
    (0..5).for_each(|_| {
        let image = random_seeds(domain, 6);
        let got = DistanceTransformation::new(Exponent(3)).compute(&image);
        assert_eq!(got.into_values(), brute_force(&image, cubic));
    });
}

#[test]
fn output_type_validity() {
    let domain = Domain::new([0, 0], [128, 128]).unwrap();

    assert_eq!(
        DistanceTransformation::new(SquaredEuclidean).check_types_validity(&domain),
        Ok(())
    );

    assert_eq!(
        DistanceTransformation::new(SquaredEuclidean)
            .with_output::<u16>()
            .check_types_validity(&domain),
        Ok(())
    );

    assert_eq!(
        DistanceTransformation::new(Exponent(3))
            .with_output::<u16>()
            .check_types_validity(&domain),
        Err(Error::OutputOverflow {
            exponent: 3,
            digits: 16
        })
    );
}
