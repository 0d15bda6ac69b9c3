//! Distance transformation of digital images.
//!
//! Every point of the foreground of an image is given the distance to its closest background
//! point, computed separably: an exact one-dimensional distance along the first axis, followed
//! by one lower envelope pass per remaining axis.

mod domain;
mod image;
mod metric;

use std::marker::PhantomData;

use num_traits::{PrimInt, Unsigned, Zero};

pub use self::domain::Domain;
pub use self::image::Image;
pub use self::metric::{Chessboard, Exponent, Manhattan, Metric, SquaredEuclidean};

use self::metric::exceeds;
use crate::{Error, Integer, point::Point};

/// Computes the distance from every foreground point of an image to its closest background
/// point, as an image of `U` values over the same domain.
///
/// Points outside the domain do not exist, hence a foreground line with no background point is
/// given the largest value of `U`, standing for an unknown distance.
#[derive(Debug, Clone, Copy)]
pub struct DistanceTransformation<M, U = u64> {
    metric: M,
    output: PhantomData<U>,
}

impl<M> DistanceTransformation<M>
where
    M: Metric,
{
    /// Returns a transformation measuring distances with the given metric.
    pub fn new(metric: M) -> Self {
        Self {
            metric,
            output: PhantomData,
        }
    }
}

impl<M, U> DistanceTransformation<M, U> {
    /// Returns the same transformation with `W` as the type of the output values.
    pub fn with_output<W>(self) -> DistanceTransformation<M, W> {
        DistanceTransformation {
            metric: self.metric,
            output: PhantomData,
        }
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }
}

impl<M, U> DistanceTransformation<M, U>
where
    M: Metric,
    U: Integer + Unsigned,
{
    /// Checks whether every distance the given domain admits can be represented by the output
    /// type, the largest value of which is reserved as a sentinel.
    ///
    /// This check is advisory: the computation never fails, but it yields saturated values when
    /// this one does.
    pub fn check_types_validity<const N: usize>(&self, domain: &Domain<N>) -> Result<(), Error> {
        let exponent = self.metric.exponent();
        let largest = domain
            .extent()
            .iter()
            .try_fold(0_u128, |largest, extent| {
                let length = (*extent as u128).saturating_sub(1);
                if exponent == 0 {
                    return Some(largest.max(length));
                }

                largest.checked_add(num_traits::checked_pow(length, exponent as usize)?)
            })
            .and_then(U::from);

        if largest.is_some_and(|largest| largest < U::max_value()) {
            return Ok(());
        }

        log::warn!(
            "distances of exponent {exponent} over a domain of extent {:?} may exceed {}, the largest value of a {} bits output",
            domain.extent(),
            U::max_value().to_double(),
            U::digits(),
        );

        Err(Error::OutputOverflow {
            exponent,
            digits: U::digits(),
        })
    }

    /// Returns the distance transformation of the given image, whose foreground is made of all
    /// the points with a non-zero value.
    pub fn compute<V, const N: usize>(&self, image: &Image<V, N>) -> Image<U, N>
    where
        V: Zero,
    {
        let values = image.values();
        self.transform(*image.domain(), |index| !values[index].is_zero())
    }

    /// Returns the distance transformation of the given image, whose foreground is made of all
    /// the points with a value greater or equal than the threshold.
    pub fn compute_thresholded<V, const N: usize>(
        &self,
        image: &Image<V, N>,
        threshold: &V,
    ) -> Image<U, N>
    where
        V: PartialOrd,
    {
        let values = image.values();
        self.transform(*image.domain(), |index| values[index] >= *threshold)
    }

    /// Returns the distance transformation of the given set of points, which is the foreground of
    /// the domain.
    pub fn compute_set<const N: usize>(
        &self,
        domain: Domain<N>,
        points: impl IntoIterator<Item = Point<i64, N>>,
    ) -> Result<Image<U, N>, Error> {
        let mut foreground = vec![false; domain.len()];
        for point in points {
            let index = domain
                .index_of(&point)
                .ok_or_else(|| Error::OutOfDomain(point.to_string()))?;

            foreground[index] = true;
        }

        Ok(self.transform(domain, |index| foreground[index]))
    }

    fn transform<const N: usize>(
        &self,
        domain: Domain<N>,
        foreground: impl Fn(usize) -> bool,
    ) -> Image<U, N> {
        let extent = domain.extent();
        let strides = domain.strides();

        let mut values: Vec<U> = (0..domain.len())
            .map(|index| {
                if foreground(index) {
                    U::max_value()
                } else {
                    U::zero()
                }
            })
            .collect();

        for axis in 0..N {
            let lines = domain.len() / extent[axis];
            log::debug!(
                "distance transformation pass along axis {axis} over {lines} lines of {} points",
                extent[axis]
            );

            if axis == 0 {
                let mut buffer = Vec::with_capacity(extent[0]);
                values
                    .chunks_mut(extent[0])
                    .for_each(|line| self.scan(line, &mut buffer));

                continue;
            }

            let stride = strides[axis];
            let mut heights = vec![U::zero(); extent[axis]];
            let mut distances = vec![U::zero(); extent[axis]];
            let mut envelope = LowerEnvelope::new(extent[axis]);

            for start in (0..values.len()).filter(|index| (index / stride) % extent[axis] == 0) {
                heights
                    .iter_mut()
                    .enumerate()
                    .for_each(|(position, height)| *height = values[start + position * stride]);

                envelope.transform(&self.metric, &heights, &mut distances);

                distances
                    .iter()
                    .enumerate()
                    .for_each(|(position, distance)| values[start + position * stride] = *distance);
            }
        }

        Image::from_raw(domain, values)
    }

    /// Replaces each value of the given line by the distance to the closest zero in it, by a
    /// forward and a backward sweep.
    fn scan(&self, line: &mut [U], buffer: &mut Vec<Option<usize>>) {
        buffer.clear();

        let mut previous = None;
        for value in line.iter() {
            previous = if value.is_zero() {
                Some(0)
            } else {
                previous.map(|length: usize| length + 1)
            };

            buffer.push(previous);
        }

        let mut next = None;
        for (value, previous) in line.iter_mut().zip(buffer.iter()).rev() {
            next = if value.is_zero() {
                Some(0)
            } else {
                next.map(|length: usize| length + 1)
            };

            let closest = match (*previous, next) {
                (Some(previous), Some(next)) => Some(previous.min(next)),
                (previous, next) => previous.or(next),
            };

            *value = closest
                .and_then(|length| self.metric.power(length))
                .unwrap_or_else(U::max_value);
        }
    }
}

/// The sites of a line whose distance is the lowest at some position, together with the first
/// position at which each of them is.
struct LowerEnvelope {
    sites: Vec<usize>,
    starts: Vec<usize>,
}

impl LowerEnvelope {
    fn new(len: usize) -> Self {
        Self {
            sites: Vec::with_capacity(len),
            starts: Vec::with_capacity(len),
        }
    }

    /// Writes into output the distance from each position of the line to its closest site, being
    /// every finite height a site.
    fn transform<M, U>(&mut self, metric: &M, heights: &[U], output: &mut [U])
    where
        M: Metric,
        U: PrimInt,
    {
        self.sites.clear();
        self.starts.clear();

        let len = heights.len();
        for (u, &h_u) in heights.iter().enumerate() {
            if h_u == U::max_value() {
                continue;
            }

            while let (Some(&site), Some(&start)) = (self.sites.last(), self.starts.last()) {
                if !exceeds(
                    metric.cost(start, site, heights[site]),
                    metric.cost(start, u, h_u),
                ) {
                    break;
                }

                self.sites.pop();
                self.starts.pop();
            }

            let Some(&site) = self.sites.last() else {
                self.sites.push(u);
                self.starts.push(0);
                continue;
            };

            // The separator is never lower than the start of the last site.
            let start = (metric.separator(site, u, heights[site], h_u, len) + 1) as usize;
            if start < len {
                self.sites.push(u);
                self.starts.push(start);
            }
        }

        if self.sites.is_empty() {
            output.fill(U::max_value());
            return;
        }

        let mut k = 0;
        for (x, distance) in output.iter_mut().enumerate() {
            while self.starts.get(k + 1).is_some_and(|&start| start <= x) {
                k += 1;
            }

            let site = self.sites[k];
            *distance = metric
                .cost(x, site, heights[site])
                .unwrap_or_else(U::max_value);
        }
    }
}
