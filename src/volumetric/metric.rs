use num_traits::PrimInt;

use crate::Integer;

/// A separable distance of the digital space.
///
/// The distance between two points is the sum of the `p`-th powers of the length of their
/// displacement along each axis, being `p` the exponent of the metric. An exponent of zero stands
/// for the chessboard distance, the maximum of these lengths.
pub trait Metric {
    /// Returns the exponent of the metric.
    fn exponent(&self) -> u32;

    /// Returns the contribution of a displacement of the given length along a single axis, if it
    /// fits in `U`.
    fn power<U: PrimInt>(&self, length: usize) -> Option<U> {
        num_traits::checked_pow(U::from(length)?, self.exponent() as usize)
    }

    /// Returns the distance made of the given contribution along one axis and the partial distance
    /// over the other axes, if it fits in `U`.
    fn combine<U: PrimInt>(&self, power: U, partial: U) -> Option<U> {
        power.checked_add(&partial)
    }

    /// Returns the distance from the position `x` of a line to the site at position `site`, whose
    /// partial distance is `height`.
    fn cost<U: PrimInt>(&self, x: usize, site: usize, height: U) -> Option<U> {
        self.combine(self.power(x.distance(site))?, height)
    }

    /// Returns the last position in `[0, len)` at which the site `i` is not farther than the site
    /// `u`, being `i < u`, or -1 if there is none.
    fn separator<U: PrimInt>(&self, i: usize, u: usize, h_i: U, h_u: U, len: usize) -> isize {
        search(self, i, u, h_i, h_u, len)
    }
}

/// The L∞ distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chessboard;

impl Metric for Chessboard {
    fn exponent(&self) -> u32 {
        0
    }

    fn power<U: PrimInt>(&self, length: usize) -> Option<U> {
        U::from(length)
    }

    fn combine<U: PrimInt>(&self, power: U, partial: U) -> Option<U> {
        Some(power.max(partial))
    }

    fn separator<U: PrimInt>(&self, i: usize, u: usize, h_i: U, h_u: U, len: usize) -> isize {
        let (Some(hi), Some(hu)) = (h_i.to_i128(), h_u.to_i128()) else {
            return search(self, i, u, h_i, h_u, len);
        };

        let (i, u) = (i as i128, u as i128);
        let middle = (i + u).div_euclid(2);
        let separator = if hi <= hu {
            i.saturating_add(hu).max(middle)
        } else {
            (u - hi).min(middle)
        };

        clamp(separator, len)
    }
}

/// The L1 distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Manhattan;

impl Metric for Manhattan {
    fn exponent(&self) -> u32 {
        1
    }

    fn separator<U: PrimInt>(&self, i: usize, u: usize, h_i: U, h_u: U, len: usize) -> isize {
        let (Some(hi), Some(hu)) = (h_i.to_i128(), h_u.to_i128()) else {
            return search(self, i, u, h_i, h_u, len);
        };

        let (i, u) = (i as i128, u as i128);
        if hu >= hi.saturating_add(u - i) {
            return clamp(i128::MAX, len);
        }

        if hi > hu.saturating_add(u - i) {
            return -1;
        }

        clamp((hu - hi + u + i).div_euclid(2), len)
    }
}

/// The squared L2 distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SquaredEuclidean;

impl Metric for SquaredEuclidean {
    fn exponent(&self) -> u32 {
        2
    }

    fn separator<U: PrimInt>(&self, i: usize, u: usize, h_i: U, h_u: U, len: usize) -> isize {
        let separator = || {
            let (hi, hu) = (h_i.to_i128()?, h_u.to_i128()?);
            let (i, u) = (i as i128, u as i128);
            let numerator = u
                .checked_mul(u)?
                .checked_sub(i.checked_mul(i)?)?
                .checked_add(hu - hi)?;

            Some(numerator.div_euclid(2 * (u - i)))
        };

        separator()
            .map(|separator| clamp(separator, len))
            .unwrap_or_else(|| search(self, i, u, h_i, h_u, len))
    }
}

/// The distance of an arbitrary exponent.
///
/// Exponents zero, one and two behave as [`Chessboard`], [`Manhattan`] and [`SquaredEuclidean`]
/// respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exponent(pub u32);

impl Metric for Exponent {
    fn exponent(&self) -> u32 {
        self.0
    }

    fn power<U: PrimInt>(&self, length: usize) -> Option<U> {
        match self.0 {
            0 => Chessboard.power(length),
            exponent => num_traits::checked_pow(U::from(length)?, exponent as usize),
        }
    }

    fn combine<U: PrimInt>(&self, power: U, partial: U) -> Option<U> {
        match self.0 {
            0 => Chessboard.combine(power, partial),
            _ => power.checked_add(&partial),
        }
    }

    fn separator<U: PrimInt>(&self, i: usize, u: usize, h_i: U, h_u: U, len: usize) -> isize {
        match self.0 {
            0 => Chessboard.separator(i, u, h_i, h_u, len),
            1 => Manhattan.separator(i, u, h_i, h_u, len),
            2 => SquaredEuclidean.separator(i, u, h_i, h_u, len),
            _ => search(self, i, u, h_i, h_u, len),
        }
    }
}

/// Returns true if, and only if, the distance a is greater than b, being [`None`] a distance too
/// large to be represented.
pub(crate) fn exceeds<U: Ord>(a: Option<U>, b: Option<U>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a > b,
        (None, Some(_)) => true,
        (_, None) => false,
    }
}

/// Returns the separator of the sites i and u by bisection.
///
/// The positions at which i is not farther than u always precede the ones at which it is.
fn search<M, U>(metric: &M, i: usize, u: usize, h_i: U, h_u: U, len: usize) -> isize
where
    M: Metric + ?Sized,
    U: PrimInt,
{
    let (mut lo, mut hi) = (-1_isize, len as isize);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if exceeds(metric.cost(mid as usize, i, h_i), metric.cost(mid as usize, u, h_u)) {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    lo
}

fn clamp(separator: i128, len: usize) -> isize {
    separator.clamp(-1, len as i128 - 1) as isize
}
