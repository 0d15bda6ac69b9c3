use crate::{Error, Integer, point::Point};

/// An axis aligned box of the digital space of dimension `N`, both bounds included.
///
/// Points are enumerated in lexicographic order, being the first axis the one that varies the
/// fastest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domain<const N: usize> {
    lower: Point<i64, N>,
    upper: Point<i64, N>,
}

impl<const N: usize> Domain<N> {
    /// Returns the domain delimited by the given corners.
    ///
    /// Fails if a lower bound exceeds its upper one, or if the amount of points of the domain
    /// does not fit in a `usize`.
    pub fn new(
        lower: impl Into<Point<i64, N>>,
        upper: impl Into<Point<i64, N>>,
    ) -> Result<Self, Error> {
        let lower = lower.into();
        let upper = upper.into();

        if let Some(axis) = (0..N).find(|&axis| lower[axis] > upper[axis]) {
            return Err(Error::EmptyDomain {
                axis,
                lower: lower[axis],
                upper: upper[axis],
            });
        }

        let len = (0..N).try_fold(1_usize, |len, axis| {
            usize::try_from(upper[axis].distance(lower[axis]))
                .ok()?
                .checked_add(1)
                .and_then(|extent| len.checked_mul(extent))
        });

        if len.is_none() {
            return Err(Error::DomainOverflow {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }

        Ok(Self { lower, upper })
    }

    /// Returns the lowest corner of the domain.
    pub fn lower(&self) -> &Point<i64, N> {
        &self.lower
    }

    /// Returns the uppermost corner of the domain.
    pub fn upper(&self) -> &Point<i64, N> {
        &self.upper
    }

    /// Returns the amount of points of the domain along each axis.
    pub fn extent(&self) -> [usize; N] {
        std::array::from_fn(|axis| self.upper[axis].distance(self.lower[axis]) as usize + 1)
    }

    /// Returns the total amount of points in the domain.
    pub fn len(&self) -> usize {
        self.extent().iter().product()
    }

    /// Always returns false, since a domain has at least one point.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if, and only if, the given point lies in the domain.
    pub fn contains(&self, point: &Point<i64, N>) -> bool {
        self.lower.is_lower(point) && self.upper.is_upper(point)
    }

    /// Returns the distance, in the flat enumeration of the domain, between two points that only
    /// differ by one unit along each axis.
    pub(crate) fn strides(&self) -> [usize; N] {
        let extent = self.extent();
        let mut strides = [1; N];
        for axis in 1..N {
            strides[axis] = strides[axis - 1] * extent[axis - 1];
        }

        strides
    }

    /// Returns the position of the given point in the enumeration of the domain, if any.
    pub fn index_of(&self, point: &Point<i64, N>) -> Option<usize> {
        if !self.contains(point) {
            return None;
        }

        Some(
            self.strides()
                .iter()
                .enumerate()
                .map(|(axis, stride)| point[axis].distance(self.lower[axis]) as usize * stride)
                .sum(),
        )
    }

    /// Returns the point at the given position of the enumeration of the domain, if any.
    pub fn point_at(&self, index: usize) -> Option<Point<i64, N>> {
        if index >= self.len() {
            return None;
        }

        let extent = self.extent();
        let strides = self.strides();
        Some(Point(std::array::from_fn(|axis| {
            self.lower[axis] + ((index / strides[axis]) % extent[axis]) as i64
        })))
    }

    /// Returns an iterator over all the points of the domain in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = Point<i64, N>> + '_ {
        (0..self.len()).filter_map(|index| self.point_at(index))
    }
}
