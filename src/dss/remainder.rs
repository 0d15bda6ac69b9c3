use std::ops::{Mul, Sub};

use crate::point::Point2;

/// The scalar value locating a point relative to a family of parallel digital lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Remainder<T>(T);

impl<T> From<[&Point2<T>; 2]> for Remainder<T>
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    /// Being `(b, a)` the direction vector of the line and `P` the given point, returns
    /// `a·P.x - b·P.y`.
    fn from([direction, point]: [&Point2<T>; 2]) -> Self {
        Self(direction.y() * point.x() - direction.x() * point.y())
    }
}

impl<T> Remainder<T>
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    /// Returns the remainder of the given point for the line of slope `a/b`.
    pub(crate) fn new(a: T, b: T, point: &Point2<T>) -> Self {
        Self(a * point.x() - b * point.y())
    }
}

impl<T> Remainder<T> {
    /// Returns the inner value of self.
    pub(crate) fn into_inner(self) -> T {
        self.0
    }
}
