use std::fmt::Debug;

use num_traits::Signed;

use crate::{Integer, point::Point2};

/// The adjacency model between consecutive points of a digital curve.
pub trait Connectivity: Debug + Clone {
    /// The amount of neighbors of a point under this connectivity.
    const NEIGHBORS: u8;

    /// Returns the thickness of the digital line of slope `a/b`.
    fn omega<T>(a: T, b: T) -> T
    where
        T: Integer + Signed;

    /// Returns true if, and only if, the given vector joins two neighbor points.
    fn is_step<T>(step: &Point2<T>) -> bool
    where
        T: Integer + Signed;

    /// Returns true if, and only if, the two given distinct steps may appear together in the
    /// same digital straight segment.
    fn are_compatible<T>(a: &Point2<T>, b: &Point2<T>) -> bool
    where
        T: Integer + Signed;
}

/// Neighbors share an edge: only axis-aligned steps are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Four;

impl Connectivity for Four {
    const NEIGHBORS: u8 = 4;

    fn omega<T>(a: T, b: T) -> T
    where
        T: Integer + Signed,
    {
        a.abs() + b.abs()
    }

    fn is_step<T>(step: &Point2<T>) -> bool
    where
        T: Integer + Signed,
    {
        (step.x().abs() + step.y().abs()).is_one()
    }

    fn are_compatible<T>(a: &Point2<T>, b: &Point2<T>) -> bool
    where
        T: Integer + Signed,
    {
        (a.x() * b.x() + a.y() * b.y()).is_zero()
    }
}

/// Neighbors share an edge or a corner: diagonal steps are allowed too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eight;

impl Connectivity for Eight {
    const NEIGHBORS: u8 = 8;

    fn omega<T>(a: T, b: T) -> T
    where
        T: Integer + Signed,
    {
        a.abs().max(b.abs())
    }

    fn is_step<T>(step: &Point2<T>) -> bool
    where
        T: Integer + Signed,
    {
        step.x().abs().max(step.y().abs()).is_one()
    }

    fn are_compatible<T>(a: &Point2<T>, b: &Point2<T>) -> bool
    where
        T: Integer + Signed,
    {
        ((a.x() - b.x()).abs() + (a.y() - b.y()).abs()).is_one()
    }
}
