use std::{
    fmt::{self, Display},
    ops::{Add, Index, IndexMut, Neg, Sub},
};

use num_traits::Zero;

/// A point, or a vector, of the digital space of dimension `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point<T, const N: usize>(pub [T; N]);

/// A point of the digital plane.
pub type Point2<T> = Point<T, 2>;

/// A point of the digital space.
pub type Point3<T> = Point<T, 3>;

impl<T, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coordinates: [T; N]) -> Self {
        Self(coordinates)
    }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;

    fn index(&self, axis: usize) -> &Self::Output {
        &self.0[axis]
    }
}

impl<T, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, axis: usize) -> &mut Self::Output {
        &mut self.0[axis]
    }
}

impl<T, const N: usize> Add for Point<T, N>
where
    T: Copy + Add<Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(std::array::from_fn(|axis| self.0[axis] + rhs.0[axis]))
    }
}

impl<T, const N: usize> Sub for Point<T, N>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(std::array::from_fn(|axis| self.0[axis] - rhs.0[axis]))
    }
}

impl<T, const N: usize> Neg for Point<T, N>
where
    T: Copy + Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.map(Neg::neg))
    }
}

impl<T, const N: usize> Point<T, N>
where
    T: Copy + Zero,
{
    /// Returns the origin of the space.
    pub fn zero() -> Self {
        Self([T::zero(); N])
    }

    /// Returns true if, and only if, all the coordinates are zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(Zero::is_zero)
    }
}

impl<T, const N: usize> Point<T, N> {
    /// Returns the coordinates of the point.
    pub fn coordinates(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> Point<T, N>
where
    T: PartialOrd,
{
    /// Returns true if, and only if, no coordinate of self is greater than the one of rhs.
    pub fn is_lower(&self, rhs: &Self) -> bool {
        self.0.iter().zip(&rhs.0).all(|(a, b)| a <= b)
    }

    /// Returns true if, and only if, no coordinate of self is less than the one of rhs.
    pub fn is_upper(&self, rhs: &Self) -> bool {
        self.0.iter().zip(&rhs.0).all(|(a, b)| a >= b)
    }
}

impl<T: Copy> Point<T, 2> {
    pub fn x(&self) -> T {
        self.0[0]
    }

    pub fn y(&self) -> T {
        self.0[1]
    }
}

impl<T: Copy> Point<T, 3> {
    pub fn x(&self) -> T {
        self.0[0]
    }

    pub fn y(&self) -> T {
        self.0[1]
    }

    pub fn z(&self) -> T {
        self.0[2]
    }
}

impl<T, const N: usize> Display for Point<T, N>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (axis, coordinate) in self.0.iter().enumerate() {
            if axis > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{coordinate}")?;
        }

        write!(f, ")")
    }
}

/// A constructor macro for the lattice [`Point`].
#[macro_export]
macro_rules! lattice_point {
    ($($coordinate:expr),+ $(,)?) => {
        $crate::point::Point([$($coordinate),+])
    };
}

pub use lattice_point;
