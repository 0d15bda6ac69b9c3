use std::fmt::{self, Display};

use num_traits::Signed;

use crate::{
    Integer,
    cursor::{Cursor, Plane, Projected},
    dss::{ArithmeticalDss, Connectivity},
    point::Point3,
};

/// Incremental recognizer of 3d digital straight segments.
///
/// A run of points in the space is a digital straight segment if, and only if, its projections
/// on the three coordinate planes are 2d digital straight segments.
#[derive(Debug, Clone)]
pub struct ArithmeticalDss3d<K, C, T> {
    xy: ArithmeticalDss<K, Projected<C>, T>,
    xz: ArithmeticalDss<K, Projected<C>, T>,
    yz: ArithmeticalDss<K, Projected<C>, T>,
}

impl<K, C, T> ArithmeticalDss3d<K, C, T>
where
    K: Connectivity,
    C: Cursor<Point = Point3<T>>,
    T: Integer + Signed,
{
    /// Returns the segment made of the single point at the given position.
    pub fn new(cursor: C) -> Self {
        Self {
            xy: ArithmeticalDss::new(Projected::new(cursor.clone(), Plane::XY)),
            xz: ArithmeticalDss::new(Projected::new(cursor.clone(), Plane::XZ)),
            yz: ArithmeticalDss::new(Projected::new(cursor, Plane::YZ)),
        }
    }

    /// Resets self to the segment made of the single point at the given position.
    pub fn init(&mut self, cursor: C) {
        *self = Self::new(cursor);
    }

    /// Tries to append the point at the given position to the back of the segment.
    ///
    /// The position must be the one following the last point of the segment. The point is
    /// appended if, and only if, each of the three projections accepts it; otherwise none of them
    /// is modified.
    pub fn extend(&mut self, cursor: C) -> bool {
        let xy = Projected::new(cursor.clone(), Plane::XY);
        let xz = Projected::new(cursor.clone(), Plane::XZ);
        let yz = Projected::new(cursor, Plane::YZ);

        let (Some(xy_state), Some(xz_state), Some(yz_state)) =
            (self.xy.check(&xy), self.xz.check(&xz), self.yz.check(&yz))
        else {
            return false;
        };

        self.xy.commit(xy, xy_state);
        self.xz.commit(xz, xz_state);
        self.yz.commit(yz, yz_state);
        true
    }

    /// Tries to append the point following the last one of the segment.
    pub fn extend_forward(&mut self) -> bool {
        self.last()
            .next()
            .is_some_and(|cursor| self.extend(cursor))
    }

    /// Returns the projection of the segment on the given plane.
    pub fn projection(&self, plane: Plane) -> &ArithmeticalDss<K, Projected<C>, T> {
        match plane {
            Plane::XY => &self.xy,
            Plane::XZ => &self.xz,
            Plane::YZ => &self.yz,
        }
    }

    /// Returns an ordered iterator over the points of the segment.
    pub fn points(&self) -> impl Iterator<Item = Point3<T>> + '_ {
        crate::cursor::between(self.first(), self.last())
    }

    /// Returns true if, and only if, the three projections are valid and describe the same run.
    pub fn is_valid(&self) -> bool {
        [&self.xz, &self.yz].into_iter().all(|dss| {
            dss.first().inner() == self.xy.first().inner()
                && dss.last().inner() == self.xy.last().inner()
                && dss.len() == self.xy.len()
        }) && self.xy.is_valid()
            && self.xz.is_valid()
            && self.yz.is_valid()
    }
}

impl<K, C, T> ArithmeticalDss3d<K, C, T>
where
    T: Copy,
{
    /// Returns the position of the first point of the segment.
    pub fn first(&self) -> &C {
        self.xy.first().inner()
    }

    /// Returns the position of the last point of the segment.
    pub fn last(&self) -> &C {
        self.xy.last().inner()
    }

    /// Returns the amount of points in the segment.
    pub fn len(&self) -> usize {
        self.xy.len()
    }

    /// Always returns false, since a segment has at least one point.
    pub fn is_empty(&self) -> bool {
        self.xy.is_empty()
    }
}

impl<K, C, D, T> PartialEq<ArithmeticalDss3d<K, D, T>> for ArithmeticalDss3d<K, C, T>
where
    T: PartialEq + Copy,
{
    /// Two segments are equal if, and only if, their three projections are.
    fn eq(&self, other: &ArithmeticalDss3d<K, D, T>) -> bool {
        self.xy == other.xy && self.xz == other.xz && self.yz == other.yz
    }
}

impl<K, C, T> Display for ArithmeticalDss3d<K, C, T>
where
    K: Connectivity,
    C: Cursor<Point = Point3<T>>,
    T: Display + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[ArithmeticalDss3d]")?;
        writeln!(f, "First point {} Last point {}", self.first().point(), self.last().point())?;
        writeln!(f, "XY projection:\n{}", self.xy)?;
        writeln!(f, "XZ projection:\n{}", self.xz)?;
        write!(f, "YZ projection:\n{}", self.yz)
    }
}
