use crate::point::{Point2, Point3};

/// A read-only position in an ordered sequence of points.
///
/// Cursors do not own the sequence they point into: two cursors are equal if, and only if, they
/// denote the same position of the same sequence.
pub trait Cursor: Clone + PartialEq {
    /// The type of point in the sequence.
    type Point;

    /// Returns the point at this position.
    fn point(&self) -> Self::Point;

    /// Returns the cursor to the following position, if any.
    fn next(&self) -> Option<Self>;
}

/// A [`Cursor`] into a slice of points, traversed from the first to the last element.
#[derive(Debug)]
pub struct SliceCursor<'a, P> {
    points: &'a [P],
    index: usize,
}

impl<P> Clone for SliceCursor<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for SliceCursor<'_, P> {}

impl<P> PartialEq for SliceCursor<'_, P> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.points, other.points) && self.index == other.index
    }
}

impl<'a, P> SliceCursor<'a, P> {
    /// Returns a cursor to the first point of the given slice, if any.
    pub fn new(points: &'a [P]) -> Option<Self> {
        Self::at(points, 0)
    }

    /// Returns a cursor to the point at the given index, if any.
    pub fn at(points: &'a [P], index: usize) -> Option<Self> {
        (index < points.len()).then_some(Self { points, index })
    }

    /// Returns the index of the position in the slice.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<P> Cursor for SliceCursor<'_, P>
where
    P: Copy,
{
    type Point = P;

    fn point(&self) -> P {
        self.points[self.index]
    }

    fn next(&self) -> Option<Self> {
        Self::at(self.points, self.index + 1)
    }
}

/// A [`Cursor`] into a slice of points, traversed from the last to the first element.
#[derive(Debug)]
pub struct ReverseCursor<'a, P> {
    points: &'a [P],
    index: usize,
}

impl<P> Clone for ReverseCursor<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for ReverseCursor<'_, P> {}

impl<P> PartialEq for ReverseCursor<'_, P> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.points, other.points) && self.index == other.index
    }
}

impl<'a, P> ReverseCursor<'a, P> {
    /// Returns a cursor to the last point of the given slice, if any.
    pub fn new(points: &'a [P]) -> Option<Self> {
        let index = points.len().checked_sub(1)?;
        Some(Self { points, index })
    }

    /// Returns the index of the position in the slice.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<P> Cursor for ReverseCursor<'_, P>
where
    P: Copy,
{
    type Point = P;

    fn point(&self) -> P {
        self.points[self.index]
    }

    fn next(&self) -> Option<Self> {
        Some(Self {
            points: self.points,
            index: self.index.checked_sub(1)?,
        })
    }
}

/// A coordinate plane of the digital space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    XY,
    XZ,
    YZ,
}

impl Plane {
    /// Returns the shadow of the given point on this plane.
    pub fn project<T: Copy>(&self, point: Point3<T>) -> Point2<T> {
        let [x, y, z] = point.0;
        match self {
            Plane::XY => [x, y].into(),
            Plane::XZ => [x, z].into(),
            Plane::YZ => [y, z].into(),
        }
    }
}

/// A [`Cursor`] that reads the points of a 3d sequence through their projection on a [`Plane`].
#[derive(Debug, Clone, PartialEq)]
pub struct Projected<C> {
    cursor: C,
    plane: Plane,
}

impl<C> Projected<C> {
    pub fn new(cursor: C, plane: Plane) -> Self {
        Self { cursor, plane }
    }

    /// Returns the cursor into the 3d sequence.
    pub fn inner(&self) -> &C {
        &self.cursor
    }

    pub fn plane(&self) -> Plane {
        self.plane
    }
}

impl<C, T> Cursor for Projected<C>
where
    C: Cursor<Point = Point3<T>>,
    T: Copy,
{
    type Point = Point2<T>;

    fn point(&self) -> Point2<T> {
        self.plane.project(self.cursor.point())
    }

    fn next(&self) -> Option<Self> {
        Some(Self {
            cursor: self.cursor.next()?,
            plane: self.plane,
        })
    }
}

/// Iterates over the points from `first` to `last`, both included.
///
/// The iteration stops at the end of the sequence if `last` is never reached.
#[cfg_attr(not(feature = "dss"), allow(dead_code))]
pub(crate) fn between<C>(first: &C, last: &C) -> impl Iterator<Item = C::Point>
where
    C: Cursor,
{
    let last = last.clone();
    let mut next = Some(first.clone());

    std::iter::from_fn(move || {
        let current = next.take()?;
        if current != last {
            next = current.next();
        }

        Some(current.point())
    })
}
