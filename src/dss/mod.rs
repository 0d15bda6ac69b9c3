//! Online recognition of arithmetical digital straight segments.
//!
//! A digital straight segment (DSS) of slope `a/b`, offset `mu` and thickness `omega` is a run
//! of lattice points `P` satisfying `mu <= a·P.x - b·P.y < mu + omega`, where `omega` is
//! `|a| + |b|` for 4-connected runs and `max(|a|, |b|)` for 8-connected ones.

mod connectivity;
mod dss3d;
mod remainder;
mod state;
mod steps;

use std::{
    fmt::{self, Display},
    marker::PhantomData,
};

use num_traits::Signed;

pub use self::connectivity::{Connectivity, Eight, Four};
pub use self::dss3d::ArithmeticalDss3d;
pub use self::state::LeaningPoints;

use self::state::{Case, State};
use crate::{
    Integer,
    cursor::{Cursor, SliceCursor, between},
    integer::gcd,
    point::Point2,
};

/// A 4-connected [`ArithmeticalDss`] over a slice of points.
pub type Dss4<'a, T> = ArithmeticalDss<Four, SliceCursor<'a, Point2<T>>, T>;

/// An 8-connected [`ArithmeticalDss`] over a slice of points.
pub type Dss8<'a, T> = ArithmeticalDss<Eight, SliceCursor<'a, Point2<T>>, T>;

/// Incremental recognizer of the digital straight segment starting at a given position of a
/// sequence of points.
///
/// The segment only holds cursors into the sequence, which must outlive it.
#[derive(Debug, Clone)]
pub struct ArithmeticalDss<K, C, T> {
    pub(crate) state: State<T>,
    first: C,
    last: C,
    len: usize,
    connectivity: PhantomData<K>,
}

impl<K, C, T> ArithmeticalDss<K, C, T>
where
    K: Connectivity,
    C: Cursor<Point = Point2<T>>,
    T: Integer + Signed,
{
    /// Returns the segment made of the single point at the given position.
    pub fn new(cursor: C) -> Self {
        Self {
            state: State::new(cursor.point()),
            first: cursor.clone(),
            last: cursor,
            len: 1,
            connectivity: PhantomData,
        }
    }

    /// Resets self to the segment made of the single point at the given position.
    pub fn init(&mut self, cursor: C) {
        *self = Self::new(cursor);
    }

    /// Tries to append the point at the given position to the back of the segment.
    ///
    /// The position must be the one following the last point of the segment. Returns true if,
    /// and only if, it is and the resulting run is a digital straight segment, in which case self
    /// is updated accordingly. Otherwise self is left untouched.
    pub fn extend(&mut self, cursor: C) -> bool {
        let Some(state) = self.check(&cursor) else {
            log::trace!(
                "point {} rejected by the segment of slope {}/{} and band [{}, {})",
                cursor.point(),
                self.state.a,
                self.state.b,
                self.state.mu,
                self.state.mu + self.state.omega,
            );

            return false;
        };

        self.commit(cursor, state);
        true
    }

    /// Tries to append the point following the last one of the segment.
    ///
    /// Returns false if there is no such point or it cannot be appended.
    pub fn extend_forward(&mut self) -> bool {
        self.last
            .next()
            .is_some_and(|cursor| self.extend(cursor))
    }

    /// Removes the first point of the segment.
    ///
    /// Returns false, leaving self untouched, if the segment has a single point. The remaining
    /// run is recognized again, so the cost is linear in the length of the segment.
    pub fn retract(&mut self) -> bool {
        if self.first == self.last {
            return false;
        }

        let Some(first) = self.first.next() else {
            return false;
        };

        // Every sub-run of a digital straight segment is a digital straight segment, hence
        // recognizing the remaining run again always reaches the last point.
        let mut dss = Self::new(first);
        while dss.last != self.last {
            if !dss.extend_forward() {
                return false;
            }
        }

        *self = dss;
        true
    }

    /// Returns the state resulting from appending the point at the given position, if any.
    ///
    /// Positions other than the one following the last point are always rejected.
    pub(crate) fn check(&self, cursor: &C) -> Option<State<T>> {
        if self.last.next().as_ref() != Some(cursor) {
            return None;
        }

        self.state
            .extended::<K>(self.last.point(), cursor.point())
    }

    /// Sets the given position as the back of the segment described by the given state.
    pub(crate) fn commit(&mut self, cursor: C, state: State<T>) {
        if !self.state.is_trivial() && (state.a, state.b) != (self.state.a, self.state.b) {
            log::debug!(
                "segment slope updated from {}/{} to {}/{} at point {}",
                self.state.a,
                self.state.b,
                state.a,
                state.b,
                cursor.point(),
            );
        }

        self.state = state;
        self.last = cursor;
        self.len += 1;
    }

    /// Returns the remainder `a·P.x - b·P.y` of the given point.
    pub fn remainder(&self, point: &Point2<T>) -> T {
        self.state.remainder(point)
    }

    /// Returns an ordered iterator over the points of the segment.
    pub fn points(&self) -> impl Iterator<Item = Point2<T>> + '_ {
        between(&self.first, &self.last)
    }

    /// Returns true if, and only if, the arithmetical description of the segment is consistent
    /// with its points.
    pub fn is_valid(&self) -> bool {
        if self.len == 0 {
            return false;
        }

        let State {
            a,
            b,
            mu,
            omega,
            leaning,
            ..
        } = self.state;

        if self.state.is_trivial() {
            return mu.is_zero()
                && omega.is_one()
                && self.points().all(|point| point == leaning.upper_front);
        }

        let lower = mu + omega - T::one();
        gcd(a, b).is_one()
            && omega == K::omega(a, b)
            && self.remainder(&leaning.upper_front) == mu
            && self.remainder(&leaning.upper_back) == mu
            && self.remainder(&leaning.lower_front) == lower
            && self.remainder(&leaning.lower_back) == lower
            && self.points().all(|point| {
                matches!(
                    Case::of(self.remainder(&point), mu, omega),
                    Case::Interior { .. }
                )
            })
    }
}

impl<K, C, T> ArithmeticalDss<K, C, T>
where
    T: Copy,
{
    /// Returns the numerator of the slope.
    pub fn a(&self) -> T {
        self.state.a
    }

    /// Returns the denominator of the slope.
    pub fn b(&self) -> T {
        self.state.b
    }

    /// Returns the lower bound of the remainders of the segment.
    pub fn mu(&self) -> T {
        self.state.mu
    }

    /// Returns the thickness of the segment.
    pub fn omega(&self) -> T {
        self.state.omega
    }

    pub fn leaning_points(&self) -> &LeaningPoints<T> {
        &self.state.leaning
    }

    /// Returns the position of the first point of the segment.
    pub fn first(&self) -> &C {
        &self.first
    }

    /// Returns the position of the last point of the segment.
    pub fn last(&self) -> &C {
        &self.last
    }

    /// Returns the amount of points in the segment.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always returns false, since a segment has at least one point.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'a, K, T> ArithmeticalDss<K, SliceCursor<'a, Point2<T>>, T>
where
    K: Connectivity,
    T: Integer + Signed,
{
    /// Splits the given points into successive maximal segments.
    ///
    /// Each segment starts at the last point of the previous one, unless the previous one could
    /// not be extended at all, in which case the next segment starts at the rejected point.
    pub fn greedy(points: &'a [Point2<T>]) -> Vec<Self> {
        let mut segments = Vec::new();
        let mut next = SliceCursor::new(points);

        while let Some(cursor) = next {
            let mut dss = Self::new(cursor);
            while dss.extend_forward() {}

            next = match dss.last.next() {
                Some(rejected) if dss.len == 1 => Some(rejected),
                Some(_) => Some(dss.last),
                None => None,
            };

            segments.push(dss);
        }

        segments
    }
}

impl<K, C, D, T> PartialEq<ArithmeticalDss<K, D, T>> for ArithmeticalDss<K, C, T>
where
    T: PartialEq + Copy,
{
    /// Two segments are equal if, and only if, their leaning points match, either as they are
    /// or once one of them is reversed (the same segment scanned the other way round).
    fn eq(&self, other: &ArithmeticalDss<K, D, T>) -> bool {
        self.state.leaning == other.state.leaning
            || self.state.leaning == other.state.leaning.reversed()
    }
}

impl<K, C, T> Display for ArithmeticalDss<K, C, T>
where
    K: Connectivity,
    C: Cursor<Point = Point2<T>>,
    T: Display + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let State {
            a,
            b,
            mu,
            omega,
            leaning,
            ..
        } = &self.state;

        writeln!(f, "[ArithmeticalDss {}-connected]", K::NEIGHBORS)?;
        writeln!(f, "Parameters (a,b,mu,omega)=({a}, {b}, {mu}, {omega})")?;
        writeln!(
            f,
            "First point {} Last point {} Length {}",
            self.first.point(),
            self.last.point(),
            self.len
        )?;
        writeln!(f, "Leaning points:")?;
        writeln!(f, "   Uf {}", leaning.upper_front)?;
        writeln!(f, "   Ul {}", leaning.upper_back)?;
        writeln!(f, "   Lf {}", leaning.lower_front)?;
        write!(f, "   Ll {}", leaning.lower_back)
    }
}
