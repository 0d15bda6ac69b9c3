use crate::point::Point2;

/// The distinct steps found so far in a digital straight segment, which may contain a single
/// one or a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Steps<T> {
    Single(Point2<T>),
    Pair([Point2<T>; 2]),
}

impl<T> Steps<T>
where
    T: PartialEq + Copy,
{
    /// Returns true if, and only if, the given step is in this [`Steps`].
    pub(crate) fn contains(&self, step: &Point2<T>) -> bool {
        match self {
            Steps::Single(value) => value == step,
            Steps::Pair(values) => values.contains(step),
        }
    }

    /// Returns the steps resulting from taking the given one, if the pair admits it.
    ///
    /// A new step is only admitted next to a single one, and only if `compatible` accepts both.
    pub(crate) fn with(
        self,
        step: Point2<T>,
        compatible: impl Fn(&Point2<T>, &Point2<T>) -> bool,
    ) -> Option<Self> {
        if self.contains(&step) {
            return Some(self);
        }

        match self {
            Steps::Single(first) if compatible(&first, &step) => Some(Steps::Pair([first, step])),
            _ => None,
        }
    }
}
