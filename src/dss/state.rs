use num_traits::Signed;

use crate::{
    Integer,
    dss::{Connectivity, remainder::Remainder, steps::Steps},
    point::Point2,
};

/// The points of a digital straight segment lying on the two bounding lines of its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaningPoints<T> {
    /// The first point on the upper bounding line.
    pub upper_front: Point2<T>,
    /// The last point on the upper bounding line.
    pub upper_back: Point2<T>,
    /// The first point on the lower bounding line.
    pub lower_front: Point2<T>,
    /// The last point on the lower bounding line.
    pub lower_back: Point2<T>,
}

impl<T: Copy> LeaningPoints<T> {
    fn at(point: Point2<T>) -> Self {
        Self {
            upper_front: point,
            upper_back: point,
            lower_front: point,
            lower_back: point,
        }
    }

    /// Returns the leaning points of the same segment scanned the other way round.
    ///
    /// Reversing the scan negates the direction vector, which swaps the upper and lower bounding
    /// lines as well as the front and back of each of them.
    pub fn reversed(&self) -> Self {
        Self {
            upper_front: self.lower_back,
            upper_back: self.lower_front,
            lower_front: self.upper_back,
            lower_back: self.upper_front,
        }
    }
}

/// Where a remainder falls relative to the band `mu <= r < mu + omega`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Case {
    /// Inside the band, possibly on any of its bounding lines.
    Interior { upper: bool, lower: bool },
    /// One unit above the upper bounding line.
    WeaklyExteriorUpper,
    /// One unit below the lower bounding line.
    WeaklyExteriorLower,
    /// Farther than one unit from the band.
    Exterior,
}

impl Case {
    pub(crate) fn of<T: Integer>(remainder: T, mu: T, omega: T) -> Self {
        let lower = mu + omega - T::one();
        if remainder >= mu && remainder <= lower {
            Case::Interior {
                upper: remainder == mu,
                lower: remainder == lower,
            }
        } else if remainder == mu - T::one() {
            Case::WeaklyExteriorUpper
        } else if remainder == lower + T::one() {
            Case::WeaklyExteriorLower
        } else {
            Case::Exterior
        }
    }
}

/// The arithmetical description of a digital straight segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct State<T> {
    pub(crate) a: T,
    pub(crate) b: T,
    pub(crate) mu: T,
    pub(crate) omega: T,
    pub(crate) leaning: LeaningPoints<T>,
    pub(crate) steps: Option<Steps<T>>,
}

impl<T> State<T>
where
    T: Integer + Signed,
{
    /// Returns the state of the segment made of the given point only.
    pub(crate) fn new(point: Point2<T>) -> Self {
        Self {
            a: T::zero(),
            b: T::zero(),
            mu: T::zero(),
            omega: T::one(),
            leaning: LeaningPoints::at(point),
            steps: None,
        }
    }

    /// Returns true if, and only if, the slope of the segment is still undefined.
    pub(crate) fn is_trivial(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }

    /// Returns the remainder of the given point for the slope of this state.
    pub(crate) fn remainder(&self, point: &Point2<T>) -> T {
        Remainder::new(self.a, self.b, point).into_inner()
    }

    /// Returns the state of the segment resulting from appending `point` after `last`, or
    /// [`None`] if the result is not a digital straight segment.
    pub(crate) fn extended<C>(&self, last: Point2<T>, point: Point2<T>) -> Option<Self>
    where
        C: Connectivity,
    {
        let step = point - last;
        if step.is_zero() {
            return Some(*self);
        }

        if !C::is_step(&step) {
            return None;
        }

        let steps = match self.steps {
            None => Steps::Single(step),
            Some(steps) => steps.with(step, C::are_compatible::<T>)?,
        };

        if self.is_trivial() {
            // The first step defines the direction vector (b, a).
            let origin = self.leaning.upper_front;
            return Some(Self {
                a: step.y(),
                b: step.x(),
                mu: Remainder::from([&step, &origin]).into_inner(),
                omega: C::omega(step.y(), step.x()),
                leaning: LeaningPoints {
                    upper_front: origin,
                    upper_back: point,
                    lower_front: origin,
                    lower_back: point,
                },
                steps: Some(steps),
            });
        }

        let mut next = Self {
            steps: Some(steps),
            ..*self
        };

        match Case::of(self.remainder(&point), self.mu, self.omega) {
            Case::Interior { upper, lower } => {
                if upper {
                    next.leaning.upper_back = point;
                }

                if lower {
                    next.leaning.lower_back = point;
                }
            }
            Case::WeaklyExteriorUpper => {
                let direction = point - self.leaning.upper_front;
                next.a = direction.y();
                next.b = direction.x();
                next.omega = C::omega(next.a, next.b);
                next.mu = Remainder::from([&direction, &self.leaning.upper_front]).into_inner();
                next.leaning.upper_back = point;
                next.leaning.lower_front = self.leaning.lower_back;
            }
            Case::WeaklyExteriorLower => {
                let direction = point - self.leaning.lower_front;
                next.a = direction.y();
                next.b = direction.x();
                next.omega = C::omega(next.a, next.b);
                next.mu = Remainder::from([&direction, &self.leaning.lower_front]).into_inner()
                    - next.omega
                    + T::one();
                next.leaning.lower_back = point;
                next.leaning.upper_front = self.leaning.upper_back;
            }
            Case::Exterior => return None,
        }

        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        dss::{
            Eight, Four,
            state::{Case, LeaningPoints, State},
        },
        point::Point2,
    };

    #[test]
    fn remainder_cases() {
        struct Test {
            name: &'static str,
            remainder: i32,
            want: Case,
        }

        // Band of mu = -4 and omega = 7, that is: -4 <= r <= 2.
        vec![
            Test {
                name: "on the upper bounding line",
                remainder: -4,
                want: Case::Interior {
                    upper: true,
                    lower: false,
                },
            },
            Test {
                name: "strictly inside",
                remainder: 0,
                want: Case::Interior {
                    upper: false,
                    lower: false,
                },
            },
            Test {
                name: "on the lower bounding line",
                remainder: 2,
                want: Case::Interior {
                    upper: false,
                    lower: true,
                },
            },
            Test {
                name: "just above the band",
                remainder: -5,
                want: Case::WeaklyExteriorUpper,
            },
            Test {
                name: "just below the band",
                remainder: 3,
                want: Case::WeaklyExteriorLower,
            },
            Test {
                name: "far above the band",
                remainder: -8,
                want: Case::Exterior,
            },
            Test {
                name: "far below the band",
                remainder: 4,
                want: Case::Exterior,
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = Case::of(test.remainder, -4, 7);
            assert_eq!(got, test.want, "{}: got = {got:?}, want = {:?}", test.name, test.want);
        });

        assert_eq!(
            Case::of(0, 0, 1),
            Case::Interior {
                upper: true,
                lower: true
            },
            "thickness one band"
        );
    }

    #[test]
    fn state_transitions() {
        struct Test {
            name: &'static str,
            points: Vec<Point2<i32>>,
            want: Option<State<i32>>,
        }

        fn run(points: &[Point2<i32>]) -> Option<State<i32>> {
            let (first, rest) = points.split_first()?;
            rest.iter()
                .try_fold((State::new(*first), *first), |(state, last), point| {
                    Some((state.extended::<Four>(last, *point)?, *point))
                })
                .map(|(state, _)| state)
        }

        vec![
            Test {
                name: "first step defines the slope",
                points: vec![[0, 0].into(), [1, 0].into()],
                want: Some(State {
                    a: 0,
                    b: 1,
                    mu: 0,
                    omega: 1,
                    leaning: LeaningPoints {
                        upper_front: [0, 0].into(),
                        upper_back: [1, 0].into(),
                        lower_front: [0, 0].into(),
                        lower_back: [1, 0].into(),
                    },
                    steps: Some(crate::dss::steps::Steps::Single([1, 0].into())),
                }),
            },
            Test {
                name: "weakly exterior point above the band",
                points: vec![[0, 0].into(), [1, 0].into(), [1, 1].into()],
                want: Some(State {
                    a: 1,
                    b: 1,
                    mu: 0,
                    omega: 2,
                    leaning: LeaningPoints {
                        upper_front: [0, 0].into(),
                        upper_back: [1, 1].into(),
                        lower_front: [1, 0].into(),
                        lower_back: [1, 0].into(),
                    },
                    steps: Some(crate::dss::steps::Steps::Pair([[1, 0].into(), [0, 1].into()])),
                }),
            },
            Test {
                name: "weakly exterior point below the band",
                points: vec![
                    [0, 0].into(),
                    [1, 0].into(),
                    [1, 1].into(),
                    [2, 1].into(),
                    [3, 1].into(),
                ],
                want: Some(State {
                    a: 1,
                    b: 2,
                    mu: -1,
                    omega: 3,
                    leaning: LeaningPoints {
                        upper_front: [1, 1].into(),
                        upper_back: [1, 1].into(),
                        lower_front: [1, 0].into(),
                        lower_back: [3, 1].into(),
                    },
                    steps: Some(crate::dss::steps::Steps::Pair([[1, 0].into(), [0, 1].into()])),
                }),
            },
            Test {
                name: "backward step",
                points: vec![[0, 0].into(), [1, 0].into(), [0, 0].into()],
                want: None,
            },
            Test {
                name: "non neighbor point",
                points: vec![[0, 0].into(), [2, 0].into()],
                want: None,
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = run(&test.points);
            assert_eq!(got, test.want, "{}: got = {got:?}, want = {:?}", test.name, test.want);
        });
    }

    #[test]
    fn repeated_points_keep_the_state() {
        let origin: Point2<i32> = [0, 0].into();
        let state = State::new(origin)
            .extended::<Eight>(origin, [1, 1].into())
            .unwrap();

        assert_eq!(state.extended::<Eight>([1, 1].into(), [1, 1].into()), Some(state));
    }
}
