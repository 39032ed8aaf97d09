use crate::bound::{Lower, Upper};
use crate::error::IntervalError;
use crate::half_open::{
    left_closed_right_open, left_open_right_closed, ClosedOpen, MaybeEmpty, OpenClosed,
};
use crate::iter::{Ascending, Descending};
use crate::step::{Predecessible, Successible};
use std::convert::TryFrom;
use std::fmt;
use std::ops::{BitAnd, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};
use tracing::trace;

/// A set of values of a totally ordered domain.
///
/// Every interval is one of: the whole domain, nothing, a single bound, or one
/// lower and one upper bound taken together. The fields of `Intersection` are
/// typed, so it can only ever pair a [`Lower`] with an [`Upper`].
///
/// Intervals are plain immutable values. Combining them never fails.
/// ```
/// use ivalgebra::Interval;
/// let iv = Interval::inclusive_lower(3).intersect(&Interval::exclusive_upper(7));
/// assert!(iv.contains(&3));
/// assert!(iv.contains(&6));
/// assert!(!iv.contains(&7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
pub enum Interval<T> {
    Universe,
    Empty,
    Lower(Lower<T>),
    Upper(Upper<T>),
    Intersection(Lower<T>, Upper<T>),
}

impl<T> Interval<T> {
    #[inline]
    pub fn universe() -> Self {
        Interval::Universe
    }

    #[inline]
    pub fn empty() -> Self {
        Interval::Empty
    }

    /// All `t >= v`.
    #[inline]
    pub fn inclusive_lower(v: T) -> Self {
        Interval::Lower(Lower::Inclusive(v))
    }

    /// All `t > v`.
    #[inline]
    pub fn exclusive_lower(v: T) -> Self {
        Interval::Lower(Lower::Exclusive(v))
    }

    /// All `t <= v`.
    #[inline]
    pub fn inclusive_upper(v: T) -> Self {
        Interval::Upper(Upper::Inclusive(v))
    }

    /// All `t < v`.
    #[inline]
    pub fn exclusive_upper(v: T) -> Self {
        Interval::Upper(Upper::Exclusive(v))
    }

    /// Structural emptiness. An `Intersection` of adjacent exclusive bounds has
    /// no members on a discrete domain but is not reported here.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Interval::Empty)
    }

    /// Structural check for the whole domain.
    #[inline]
    pub fn is_universe(&self) -> bool {
        matches!(self, Interval::Universe)
    }

    /// The lower bound, if the interval has one.
    pub fn lower(&self) -> Option<&Lower<T>> {
        match self {
            Interval::Lower(l) | Interval::Intersection(l, _) => Some(l),
            _ => None,
        }
    }

    /// The upper bound, if the interval has one.
    pub fn upper(&self) -> Option<&Upper<T>> {
        match self {
            Interval::Upper(u) | Interval::Intersection(_, u) => Some(u),
            _ => None,
        }
    }

    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            Interval::Universe => "universe",
            Interval::Empty => "empty",
            Interval::Lower(_) => "lower",
            Interval::Upper(_) => "upper",
            Interval::Intersection(..) => "intersection",
        }
    }
}

impl<T: Ord> Interval<T> {
    /// Pair a lower and an upper bound, collapsing to `Empty` when the two
    /// leave no room between them.
    /// ```
    /// use ivalgebra::{Interval, Lower, Upper};
    /// assert_eq!(Interval::between(Lower::Inclusive(5), Upper::Inclusive(4)), Interval::Empty);
    /// ```
    pub fn between(lower: Lower<T>, upper: Upper<T>) -> Self {
        if lower.intersects(&upper) {
            Interval::Intersection(lower, upper)
        } else {
            trace!(
                lower_inclusive = lower.is_inclusive(),
                upper_inclusive = upper.is_inclusive(),
                "bounds leave no room, collapsing to empty"
            );
            Interval::Empty
        }
    }

    pub fn contains(&self, t: &T) -> bool {
        match self {
            Interval::Universe => true,
            Interval::Empty => false,
            Interval::Lower(l) => l.contains(t),
            Interval::Upper(u) => u.contains(t),
            Interval::Intersection(l, u) => l.contains(t) && u.contains(t),
        }
    }

    /// Move every bound through `f`.
    ///
    /// `f` must be non-decreasing. This is not checked; a function that is not
    /// monotonic gives a meaningless interval. A strictly increasing `f` maps
    /// the interval onto exactly the image of its members.
    pub fn map_monotonic<U, F>(self, f: F) -> Interval<U>
    where
        U: Ord,
        F: Fn(T) -> U,
    {
        match self {
            Interval::Universe => Interval::Universe,
            Interval::Empty => Interval::Empty,
            Interval::Lower(l) => Interval::Lower(l.map(&f)),
            Interval::Upper(u) => Interval::Upper(u.map(&f)),
            Interval::Intersection(l, u) => Interval::between(l.map(&f), u.map(&f)),
        }
    }
}

impl<T: Ord + Clone> Interval<T> {
    /// Intersect two intervals.
    ///
    /// Every case reduces to one of three primitive rules: lower against lower,
    /// upper against upper, and lower against upper.
    /// ```
    /// use ivalgebra::Interval;
    /// let a = Interval::inclusive_lower(5);
    /// let b = Interval::inclusive_upper(4);
    /// assert_eq!(a.intersect(&b), Interval::Empty);
    /// ```
    pub fn intersect(&self, other: &Interval<T>) -> Interval<T> {
        match (self, other) {
            (Interval::Empty, _) | (_, Interval::Empty) => Interval::Empty,
            (Interval::Universe, x) | (x, Interval::Universe) => x.clone(),
            (Interval::Lower(a), Interval::Lower(b)) => Interval::Lower(a.intersect(b)),
            (Interval::Upper(a), Interval::Upper(b)) => Interval::Upper(a.intersect(b)),
            (Interval::Lower(l), Interval::Upper(u)) | (Interval::Upper(u), Interval::Lower(l)) => {
                Self::between(l.clone(), u.clone())
            }
            (Interval::Lower(a), Interval::Intersection(l, u))
            | (Interval::Intersection(l, u), Interval::Lower(a)) => {
                Self::between(a.intersect(l), u.clone())
            }
            (Interval::Upper(a), Interval::Intersection(l, u))
            | (Interval::Intersection(l, u), Interval::Upper(a)) => {
                Self::between(l.clone(), a.intersect(u))
            }
            (Interval::Intersection(l1, u1), Interval::Intersection(l2, u2)) => {
                Self::between(l1.intersect(l2), u1.intersect(u2))
            }
        }
    }
}

impl<T: Successible + Ord + Clone> Interval<T> {
    /// The smallest member, if the interval is bounded below and has one.
    pub fn least(&self) -> Option<T> {
        match self {
            Interval::Lower(l) => l.least(),
            Interval::Intersection(l, u) => l.least().filter(|v| u.contains(v)),
            _ => None,
        }
    }

    /// Members in ascending order.
    ///
    /// `None` when there is no lower bound to start from (`Universe` and bare
    /// upper bounds). The returned iterator is lazy and ends at the first value
    /// past the upper bound, or at the domain maximum.
    /// ```
    /// use ivalgebra::Interval;
    /// let iv = Interval::exclusive_lower(2).intersect(&Interval::inclusive_upper(5));
    /// let members: Vec<i32> = iv.least_to_greatest().unwrap().collect();
    /// assert_eq!(members, vec![3, 4, 5]);
    /// ```
    pub fn least_to_greatest(&self) -> Option<Ascending<T>> {
        match self {
            Interval::Empty => Some(Ascending::exhausted()),
            Interval::Lower(l) => Some(l.iter()),
            Interval::Intersection(l, u) => Some(Ascending::new(l.least(), Some(u.clone()))),
            Interval::Universe | Interval::Upper(_) => None,
        }
    }
}

impl<T: Predecessible + Ord + Clone> Interval<T> {
    /// The largest member, if the interval is bounded above and has one.
    pub fn greatest(&self) -> Option<T> {
        match self {
            Interval::Upper(u) => u.greatest(),
            Interval::Intersection(l, u) => u.greatest().filter(|v| l.contains(v)),
            _ => None,
        }
    }

    /// Members in descending order. Mirror of
    /// [`least_to_greatest`](Interval::least_to_greatest).
    pub fn greatest_to_least(&self) -> Option<Descending<T>> {
        match self {
            Interval::Empty => Some(Descending::exhausted()),
            Interval::Upper(u) => Some(u.iter()),
            Interval::Intersection(l, u) => Some(Descending::new(u.greatest(), Some(l.clone()))),
            Interval::Universe | Interval::Lower(_) => None,
        }
    }
}

impl<T: Successible + Predecessible + Ord + Clone> Interval<T> {
    /// The inclusive `(least, greatest)` pair of a bounded interval with at
    /// least one member.
    pub fn to_closed(&self) -> Option<(T, T)> {
        match (self.least(), self.greatest()) {
            (Some(lo), Some(hi)) if lo <= hi => Some((lo, hi)),
            _ => None,
        }
    }

    /// Rewrite a bounded interval as `[least, strict upper bound)`.
    ///
    /// `None` when the interval is not bounded on both sides, or when its upper
    /// bound is inclusive at the domain maximum so nothing can sit past it.
    /// `Some(MaybeEmpty::Empty)` when there are no members, which includes two
    /// adjacent exclusive bounds.
    /// ```
    /// use ivalgebra::{left_closed_right_open, Interval, Lower, Upper};
    /// let iv = Interval::Intersection(Lower::Exclusive(3), Upper::Inclusive(6));
    /// assert_eq!(iv.to_left_closed_right_open(), Some(left_closed_right_open(4, 7)));
    /// ```
    pub fn to_left_closed_right_open(&self) -> Option<MaybeEmpty<ClosedOpen<T>>> {
        match self {
            Interval::Empty => Some(MaybeEmpty::Empty),
            Interval::Intersection(l, u) => match l.least() {
                None => Some(MaybeEmpty::Empty),
                Some(lo) => u
                    .strict_upper_bound()
                    .map(|hi| left_closed_right_open(lo, hi)),
            },
            Interval::Universe | Interval::Lower(_) | Interval::Upper(_) => None,
        }
    }

    /// Rewrite a bounded interval as `(strict lower bound, greatest]`.
    /// Mirror of [`to_left_closed_right_open`](Interval::to_left_closed_right_open).
    pub fn to_left_open_right_closed(&self) -> Option<MaybeEmpty<OpenClosed<T>>> {
        match self {
            Interval::Empty => Some(MaybeEmpty::Empty),
            Interval::Intersection(l, u) => match u.greatest() {
                None => Some(MaybeEmpty::Empty),
                Some(hi) => l
                    .strict_lower_bound()
                    .map(|lo| left_open_right_closed(lo, hi)),
            },
            Interval::Universe | Interval::Lower(_) | Interval::Upper(_) => None,
        }
    }
}

impl<T: Ord + Clone> BitAnd for Interval<T> {
    type Output = Interval<T>;

    #[inline]
    fn bitand(self, rhs: Interval<T>) -> Interval<T> {
        self.intersect(&rhs)
    }
}

impl<'a, T: Ord + Clone> BitAnd<&'a Interval<T>> for &'a Interval<T> {
    type Output = Interval<T>;

    #[inline]
    fn bitand(self, rhs: &'a Interval<T>) -> Interval<T> {
        self.intersect(rhs)
    }
}

impl<T> From<Lower<T>> for Interval<T> {
    fn from(lower: Lower<T>) -> Self {
        Interval::Lower(lower)
    }
}

impl<T> From<Upper<T>> for Interval<T> {
    fn from(upper: Upper<T>) -> Self {
        Interval::Upper(upper)
    }
}

impl<T> From<RangeFull> for Interval<T> {
    fn from(_: RangeFull) -> Self {
        Interval::Universe
    }
}

impl<T> From<RangeFrom<T>> for Interval<T> {
    fn from(r: RangeFrom<T>) -> Self {
        Interval::inclusive_lower(r.start)
    }
}

impl<T> From<RangeTo<T>> for Interval<T> {
    fn from(r: RangeTo<T>) -> Self {
        Interval::exclusive_upper(r.end)
    }
}

impl<T> From<RangeToInclusive<T>> for Interval<T> {
    fn from(r: RangeToInclusive<T>) -> Self {
        Interval::inclusive_upper(r.end)
    }
}

impl<T: Ord> From<Range<T>> for Interval<T> {
    fn from(r: Range<T>) -> Self {
        Interval::between(Lower::Inclusive(r.start), Upper::Exclusive(r.end))
    }
}

impl<T: Ord> From<RangeInclusive<T>> for Interval<T> {
    fn from(r: RangeInclusive<T>) -> Self {
        let (start, end) = r.into_inner();
        Interval::between(Lower::Inclusive(start), Upper::Inclusive(end))
    }
}

impl<T> TryFrom<Interval<T>> for Lower<T> {
    type Error = IntervalError;

    fn try_from(interval: Interval<T>) -> Result<Self, Self::Error> {
        match interval {
            Interval::Lower(l) => Ok(l),
            other => Err(IntervalError::NotLower {
                found: other.variant_name(),
            }),
        }
    }
}

impl<T> TryFrom<Interval<T>> for Upper<T> {
    type Error = IntervalError;

    fn try_from(interval: Interval<T>) -> Result<Self, Self::Error> {
        match interval {
            Interval::Upper(u) => Ok(u),
            other => Err(IntervalError::NotUpper {
                found: other.variant_name(),
            }),
        }
    }
}

fn fmt_lower<T: fmt::Display>(lower: &Lower<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match lower {
        Lower::Inclusive(v) => write!(f, "[{}", v),
        Lower::Exclusive(v) => write!(f, "({}", v),
    }
}

fn fmt_upper<T: fmt::Display>(upper: &Upper<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match upper {
        Upper::Inclusive(v) => write!(f, "{}]", v),
        Upper::Exclusive(v) => write!(f, "{})", v),
    }
}

impl<T: fmt::Display> fmt::Display for Lower<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_lower(self, f)?;
        write!(f, ", +∞)")
    }
}

impl<T: fmt::Display> fmt::Display for Upper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(-∞, ")?;
        fmt_upper(self, f)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interval::Universe => write!(f, "(-∞, +∞)"),
            Interval::Empty => write!(f, "∅"),
            Interval::Lower(l) => fmt::Display::fmt(l, f),
            Interval::Upper(u) => fmt::Display::fmt(u, f),
            Interval::Intersection(l, u) => {
                fmt_lower(l, f)?;
                write!(f, ", ")?;
                fmt_upper(u, f)
            }
        }
    }
}
