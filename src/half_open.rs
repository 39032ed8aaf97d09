//! Half-open intervals built from two endpoints.
//!
//! `lower == upper` is a legitimate input that denotes no values at all, so the
//! constructors here never hand back a bare [`Interval`]. They return a
//! [`MaybeEmpty`], which keeps the concrete shape (`[a, b)` or `(a, b]`) of the
//! non-empty case in the type and reports the empty case separately from
//! [`Interval::Empty`].
use crate::bound::{Lower, Upper};
use crate::interval::Interval;
use crate::iter::Ascending;
use crate::step::Successible;

/// Either a constructed, non-empty value or the fact that no such value exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaybeEmpty<I> {
    NonEmpty(I),
    Empty,
}

impl<I> MaybeEmpty<I> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, MaybeEmpty::Empty)
    }

    #[inline]
    pub fn into_option(self) -> Option<I> {
        match self {
            MaybeEmpty::NonEmpty(i) => Some(i),
            MaybeEmpty::Empty => None,
        }
    }

    pub fn as_ref(&self) -> MaybeEmpty<&I> {
        match self {
            MaybeEmpty::NonEmpty(i) => MaybeEmpty::NonEmpty(i),
            MaybeEmpty::Empty => MaybeEmpty::Empty,
        }
    }

    pub fn map<J, F>(self, f: F) -> MaybeEmpty<J>
    where
        F: FnOnce(I) -> J,
    {
        match self {
            MaybeEmpty::NonEmpty(i) => MaybeEmpty::NonEmpty(f(i)),
            MaybeEmpty::Empty => MaybeEmpty::Empty,
        }
    }

    /// Forget the concrete shape. The empty case becomes [`Interval::Empty`].
    pub fn into_interval<T>(self) -> Interval<T>
    where
        I: Into<Interval<T>>,
    {
        match self {
            MaybeEmpty::NonEmpty(i) => i.into(),
            MaybeEmpty::Empty => Interval::Empty,
        }
    }
}

impl<I> From<Option<I>> for MaybeEmpty<I> {
    fn from(opt: Option<I>) -> Self {
        match opt {
            Some(i) => MaybeEmpty::NonEmpty(i),
            None => MaybeEmpty::Empty,
        }
    }
}

/// `[lower, upper)` with `lower < upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClosedOpen<T> {
    lower: T,
    upper: T,
}

/// `(lower, upper]` with `lower < upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpenClosed<T> {
    lower: T,
    upper: T,
}

/// Build `[lower, upper)`, or report that it is empty.
/// ```
/// use ivalgebra::{left_closed_right_open, Interval};
/// let iv: Interval<i32> = left_closed_right_open(3, 7).into_interval();
/// assert!(iv.contains(&3));
/// assert!(!iv.contains(&7));
/// assert!(left_closed_right_open(3, 3).is_empty());
/// ```
pub fn left_closed_right_open<T: Ord>(lower: T, upper: T) -> MaybeEmpty<ClosedOpen<T>> {
    if lower < upper {
        MaybeEmpty::NonEmpty(ClosedOpen { lower, upper })
    } else {
        MaybeEmpty::Empty
    }
}

/// Build `(lower, upper]`, or report that it is empty.
pub fn left_open_right_closed<T: Ord>(lower: T, upper: T) -> MaybeEmpty<OpenClosed<T>> {
    if lower < upper {
        MaybeEmpty::NonEmpty(OpenClosed { lower, upper })
    } else {
        MaybeEmpty::Empty
    }
}

impl<T> ClosedOpen<T> {
    #[inline]
    pub fn start(&self) -> &T {
        &self.lower
    }

    #[inline]
    pub fn end(&self) -> &T {
        &self.upper
    }

    pub fn into_bounds(self) -> (Lower<T>, Upper<T>) {
        (Lower::Inclusive(self.lower), Upper::Exclusive(self.upper))
    }
}

impl<T: Clone> ClosedOpen<T> {
    pub fn lower(&self) -> Lower<T> {
        Lower::Inclusive(self.lower.clone())
    }

    pub fn upper(&self) -> Upper<T> {
        Upper::Exclusive(self.upper.clone())
    }
}

impl<T: Ord> ClosedOpen<T> {
    #[inline]
    pub fn contains(&self, t: &T) -> bool {
        &self.lower <= t && t < &self.upper
    }
}

impl<T> OpenClosed<T> {
    #[inline]
    pub fn start(&self) -> &T {
        &self.lower
    }

    #[inline]
    pub fn end(&self) -> &T {
        &self.upper
    }

    pub fn into_bounds(self) -> (Lower<T>, Upper<T>) {
        (Lower::Exclusive(self.lower), Upper::Inclusive(self.upper))
    }
}

impl<T: Clone> OpenClosed<T> {
    pub fn lower(&self) -> Lower<T> {
        Lower::Exclusive(self.lower.clone())
    }

    pub fn upper(&self) -> Upper<T> {
        Upper::Inclusive(self.upper.clone())
    }
}

impl<T: Ord> OpenClosed<T> {
    #[inline]
    pub fn contains(&self, t: &T) -> bool {
        &self.lower < t && t <= &self.upper
    }
}

// lower < upper holds by construction, so the pair is always a valid Intersection.
impl<T> From<ClosedOpen<T>> for Interval<T> {
    fn from(iv: ClosedOpen<T>) -> Self {
        let (lower, upper) = iv.into_bounds();
        Interval::Intersection(lower, upper)
    }
}

impl<T> From<OpenClosed<T>> for Interval<T> {
    fn from(iv: OpenClosed<T>) -> Self {
        let (lower, upper) = iv.into_bounds();
        Interval::Intersection(lower, upper)
    }
}

impl<T: Successible + Ord> IntoIterator for ClosedOpen<T> {
    type Item = T;
    type IntoIter = Ascending<T>;

    fn into_iter(self) -> Ascending<T> {
        Ascending::new(Some(self.lower), Some(Upper::Exclusive(self.upper)))
    }
}

impl<T: Successible + Ord> IntoIterator for OpenClosed<T> {
    type Item = T;
    type IntoIter = Ascending<T>;

    fn into_iter(self) -> Ascending<T> {
        Ascending::new(self.lower.next(), Some(Upper::Inclusive(self.upper)))
    }
}
