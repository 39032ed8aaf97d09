//! One-sided bounds.
//!
//! A [`Lower`] restricts values from below and an [`Upper`] restricts them from
//! above. Both carry exactly one domain value and say whether that value itself
//! belongs to the bound. These are the only things an
//! [`Interval::Intersection`](crate::Interval::Intersection) can be built from.
use crate::iter::{Ascending, Descending};
use crate::step::{Predecessible, Successible};
use std::cmp::Ordering;

/// A lower bound: `v <= t` when inclusive, `v < t` when exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
pub enum Lower<T> {
    Inclusive(T),
    Exclusive(T),
}

/// An upper bound: `t <= v` when inclusive, `t < v` when exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
pub enum Upper<T> {
    Inclusive(T),
    Exclusive(T),
}

impl<T> Lower<T> {
    /// The value the bound is placed at.
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Lower::Inclusive(v) | Lower::Exclusive(v) => v,
        }
    }

    /// Take the value out, dropping the bound kind.
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Lower::Inclusive(v) | Lower::Exclusive(v) => v,
        }
    }

    #[inline]
    pub fn is_inclusive(&self) -> bool {
        matches!(self, Lower::Inclusive(_))
    }

    /// Move the bound through `f`, keeping its kind.
    ///
    /// `f` has to be non-decreasing for the result to mean anything. That is
    /// left to the caller.
    pub fn map<U, F>(self, f: F) -> Lower<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Lower::Inclusive(v) => Lower::Inclusive(f(v)),
            Lower::Exclusive(v) => Lower::Exclusive(f(v)),
        }
    }
}

impl<T: Ord> Lower<T> {
    #[inline]
    pub fn contains(&self, t: &T) -> bool {
        match self {
            Lower::Inclusive(v) => t >= v,
            Lower::Exclusive(v) => t > v,
        }
    }

    /// Check whether at least one value could satisfy both `self` and `upper`.
    ///
    /// Only the ordering is consulted. For two exclusive bounds on a discrete
    /// domain this can answer `true` although nothing lies between them, e.g.
    /// `(3, ..)` against `(.., 4)` over integers. Telling those apart needs
    /// [`Successible`], so the looser answer is kept and the resulting
    /// intersection simply has no members.
    /// ```
    /// use ivalgebra::{Lower, Upper};
    /// assert!(Lower::Inclusive(4).intersects(&Upper::Inclusive(4)));
    /// assert!(!Lower::Inclusive(4).intersects(&Upper::Exclusive(4)));
    /// assert!(Lower::Exclusive(3).intersects(&Upper::Exclusive(4)));
    /// ```
    #[inline]
    pub fn intersects(&self, upper: &Upper<T>) -> bool {
        match (self, upper) {
            (Lower::Inclusive(a), Upper::Inclusive(b)) => a <= b,
            (Lower::Inclusive(a), Upper::Exclusive(b))
            | (Lower::Exclusive(a), Upper::Inclusive(b))
            | (Lower::Exclusive(a), Upper::Exclusive(b)) => a < b,
        }
    }
}

impl<T: Ord + Clone> Lower<T> {
    /// Keep the tighter of two lower bounds. On equal values the exclusive one
    /// is tighter.
    pub fn intersect(&self, other: &Lower<T>) -> Lower<T> {
        match self.value().cmp(other.value()) {
            Ordering::Greater => self.clone(),
            Ordering::Less => other.clone(),
            Ordering::Equal if self.is_inclusive() => other.clone(),
            Ordering::Equal => self.clone(),
        }
    }
}

impl<T: Successible + Clone> Lower<T> {
    /// The smallest value admitted by the bound.
    ///
    /// `None` for an exclusive bound at the domain maximum, which admits nothing.
    pub fn least(&self) -> Option<T> {
        match self {
            Lower::Inclusive(v) => Some(v.clone()),
            Lower::Exclusive(v) => v.next(),
        }
    }
}

impl<T: Successible + Ord + Clone> Lower<T> {
    /// Every admitted value in ascending order, up to the domain maximum.
    pub fn iter(&self) -> Ascending<T> {
        Ascending::new(self.least(), None)
    }
}

impl<T: Predecessible + Clone> Lower<T> {
    /// The greatest value *not* admitted by the bound.
    ///
    /// `None` for an inclusive bound at the domain minimum.
    pub fn strict_lower_bound(&self) -> Option<T> {
        match self {
            Lower::Inclusive(v) => v.prev(),
            Lower::Exclusive(v) => Some(v.clone()),
        }
    }
}

impl<T> Upper<T> {
    /// The value the bound is placed at.
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Upper::Inclusive(v) | Upper::Exclusive(v) => v,
        }
    }

    /// Take the value out, dropping the bound kind.
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Upper::Inclusive(v) | Upper::Exclusive(v) => v,
        }
    }

    #[inline]
    pub fn is_inclusive(&self) -> bool {
        matches!(self, Upper::Inclusive(_))
    }

    /// Move the bound through `f`, keeping its kind. Same caveat as
    /// [`Lower::map`].
    pub fn map<U, F>(self, f: F) -> Upper<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Upper::Inclusive(v) => Upper::Inclusive(f(v)),
            Upper::Exclusive(v) => Upper::Exclusive(f(v)),
        }
    }
}

impl<T: Ord> Upper<T> {
    #[inline]
    pub fn contains(&self, t: &T) -> bool {
        match self {
            Upper::Inclusive(v) => t <= v,
            Upper::Exclusive(v) => t < v,
        }
    }

    /// Mirror of [`Lower::intersects`].
    #[inline]
    pub fn intersects(&self, lower: &Lower<T>) -> bool {
        lower.intersects(self)
    }
}

impl<T: Ord + Clone> Upper<T> {
    /// Keep the tighter of two upper bounds. On equal values the exclusive one
    /// is tighter.
    pub fn intersect(&self, other: &Upper<T>) -> Upper<T> {
        match self.value().cmp(other.value()) {
            Ordering::Less => self.clone(),
            Ordering::Greater => other.clone(),
            Ordering::Equal if self.is_inclusive() => other.clone(),
            Ordering::Equal => self.clone(),
        }
    }
}

impl<T: Predecessible + Clone> Upper<T> {
    /// The largest value admitted by the bound.
    ///
    /// `None` for an exclusive bound at the domain minimum.
    pub fn greatest(&self) -> Option<T> {
        match self {
            Upper::Inclusive(v) => Some(v.clone()),
            Upper::Exclusive(v) => v.prev(),
        }
    }
}

impl<T: Predecessible + Ord + Clone> Upper<T> {
    /// Every admitted value in descending order, down to the domain minimum.
    pub fn iter(&self) -> Descending<T> {
        Descending::new(self.greatest(), None)
    }
}

impl<T: Successible + Clone> Upper<T> {
    /// The smallest value *not* admitted by the bound.
    ///
    /// `None` for an inclusive bound at the domain maximum.
    pub fn strict_upper_bound(&self) -> Option<T> {
        match self {
            Upper::Inclusive(v) => v.next(),
            Upper::Exclusive(v) => Some(v.clone()),
        }
    }
}
