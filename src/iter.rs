//! Lazy enumeration of interval members.
//!
//! Both iterators step one value at a time through [`Successible`] or
//! [`Predecessible`] and stop at the first value that falls outside the
//! opposite bound, or when the domain runs out. Nothing is collected up front,
//! so enumerating `[0, +∞)` over `u64` is as cheap as enumerating `[0, 10)`.
use crate::bound::{Lower, Upper};
use crate::step::{Predecessible, Successible};
use std::iter::FusedIterator;
use tracing::trace;

/// Ascending iterator over the members of an interval.
///
/// Cloning gives an independent iterator from the current position.
#[derive(Debug, Clone)]
pub struct Ascending<T> {
    next: Option<T>,
    until: Option<Upper<T>>,
}

impl<T> Ascending<T> {
    pub(crate) fn new(start: Option<T>, until: Option<Upper<T>>) -> Self {
        Ascending { next: start, until }
    }

    pub(crate) fn exhausted() -> Self {
        Ascending {
            next: None,
            until: None,
        }
    }
}

impl<T> Iterator for Ascending<T>
where
    T: Successible + Ord,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if let Some(until) = &self.until {
            // members are contiguous, the first miss ends the run
            if !until.contains(&current) {
                return None;
            }
        }
        self.next = Successible::next(&current);
        if self.next.is_none() {
            trace!("ascending enumeration reached the domain maximum");
        }
        Some(current)
    }
}

impl<T: Successible + Ord> FusedIterator for Ascending<T> {}

/// Descending iterator over the members of an interval.
///
/// Cloning gives an independent iterator from the current position.
#[derive(Debug, Clone)]
pub struct Descending<T> {
    next: Option<T>,
    until: Option<Lower<T>>,
}

impl<T> Descending<T> {
    pub(crate) fn new(start: Option<T>, until: Option<Lower<T>>) -> Self {
        Descending { next: start, until }
    }

    pub(crate) fn exhausted() -> Self {
        Descending {
            next: None,
            until: None,
        }
    }
}

impl<T> Iterator for Descending<T>
where
    T: Predecessible + Ord,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if let Some(until) = &self.until {
            if !until.contains(&current) {
                return None;
            }
        }
        self.next = current.prev();
        if self.next.is_none() {
            trace!("descending enumeration reached the domain minimum");
        }
        Some(current)
    }
}

impl<T: Predecessible + Ord> FusedIterator for Descending<T> {}
