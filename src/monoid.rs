use crate::interval::Interval;

/// An identity element and an associative way to combine two values.
///
/// This is the hook aggregation code uses to fold a stream of values without
/// knowing what they are.
pub trait Monoid: Sized {
    // functions that must be implemented
    fn identity() -> Self;
    fn combine(&self, other: &Self) -> Self;

    /// Fold every item into one value, starting from the identity.
    fn combine_all<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .fold(Self::identity(), |acc, item| acc.combine(&item))
    }
}

/// Intervals combine by intersection, starting from the whole domain.
impl<T: Ord + Clone> Monoid for Interval<T> {
    #[inline]
    fn identity() -> Self {
        Interval::Universe
    }

    #[inline]
    fn combine(&self, other: &Self) -> Self {
        self.intersect(other)
    }

    // Empty absorbs everything after it, so stop pulling once it shows up.
    fn combine_all<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut acc = Interval::Universe;
        for item in items {
            acc = acc.intersect(&item);
            if acc.is_empty() {
                break;
            }
        }
        acc
    }
}
