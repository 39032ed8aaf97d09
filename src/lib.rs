//! This crate provides an interval type over any totally ordered domain, closed
//! under intersection.
//! ## Features
//! - Seven shapes: the whole domain, nothing, a lower bound, an upper bound
//!   (each inclusive or exclusive), and a lower and upper bound together.
//! - Intersection of any two intervals is another interval. Pairs of bounds
//!   that leave no room between them collapse to `Empty`.
//! - Lazy enumeration of members on domains with a successor / predecessor
//!   (all primitive integers, `char`, `bool`).
//! - Half-open constructors that report emptiness instead of hiding it.
//! - A `Monoid` implementation (identity = everything, combine = intersect) for
//!   folding intervals in aggregation code.
//!
//! ## Details:
//!
//! ```text
//!                 0  1  2  3  4  5  6  7  8  9
//! [3, +∞)                  X  X  X  X  X  X  X ...
//! (-∞, 7)     ... X  X  X  X  X  X  X
//! [3, 7)                   X  X  X  X
//! [5, +∞) & (-∞, 4]        (nothing: Empty)
//! ```
//!
//! ```rust
//!    use ivalgebra::{Interval, Monoid};
//!    type Iv = Interval<i32>;
//!
//!    let window = Iv::combine_all(vec![Iv::inclusive_lower(3), Iv::exclusive_upper(7)]);
//!    assert_eq!(window.to_string(), "[3, 7)");
//!    assert_eq!(window.least_to_greatest().unwrap().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
//!
//!    let nothing = Iv::inclusive_lower(5) & Iv::inclusive_upper(4);
//!    assert!(nothing.is_empty());
//! ```
mod bound;
mod error;
mod half_open;
mod interval;
mod iter;
mod monoid;
mod step;

// Rexport to flatten structure
pub use self::bound::{Lower, Upper};
pub use self::error::IntervalError;
pub use self::half_open::{
    left_closed_right_open, left_open_right_closed, ClosedOpen, MaybeEmpty, OpenClosed,
};
pub use self::interval::Interval;
pub use self::iter::{Ascending, Descending};
pub use self::monoid::Monoid;
pub use self::step::{Predecessible, Successible};

// Check the algebra against plain set semantics over a domain small enough to
// scan completely.
#[cfg(test)]
mod tests {
    use crate::bound::{Lower, Upper};
    use crate::half_open::{left_closed_right_open, left_open_right_closed};
    use crate::interval::Interval;
    use crate::monoid::Monoid;
    use proptest::prelude::*;
    use std::ops::RangeInclusive;

    type Iv = Interval<i8>;

    fn domain() -> RangeInclusive<i8> {
        i8::MIN..=i8::MAX
    }

    fn same_members(a: &Iv, b: &Iv) -> bool {
        domain().all(|t| a.contains(&t) == b.contains(&t))
    }

    fn lower() -> impl Strategy<Value = Lower<i8>> {
        prop_oneof![
            any::<i8>().prop_map(Lower::Inclusive),
            any::<i8>().prop_map(Lower::Exclusive),
        ]
    }

    fn upper() -> impl Strategy<Value = Upper<i8>> {
        prop_oneof![
            any::<i8>().prop_map(Upper::Inclusive),
            any::<i8>().prop_map(Upper::Exclusive),
        ]
    }

    // Raw intersections are included on purpose: the laws hold even for pairs
    // `between` would have collapsed.
    fn interval() -> impl Strategy<Value = Iv> {
        prop_oneof![
            Just(Iv::Universe),
            Just(Iv::Empty),
            lower().prop_map(Iv::Lower),
            upper().prop_map(Iv::Upper),
            (lower(), upper()).prop_map(|(l, u)| Iv::Intersection(l, u)),
            (lower(), upper()).prop_map(|(l, u)| Iv::between(l, u)),
        ]
    }

    proptest! {
        #[test]
        fn intersection_is_conjunction(x in interval(), y in interval(), t: i8) {
            prop_assert_eq!(x.intersect(&y).contains(&t), x.contains(&t) && y.contains(&t));
        }

        #[test]
        fn empty_absorbs(x in interval()) {
            prop_assert_eq!(Iv::Empty.intersect(&x), Iv::Empty);
            prop_assert_eq!(x.intersect(&Iv::Empty), Iv::Empty);
        }

        #[test]
        fn universe_is_identity(x in interval()) {
            prop_assert_eq!(Iv::Universe.intersect(&x), x);
            prop_assert_eq!(x.intersect(&Iv::Universe), x);
            prop_assert_eq!(Iv::identity().combine(&x), x);
        }

        #[test]
        fn intersection_is_idempotent(x in interval()) {
            prop_assert!(same_members(&x.intersect(&x), &x));
        }

        #[test]
        fn intersection_is_commutative(x in interval(), y in interval()) {
            prop_assert_eq!(x.intersect(&y), y.intersect(&x));
        }

        #[test]
        fn intersection_is_associative(x in interval(), y in interval(), z in interval()) {
            let left = x.intersect(&y).intersect(&z);
            let right = x.intersect(&y.intersect(&z));
            prop_assert!(same_members(&left, &right));
            prop_assert!(same_members(&x.combine(&y).combine(&z), &x.combine(&y.combine(&z))));
        }

        #[test]
        fn closed_open_construction(a: i8, b: i8) {
            let built = left_closed_right_open(a, b);
            prop_assert_eq!(built.is_empty(), a >= b);
            let iv: Iv = built.into_interval();
            for t in domain() {
                prop_assert_eq!(iv.contains(&t), a <= t && t < b);
            }
        }

        #[test]
        fn open_closed_construction(a: i8, b: i8) {
            let built = left_open_right_closed(a, b);
            prop_assert_eq!(built.is_empty(), a >= b);
            let iv: Iv = built.into_interval();
            for t in domain() {
                prop_assert_eq!(iv.contains(&t), a < t && t <= b);
            }
        }

        #[test]
        fn ascending_enumeration_matches_contains(x in interval()) {
            if let Some(members) = x.least_to_greatest() {
                let expected: Vec<i8> = domain().filter(|t| x.contains(t)).collect();
                prop_assert_eq!(members.collect::<Vec<i8>>(), expected);
            }
        }

        #[test]
        fn descending_enumeration_matches_contains(x in interval()) {
            if let Some(members) = x.greatest_to_least() {
                let expected: Vec<i8> = domain().rev().filter(|t| x.contains(t)).collect();
                prop_assert_eq!(members.collect::<Vec<i8>>(), expected);
            }
        }

        #[test]
        fn least_and_greatest_are_extreme_members(x in interval()) {
            let members: Vec<i8> = domain().filter(|t| x.contains(t)).collect();
            if x.lower().is_some() {
                prop_assert_eq!(x.least(), members.first().copied());
            }
            if x.upper().is_some() {
                prop_assert_eq!(x.greatest(), members.last().copied());
            }
        }

        #[test]
        fn half_open_rewrites_keep_members(x in interval()) {
            match x.to_left_closed_right_open() {
                Some(rewritten) => prop_assert!(same_members(&rewritten.into_interval(), &x)),
                None => prop_assert!(
                    !matches!(x, Iv::Intersection(..)) || x.upper() == Some(&Upper::Inclusive(i8::MAX))
                ),
            }
            match x.to_left_open_right_closed() {
                Some(rewritten) => prop_assert!(same_members(&rewritten.into_interval(), &x)),
                None => prop_assert!(
                    !matches!(x, Iv::Intersection(..)) || x.lower() == Some(&Lower::Inclusive(i8::MIN))
                ),
            }
        }

        #[test]
        fn strictly_increasing_map_preserves_members(x in interval(), t: i8) {
            let widened = x.map_monotonic(|v| i16::from(v) * 3 + 1);
            prop_assert_eq!(widened.contains(&(i16::from(t) * 3 + 1)), x.contains(&t));
        }
    }

    #[test]
    fn test_concrete_scenarios() {
        let iv = Iv::inclusive_lower(3).intersect(&Iv::exclusive_upper(7));
        assert_eq!(domain().filter(|t| iv.contains(t)).collect::<Vec<_>>(), vec![3, 4, 5, 6]);
        assert!(left_open_right_closed(3, 3).is_empty());
        let edge = Iv::inclusive_lower(i8::MAX).intersect(&Iv::exclusive_upper(i8::MAX));
        assert_eq!(edge, Iv::Empty);
        let degenerate = Iv::inclusive_lower(5).intersect(&Iv::inclusive_upper(4));
        assert!(domain().all(|t| !degenerate.contains(&t)));
    }

    #[test]
    fn test_every_variant_pair_is_total() {
        let values = [i8::MIN, -1, 0, 1, i8::MAX];
        let mut all = vec![Iv::Universe, Iv::Empty];
        for &v in values.iter() {
            all.push(Iv::inclusive_lower(v));
            all.push(Iv::exclusive_lower(v));
            all.push(Iv::inclusive_upper(v));
            all.push(Iv::exclusive_upper(v));
            for &w in values.iter() {
                all.push(Iv::Intersection(Lower::Inclusive(v), Upper::Exclusive(w)));
                all.push(Iv::Intersection(Lower::Exclusive(v), Upper::Inclusive(w)));
            }
        }
        for x in all.iter() {
            for y in all.iter() {
                let z = x.intersect(y);
                assert!(domain().all(|t| z.contains(&t) == (x.contains(&t) && y.contains(&t))));
            }
        }
    }
}
