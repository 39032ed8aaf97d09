//! Stepping capabilities for discrete domains.
//!
//! Ordering alone is enough to test containment and to intersect intervals.
//! Enumerating the members of an interval, or asking for its least and greatest
//! element, additionally needs to know which value comes directly after (or
//! before) another one.

/// A domain where every value except the maximum has a direct successor.
///
/// Implementations must agree with `Ord`: whenever `v.next()` is `Some(n)`,
/// `n > v` holds and no value lies strictly between the two.
pub trait Successible: Sized {
    /// The value directly after `self`, or `None` at the domain maximum.
    fn next(&self) -> Option<Self>;
}

/// A domain where every value except the minimum has a direct predecessor.
///
/// Implementations must agree with `Ord`: whenever `v.prev()` is `Some(p)`,
/// `p < v` holds and no value lies strictly between the two.
pub trait Predecessible: Sized {
    /// The value directly before `self`, or `None` at the domain minimum.
    fn prev(&self) -> Option<Self>;
}

macro_rules! impl_step_for_int {
    ($($t:ty),*) => {
        $(
            impl Successible for $t {
                #[inline]
                fn next(&self) -> Option<Self> {
                    self.checked_add(1)
                }
            }

            impl Predecessible for $t {
                #[inline]
                fn prev(&self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

impl_step_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// Scalar values skip the surrogate range D800..=DFFF.
impl Successible for char {
    fn next(&self) -> Option<Self> {
        match *self {
            '\u{D7FF}' => Some('\u{E000}'),
            c => std::char::from_u32(c as u32 + 1),
        }
    }
}

impl Predecessible for char {
    fn prev(&self) -> Option<Self> {
        match *self {
            '\u{E000}' => Some('\u{D7FF}'),
            c => (c as u32).checked_sub(1).and_then(std::char::from_u32),
        }
    }
}

impl Successible for bool {
    fn next(&self) -> Option<Self> {
        if *self {
            None
        } else {
            Some(true)
        }
    }
}

impl Predecessible for bool {
    fn prev(&self) -> Option<Self> {
        if *self {
            Some(false)
        } else {
            None
        }
    }
}
