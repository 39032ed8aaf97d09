use thiserror::Error;

/// Failure to view an [`Interval`](crate::Interval) as one specific bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("expected a lower bound, found {found} interval")]
    NotLower { found: &'static str },
    #[error("expected an upper bound, found {found} interval")]
    NotUpper { found: &'static str },
}
