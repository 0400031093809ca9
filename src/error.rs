use thiserror::Error;

/// Errors returned by [`Interval`] construction and [`IntervalTree`] lookups.
///
/// None of these errors leave an [`IntervalTree`] in an invalid state.
///
/// [`Interval`]: crate::Interval
/// [`IntervalTree`]: crate::IntervalTree
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The interval endpoints are missing, not inclusive, or out of order.
    #[error("invalid interval: {reason}")]
    InvalidInterval { reason: &'static str },

    /// No element exists at the requested in-order rank.
    #[error("no element at rank {rank} (tree holds {len})")]
    NotFound { rank: usize, len: usize },
}

/// Convenience alias for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
