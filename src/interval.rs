use std::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::{Bound, RangeInclusive},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A closed interval `[low, high]` over a totally-ordered endpoint type.
///
/// Both endpoints share the type `R`, so an interval can never be built from
/// mismatched endpoint kinds. The endpoints are fixed at construction; to
/// change an interval stored in an [`IntervalTree`], remove it and insert a
/// replacement.
///
/// Within a tree an [`Interval`] is placed by its `low` endpoint alone, see
/// [`Interval::cmp_key()`]. The derived equality compares both endpoints.
///
/// [`IntervalTree`]: crate::IntervalTree
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<R> {
    low: R,
    high: R,
}

impl<R> Interval<R> {
    /// Construct a new interval.
    ///
    /// This constructor does not require `low <= high`; use
    /// [`Interval::checked()`] to reject reversed endpoints.
    pub fn new(low: R, high: R) -> Self {
        Self { low, high }
    }

    /// Construct a new interval, failing with [`Error::InvalidInterval`] if
    /// `low > high`.
    pub fn checked(low: R, high: R) -> Result<Self, Error>
    where
        R: Ord,
    {
        if low > high {
            return Err(Error::InvalidInterval {
                reason: "low endpoint is greater than high endpoint",
            });
        }

        Ok(Self { low, high })
    }

    pub fn low(&self) -> &R {
        &self.low
    }

    pub fn high(&self) -> &R {
        &self.high
    }

    /// Explode this [`Interval`] into its `(low, high)` endpoints.
    pub fn into_inner(self) -> (R, R) {
        (self.low, self.high)
    }

    /// Order `self` against `other` by the `low` endpoint only, the ordering
    /// used to place intervals in the tree.
    pub fn cmp_key(&self, other: &Self) -> Ordering
    where
        R: Ord,
    {
        self.low.cmp(&other.low)
    }

    /// Returns true if the closed intervals `self` and `other` share at least
    /// one point.
    pub fn overlaps(&self, other: &Self) -> bool
    where
        R: Ord,
    {
        self.low <= other.high && other.low <= self.high
    }

    /// Returns true if `point` lies within `[low, high]`.
    pub fn contains_point(&self, point: &R) -> bool
    where
        R: Ord,
    {
        self.low <= *point && *point <= self.high
    }
}

impl<R> From<RangeInclusive<R>> for Interval<R> {
    fn from(value: RangeInclusive<R>) -> Self {
        let (low, high) = value.into_inner();
        Self { low, high }
    }
}

/// Build an [`Interval`] from a pair of bounds.
///
/// Both bounds must be [`Bound::Included`]; an [`Bound::Unbounded`] bound is a
/// missing endpoint, and an [`Bound::Excluded`] bound cannot be expressed by a
/// closed interval.
impl<R> TryFrom<(Bound<R>, Bound<R>)> for Interval<R> {
    type Error = Error;

    fn try_from(value: (Bound<R>, Bound<R>)) -> Result<Self, Self::Error> {
        match value {
            (Bound::Included(low), Bound::Included(high)) => Ok(Self { low, high }),
            (Bound::Unbounded, _) | (_, Bound::Unbounded) => Err(Error::InvalidInterval {
                reason: "missing endpoint",
            }),
            _ => Err(Error::InvalidInterval {
                reason: "exclusive endpoint",
            }),
        }
    }
}

impl<R> Display for Interval<R>
where
    R: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
