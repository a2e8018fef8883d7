//! Review intervals a user can pick after revealing a solution.
//!
//! The backend turns the chosen interval into the next revision date; the
//! client only ever reports which of the fixed choices was made.

use std::fmt;

/// Interval choices in days, in the order they are offered.
pub const REVIEW_INTERVALS: [u32; 5] = [2, 4, 8, 16, 30];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval(u32);

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0} days is not one of the review intervals")]
pub struct InvalidInterval(pub u32);

impl Interval {
    /// Every valid interval, shortest first.
    pub fn all() -> impl Iterator<Item = Interval> {
        REVIEW_INTERVALS.into_iter().map(Interval)
    }

    pub fn days(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Interval {
    type Error = InvalidInterval;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        if REVIEW_INTERVALS.contains(&days) {
            Ok(Interval(days))
        } else {
            Err(InvalidInterval(days))
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Days", self.0)
    }
}
