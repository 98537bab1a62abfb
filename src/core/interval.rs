use std::fmt::{Debug, Formatter};

use chrono::{DateTime, Local, TimeDelta};

use crate::core::timeline::overlaps;

#[derive(Copy, Clone, Eq, PartialEq)]
#[must_use]
pub struct Interval {
    /// Inclusive.
    pub start: DateTime<Local>,

    /// Exclusive.
    pub end: DateTime<Local>,
}

impl Debug for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl Interval {
    pub const fn new(start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self { start, end }
    }

    /// Build an interval from two instants given in any order.
    pub fn ordered(a: DateTime<Local>, b: DateTime<Local>) -> Self {
        if a <= b { Self::new(a, b) } else { Self::new(b, a) }
    }

    #[must_use]
    pub fn duration(self) -> TimeDelta {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// See [`overlaps`] for the exact boundary policy.
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        overlaps(self.start, self.end, other.start, other.end)
    }
}
