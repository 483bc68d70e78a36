//! Simulation time model.
//!
//! # Design
//!
//! One tick is one simulated month.  Two representations coexist:
//!
//! - `Tick`: a monotonically increasing counter of months elapsed since the
//!   start of the run.  Used by reporters to label rows.
//! - `Calendar`: the `(year, month)` date the ecosystem is currently in.
//!   The stop condition and the seasonal environment model are both driven
//!   by the calendar, never by the tick counter.
//!
//! Months are zero-based (`0` = January) to keep the seasonal angle
//! arithmetic exact; `Display` prints them one-based.

use std::cmp::Ordering;
use std::fmt;

use crate::{EcoError, EcoResult};

/// Months per simulated year.
pub const MONTHS_PER_YEAR: u8 = 12;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of months elapsed since the start of the run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Calendar ─────────────────────────────────────────────────────────────────

/// A `(year, month)` date.  Ordered chronologically.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calendar {
    pub year:  i32,
    /// Zero-based month, `0..=11`.
    pub month: u8,
}

impl Calendar {
    /// Build a date, rejecting months outside `0..=11`.
    pub fn new(year: i32, month: u8) -> EcoResult<Self> {
        if month >= MONTHS_PER_YEAR {
            return Err(EcoError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// January of `year`.
    #[inline]
    pub const fn january(year: i32) -> Self {
        Self { year, month: 0 }
    }

    /// Move to the next month, rolling into January of the next year after
    /// December.
    #[inline]
    pub fn advance(&mut self) {
        self.month += 1;
        if self.month == MONTHS_PER_YEAR {
            self.month = 0;
            self.year += 1;
        }
    }

    /// The date `n` months after `self`.
    pub fn plus_months(self, n: u32) -> Self {
        let index = self.month_index() + i64::from(n);
        Self::from_month_index(index)
    }

    /// Months since January of year 0.  Used for ordering and differences.
    #[inline]
    pub fn month_index(self) -> i64 {
        i64::from(self.year) * i64::from(MONTHS_PER_YEAR) + i64::from(self.month)
    }

    fn from_month_index(index: i64) -> Self {
        let per_year = i64::from(MONTHS_PER_YEAR);
        Self {
            year:  index.div_euclid(per_year) as i32,
            month: index.rem_euclid(per_year) as u8,
        }
    }

    /// Number of months from `self` until `later`; zero if `later` is not
    /// after `self`.
    #[inline]
    pub fn months_until(self, later: Calendar) -> u64 {
        (later.month_index() - self.month_index()).max(0) as u64
    }
}

impl Ord for Calendar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.month_index().cmp(&other.month_index())
    }
}

impl PartialOrd for Calendar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}
