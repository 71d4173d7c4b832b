//! Calendar dates for the scheduler.
//!
//! The calendar is deliberately simple: every month has 30 days and every
//! year has 12 months. That keeps date arithmetic exact and deterministic,
//! which matters more to the scheduler than astronomical accuracy.

use std::cmp::Ordering;
use std::fmt;

use crate::queue::{QueueError, QueuePriority};

/// Days per month in the scheduler calendar.
pub const DAYS_IN_MONTH: u8 = 30;

/// Months per year in the scheduler calendar.
pub const MONTHS_IN_YEAR: u8 = 12;

/// A calendar date.
///
/// Field order matters: the derived `Ord` compares year, then month, then
/// day, which is chronological order.
///
/// # Example
///
/// ```
/// use eventbook::Date;
///
/// let earlier = Date::new(1, 1, 2026).unwrap();
/// let later = Date::new(2, 1, 2026).unwrap();
/// assert!(earlier < later);
/// assert!(Date::new(31, 1, 2026).is_none()); // months have 30 days
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// Create a date, validating the day and month ranges.
    ///
    /// Returns `None` when `day` is outside `1..=30` or `month` outside
    /// `1..=12`. Any year is valid.
    pub fn new(day: u8, month: u8, year: i32) -> Option<Self> {
        if day < 1 || day > DAYS_IN_MONTH {
            return None;
        }
        if month < 1 || month > MONTHS_IN_YEAR {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Day of month, `1..=30`.
    #[inline]
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Month of year, `1..=12`.
    #[inline]
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Year (any value, including negative).
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Advance this date by one day, rolling months and years over.
    pub fn tick(&mut self) {
        if self.day < DAYS_IN_MONTH {
            self.day += 1;
            return;
        }
        self.day = 1;
        if self.month < MONTHS_IN_YEAR {
            self.month += 1;
            return;
        }
        self.month = 1;
        self.year += 1;
    }

    /// The date `days` ticks after this one.
    pub fn plus_days(&self, days: u32) -> Self {
        let mut date = self.clone();
        for _ in 0..days {
            date.tick();
        }
        date
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.day, self.month, self.year)
    }
}

/// Date-keyed queues serve the *soonest* date first, so an earlier date
/// outranks a later one. This is the reverse of chronological `Ord`.
impl QueuePriority for Date {
    fn try_clone(&self) -> Result<Self, QueueError> {
        Ok(self.clone())
    }

    fn compare(&self, other: &Self) -> Ordering {
        other.cmp(self)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
