//! `YearMonth` — a (year, month) pair with free-running month arithmetic.
//!
//! The constructor accepts *any* month index and folds out-of-range values
//! into the neighbouring years, so navigation is plain ±1 arithmetic:
//! `YearMonth::new(2024, 13)` is January 2025 and `YearMonth::new(2024, 0)`
//! is December 2023.

use std::fmt;

use crate::date::{days_in_month, Date};
use crate::error::Result;
use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar month in a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a year-month, normalising any out-of-range month index.
    ///
    /// `month` is 1-based (1 = January).
    pub fn new(year: i32, month: i32) -> Self {
        // Count months from year 0 and fold back; i64 so extreme inputs
        // cannot overflow the intermediate.
        let months = year as i64 * 12 + (month as i64 - 1);
        let year = months.div_euclid(12) as i32;
        let number = months.rem_euclid(12) as u8 + 1;
        YearMonth {
            year,
            month: Month::from_number(number).expect("rem_euclid always in 1..=12"),
        }
    }

    /// The year-month containing `date`.
    pub fn from_date(date: Date) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Number of days in this month (leap-aware).
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Weekday of the first day of the month.  Its grid index is also the
    /// number of leading blanks in the Sunday-first layout.
    pub fn first_weekday(&self) -> Weekday {
        self.first_day().weekday()
    }

    /// The first day of the month.
    pub fn first_day(&self) -> Date {
        Date::from_parts_unchecked(self.year, self.month, 1)
    }

    /// The date of a given day of this month.
    pub fn date(&self, day: u8) -> Result<Date> {
        Date::new(self.year, self.month.number(), day)
    }

    /// Iterate over the days of this month as dates.
    pub fn dates(&self) -> impl Iterator<Item = Date> {
        let YearMonth { year, month } = *self;
        (1..=self.days_in_month()).map(move |day| Date::from_parts_unchecked(year, month, day))
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    // ── Navigation ───────────────────────────────────────────────────────────

    /// The month `n` steps away (negative for earlier months).
    pub fn offset(&self, n: i32) -> Self {
        Self::new(self.year, self.month.number() as i32 + n)
    }

    /// The following month.
    pub fn next(&self) -> Self {
        self.offset(1)
    }

    /// The preceding month.
    pub fn previous(&self) -> Self {
        self.offset(-1)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.long_name(), self.year)
    }
}

impl From<Date> for YearMonth {
    fn from(date: Date) -> Self {
        Self::from_date(date)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
