//! `Date` — a civil calendar date.
//!
//! Dates are plain (year, month, day) triples over the proleptic Gregorian
//! calendar; weekday and Julian day number are derived from a day count
//! anchored at **1900-01-01** (day number 1, a Monday).  Everything is pure
//! integer arithmetic, valid for any `i32` year, and there is no clock and no
//! timezone anywhere: a `Date` always means the calendar date as written.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: Month,
    day: u8,
}

impl Date {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        let month = Month::from_number(month).ok_or(Error::InvalidMonth {
            month: month as i32,
        })?;
        let max = days_in_month(year, month);
        if day == 0 || day > max {
            return Err(Error::InvalidDay {
                year,
                month: month.number(),
                day,
                max,
            });
        }
        Ok(Date { year, month, day })
    }

    /// Create a date from already-validated parts.
    pub(crate) fn from_parts_unchecked(year: i32, month: Month, day: u8) -> Self {
        debug_assert!(
            day >= 1 && day <= days_in_month(year, month),
            "invalid day {day} for {year}-{:02}",
            month.number()
        );
        Date { year, month, day }
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

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Day number 1 (1900-01-01) is a Monday, so the Sunday-first index
        // is the day number modulo 7.
        let w = self.day_number().rem_euclid(7) as u8;
        Weekday::from_index(w).expect("rem_euclid always in 0..=6")
    }

    /// Return the Julian day number of this date.
    ///
    /// The JDN labels the whole civil day; 2000-01-01 has JDN 2 451 545.
    /// The Julian *date* of this day's UTC midnight is `jdn as f64 - 0.5`.
    pub fn julian_day_number(&self) -> i64 {
        self.day_number() + JDN_OF_DAY_ZERO
    }

    /// Days since 1899-12-31 (1900-01-01 is day number 1).
    fn day_number(&self) -> i64 {
        day_number_from_ymd(self.year, self.month.number(), self.day)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month.number(),
            self.day
        )
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date({:04}-{:02}-{:02})",
            self.year,
            self.month.number(),
            self.day
        )
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse a `YYYY-MM-DD` calendar date, the interchange format of the
    /// holiday feed.
    fn from_str(s: &str) -> Result<Self> {
        let parse_err = || Error::Parse {
            input: s.to_string(),
        };
        let mut parts = s.splitn(3, '-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d)) => {
                let year = y.parse::<i32>().map_err(|_| parse_err())?;
                let month = m.parse::<u8>().map_err(|_| parse_err())?;
                let day = d.parse::<u8>().map_err(|_| parse_err())?;
                Date::new(year, month, day)
            }
            _ => Err(parse_err()),
        }
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year (proleptic Gregorian).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Convert (year, month, day) to the day count since 1899-12-31.
///
/// Day number 1 = 1900-01-01.
fn day_number_from_ymd(year: i32, month: u8, day: u8) -> i64 {
    let mut n = (year as i64 - 1900) * 365;
    // Leap days in [1900, year) — negative when year < 1900
    n += leap_years_before(year) - LEAPS_BEFORE_1900;
    // Days in months 1..month of the current year
    n += MONTH_OFFSET[month as usize - 1] as i64;
    if month > 2 && is_leap_year(year) {
        n += 1;
    }
    n + day as i64
}

/// Number of leap years in `[1, year)`, proleptic Gregorian.
///
/// `div_euclid` keeps the count consistent for years before 1 CE.
fn leap_years_before(year: i32) -> i64 {
    let y = year as i64 - 1;
    y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

/// `leap_years_before(1900)`.
const LEAPS_BEFORE_1900: i64 = 460;

/// Julian day number of 1899-12-31, i.e. of day number 0.
const JDN_OF_DAY_ZERO: i64 = 2_415_020;

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
