//! # folhinha-time
//!
//! Civil dates, weekdays, months, and the Sunday-first month grid.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` — civil calendar date.
pub mod date;

/// Error type shared by the folhinha workspace.
pub mod error;

/// Month grid layout (`DayCell`, `MonthGrid`).
pub mod grid;

/// `Month` — month-of-year enum with pt-BR names.
pub mod month;

/// `Weekday` — day-of-week enum, Sunday-first.
pub mod weekday;

/// `YearMonth` — a (year, month) pair with free-running month arithmetic.
pub mod year_month;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use error::{Error, Result};
pub use grid::{DayCell, MonthGrid};
pub use month::Month;
pub use weekday::Weekday;
pub use year_month::YearMonth;
