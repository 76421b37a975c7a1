//! Error types for folhinha.
//!
//! Everything fallible in the workspace funnels into this single
//! `thiserror`-derived enum.  External-feed problems are deliberately *not*
//! errors: feed parsing degrades to empty output so the calendar can always
//! render (see `folhinha-feed`).

use thiserror::Error;

/// The error type used throughout folhinha.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A month number outside 1–12, in a context where normalisation into
    /// neighbouring years is not wanted.
    #[error("month {month} out of range [1, 12]")]
    InvalidMonth {
        /// The rejected month number.
        month: i32,
    },

    /// A day-of-month outside the month's valid range.
    #[error("day {day} out of range [1, {max}] for {year}-{month:02}")]
    InvalidDay {
        /// Year of the rejected date.
        year: i32,
        /// Month (1–12) of the rejected date.
        month: u8,
        /// The rejected day number.
        day: u8,
        /// Number of days in that month.
        max: u8,
    },

    /// A string that does not parse as a calendar date.
    #[error("cannot parse {input:?} as a date (expected YYYY-MM-DD)")]
    Parse {
        /// The rejected input.
        input: String,
    },
}

/// Shorthand `Result` type used throughout folhinha.
pub type Result<T, E = Error> = std::result::Result<T, E>;
