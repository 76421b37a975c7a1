//! Month grid layout: leading blanks plus day numbers, Sunday-first.
//!
//! The grid is exactly what a wall calendar prints.  Cell 0 is a Sunday,
//! day 1 sits in the column of its weekday, and the sequence ends with the
//! last day of the month — no trailing padding, so the cell count varies
//! from month to month.

use crate::year_month::YearMonth;

/// One position in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCell {
    /// Padding before the first day of the month.
    Blank,
    /// A day of the month (1-based).
    Day(u8),
}

impl DayCell {
    /// The day number, or `None` for a blank cell.
    pub fn day(&self) -> Option<u8> {
        match self {
            DayCell::Blank => None,
            DayCell::Day(d) => Some(*d),
        }
    }

    /// Whether this cell is padding.
    pub fn is_blank(&self) -> bool {
        matches!(self, DayCell::Blank)
    }
}

/// The Sunday-first cell layout of one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Lay out the grid for a month.
    pub fn for_month(month: YearMonth) -> Self {
        let blanks = month.first_weekday().index() as usize;
        let mut cells = vec![DayCell::Blank; blanks];
        cells.extend((1..=month.days_in_month()).map(DayCell::Day));
        MonthGrid { month, cells }
    }

    /// The month this grid lays out.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// All cells in order: leading blanks, then day 1 through the last day.
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Number of leading blank cells (0–6).
    pub fn leading_blanks(&self) -> usize {
        self.month.first_weekday().index() as usize
    }

    /// The cells chunked into 7-column rows; the last row may be short.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
