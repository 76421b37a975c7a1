//! # folhinha-view
//!
//! The annotation and composition layer: which days are holidays, where the
//! principal lunar phases change, and the three ready-to-render view models
//! (interactive month, twelve print pages, compact year grid).  Everything
//! here is a pure function of its inputs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Holiday annotations for one month.
pub mod holiday;

/// Lunar transition events for one month.
pub mod lunar;

/// View models for the three presentation modes.
pub mod page;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use holiday::{DaySet, HolidayEntry, MonthHolidays};
pub use lunar::{lunar_events, lunar_line, LunarEvent};
pub use page::{CalendarView, CompactMonth, MonthPage, ViewMode};
