//! Holiday annotations for one month.
//!
//! The yearly feed arrives as one flat list; each month keeps the entries
//! falling inside it (day and name, in day order) plus a day-membership set
//! for O(1) "is this cell a holiday?" while painting the grid.

use std::fmt;

use folhinha_feed::HolidayRecord;
use folhinha_time::YearMonth;

/// Set of holiday day-numbers within one month.
///
/// A 31-bit mask: bit *n* holds day *n* + 1.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct DaySet(u32);

impl DaySet {
    /// The empty set.
    pub fn new() -> Self {
        DaySet(0)
    }

    /// Insert a day (1-based).  Days outside 1–31 are ignored.
    pub fn insert(&mut self, day: u8) {
        if (1..=31).contains(&day) {
            self.0 |= 1 << (day - 1);
        }
    }

    /// Whether the set contains `day`.
    pub fn contains(&self, day: u8) -> bool {
        (1..=31).contains(&day) && self.0 & (1 << (day - 1)) != 0
    }

    /// Number of days in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate over the days in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=31u8).filter(move |day| self.contains(*day))
    }
}

impl fmt::Debug for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DaySet")?;
        f.debug_set().entries(self.iter()).finish()
    }
}

/// One holiday inside a month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayEntry {
    /// Day of the month (1-based).
    pub day: u8,
    /// Display name from the feed.
    pub name: String,
}

impl fmt::Display for HolidayEntry {
    /// Formats as the calendar prints it: `"15. Carnaval"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.day, self.name)
    }
}

/// The holiday annotations of one month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthHolidays {
    entries: Vec<HolidayEntry>,
    days: DaySet,
}

impl MonthHolidays {
    /// Collect the records falling inside `month`.
    ///
    /// Entries come out in day order even if the feed was shuffled; records
    /// from other months or years are ignored.
    pub fn for_month(month: YearMonth, records: &[HolidayRecord]) -> Self {
        let mut entries: Vec<HolidayEntry> = records
            .iter()
            .filter(|record| month.contains(record.date))
            .map(|record| HolidayEntry {
                day: record.date.day(),
                name: record.name.clone(),
            })
            .collect();
        // stable, so feed order decides between same-day entries
        entries.sort_by_key(|entry| entry.day);
        let mut days = DaySet::new();
        for entry in &entries {
            days.insert(entry.day);
        }
        MonthHolidays { entries, days }
    }

    /// The entries in day order.
    pub fn entries(&self) -> &[HolidayEntry] {
        &self.entries
    }

    /// The day-membership set.
    pub fn day_set(&self) -> DaySet {
        self.days
    }

    /// Whether `day` is a holiday in this month.
    pub fn contains_day(&self, day: u8) -> bool {
        self.days.contains(day)
    }

    /// Whether the month has no holidays.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `" | "`-joined summary line, or `None` when empty.
    pub fn line(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        Some(
            self.entries
                .iter()
                .map(HolidayEntry::to_string)
                .collect::<Vec<_>>()
                .join(" | "),
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
