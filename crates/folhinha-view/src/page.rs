//! View models for the three presentation modes.
//!
//! A `MonthPage` is the interactive sheet (target month plus the previous
//! and next minis); a `CompactMonth` is one card of the 4×3 year grid; and
//! `CalendarView` bundles twelve of one or the other for the print modes.
//! Building a view is synchronous and never fails, so an embedder renders
//! the returned value and, for the print modes, prints right after.

use folhinha_astro::Phase;
use folhinha_feed::HolidayRecord;
use folhinha_time::{Date, MonthGrid, YearMonth};

use crate::holiday::MonthHolidays;
use crate::lunar::{lunar_events, LunarEvent};

/// Which of the three layouts to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// One month with navigation minis.
    Interactive,
    /// Twelve full pages for printing a year.
    FullYearPrint,
    /// A year as a 4×3 grid of compact cards.
    CompactYearGrid,
}

/// The data behind the interactive month sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPage {
    month: YearMonth,
    grid: MonthGrid,
    previous: MonthGrid,
    next: MonthGrid,
    holidays: MonthHolidays,
    lunar_events: Vec<LunarEvent>,
}

impl MonthPage {
    /// Build the page for one month.
    ///
    /// `records` may span any years; only those inside `month` are kept.
    /// `phase_for` supplies each day's lunar phase.
    pub fn build<F>(month: YearMonth, records: &[HolidayRecord], phase_for: F) -> Self
    where
        F: FnMut(Date) -> Phase,
    {
        MonthPage {
            month,
            grid: MonthGrid::for_month(month),
            previous: MonthGrid::for_month(month.previous()),
            next: MonthGrid::for_month(month.next()),
            holidays: MonthHolidays::for_month(month, records),
            lunar_events: lunar_events(month, phase_for),
        }
    }

    /// The month this page shows.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// The main grid.
    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// Mini grid of the preceding month.
    pub fn previous(&self) -> &MonthGrid {
        &self.previous
    }

    /// Mini grid of the following month.
    pub fn next(&self) -> &MonthGrid {
        &self.next
    }

    /// Holiday annotations of the month.
    pub fn holidays(&self) -> &MonthHolidays {
        &self.holidays
    }

    /// Principal-phase transitions of the month.
    pub fn lunar_events(&self) -> &[LunarEvent] {
        &self.lunar_events
    }
}

/// One card of the compact year grid: no minis, same annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactMonth {
    month: YearMonth,
    grid: MonthGrid,
    holidays: MonthHolidays,
    lunar_events: Vec<LunarEvent>,
}

impl CompactMonth {
    /// Build the card for one month.
    pub fn build<F>(month: YearMonth, records: &[HolidayRecord], phase_for: F) -> Self
    where
        F: FnMut(Date) -> Phase,
    {
        CompactMonth {
            month,
            grid: MonthGrid::for_month(month),
            holidays: MonthHolidays::for_month(month, records),
            lunar_events: lunar_events(month, phase_for),
        }
    }

    /// The month this card shows.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// The card's grid.
    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// Holiday annotations of the month.
    pub fn holidays(&self) -> &MonthHolidays {
        &self.holidays
    }

    /// Principal-phase transitions of the month.
    pub fn lunar_events(&self) -> &[LunarEvent] {
        &self.lunar_events
    }
}

/// A fully computed view, ready to render.
///
/// This is the whole per-render state: mode, target, and every annotation,
/// with nothing left mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarView {
    /// One interactive month sheet.
    Interactive(MonthPage),
    /// Twelve print pages of one year.
    FullYearPrint {
        /// The year being printed.
        year: i32,
        /// January through December, in order.
        pages: Vec<MonthPage>,
    },
    /// The 4×3 compact year grid.
    CompactYearGrid {
        /// The year being shown.
        year: i32,
        /// January through December, in order.
        months: Vec<CompactMonth>,
    },
}

impl CalendarView {
    /// Build the view for `mode` around a reference date.
    ///
    /// The reference picks the month (interactive) or the year (the two
    /// print modes).
    pub fn build<F>(
        mode: ViewMode,
        reference: Date,
        records: &[HolidayRecord],
        phase_for: F,
    ) -> Self
    where
        F: FnMut(Date) -> Phase,
    {
        match mode {
            ViewMode::Interactive => {
                Self::interactive(YearMonth::from_date(reference), records, phase_for)
            }
            ViewMode::FullYearPrint => Self::full_year(reference.year(), records, phase_for),
            ViewMode::CompactYearGrid => Self::compact_year(reference.year(), records, phase_for),
        }
    }

    /// The interactive view of one month.
    pub fn interactive<F>(month: YearMonth, records: &[HolidayRecord], phase_for: F) -> Self
    where
        F: FnMut(Date) -> Phase,
    {
        CalendarView::Interactive(MonthPage::build(month, records, phase_for))
    }

    /// Twelve full pages for `year`.
    pub fn full_year<F>(year: i32, records: &[HolidayRecord], mut phase_for: F) -> Self
    where
        F: FnMut(Date) -> Phase,
    {
        let pages = (1..=12)
            .map(|m| MonthPage::build(YearMonth::new(year, m), records, &mut phase_for))
            .collect();
        CalendarView::FullYearPrint { year, pages }
    }

    /// The compact year grid for `year`.
    pub fn compact_year<F>(year: i32, records: &[HolidayRecord], mut phase_for: F) -> Self
    where
        F: FnMut(Date) -> Phase,
    {
        let months = (1..=12)
            .map(|m| CompactMonth::build(YearMonth::new(year, m), records, &mut phase_for))
            .collect();
        CalendarView::CompactYearGrid { year, months }
    }

    /// Which mode this view was built for.
    pub fn mode(&self) -> ViewMode {
        match self {
            CalendarView::Interactive(_) => ViewMode::Interactive,
            CalendarView::FullYearPrint { .. } => ViewMode::FullYearPrint,
            CalendarView::CompactYearGrid { .. } => ViewMode::CompactYearGrid,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use folhinha_astro::PrincipalPhase;

    use super::*;

    #[test]
    fn page_minis_are_the_neighbour_months() {
        let page = MonthPage::build(YearMonth::new(2024, 1), &[], |_| Phase::Full);
        assert_eq!(page.previous().month(), YearMonth::new(2023, 12));
        assert_eq!(page.next().month(), YearMonth::new(2024, 2));
    }

    #[test]
    fn page_annotations_cover_the_target_month_only() {
        let records = [
            HolidayRecord {
                date: Date::new(2024, 2, 15).unwrap(),
                name: "Carnaval".to_string(),
            },
            HolidayRecord {
                date: Date::new(2024, 1, 1).unwrap(),
                name: "Confraternização mundial".to_string(),
            },
        ];
        let page = MonthPage::build(YearMonth::new(2024, 2), &records, |_| Phase::WaxingGibbous);
        assert_eq!(page.holidays().entries().len(), 1);
        assert!(page.holidays().contains_day(15));
        assert!(page.lunar_events().is_empty());
    }

    #[test]
    fn compact_card_has_no_minis_but_same_annotations() {
        let records = [HolidayRecord {
            date: Date::new(2024, 2, 15).unwrap(),
            name: "Carnaval".to_string(),
        }];
        let month = YearMonth::new(2024, 2);
        let card = CompactMonth::build(month, &records, |_| Phase::New);
        let page = MonthPage::build(month, &records, |_| Phase::New);
        assert_eq!(card.grid(), page.grid());
        assert_eq!(card.holidays(), page.holidays());
        assert_eq!(card.lunar_events(), page.lunar_events());
        assert_eq!(
            card.lunar_events(),
            [LunarEvent {
                day: 1,
                phase: PrincipalPhase::NewMoon
            }]
        );
    }

    #[test]
    fn mode_roundtrip() {
        let reference = Date::new(2024, 6, 15).unwrap();
        for mode in [
            ViewMode::Interactive,
            ViewMode::FullYearPrint,
            ViewMode::CompactYearGrid,
        ] {
            let view = CalendarView::build(mode, reference, &[], |_| Phase::Full);
            assert_eq!(view.mode(), mode);
        }
    }
}
