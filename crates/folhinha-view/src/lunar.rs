//! Lunar transition events for a month.
//!
//! One marker per change of *printed* phase: walk the days in order,
//! translate each day's phase to its display label, and emit a marker the
//! first day a principal label differs from the last one emitted.  Gibbous
//! days never emit and never reset the comparison, so a quarter phase that
//! follows a gibbous stretch inside the same printed half does not repeat
//! its marker.

use std::fmt;

use folhinha_astro::{Phase, PrincipalPhase};
use folhinha_time::{Date, YearMonth};

/// A principal-phase transition within one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarEvent {
    /// Day of the month the printed phase first differs (1-based).
    pub day: u8,
    /// The phase the Moon enters.
    pub phase: PrincipalPhase,
}

impl fmt::Display for LunarEvent {
    /// Formats as the calendar prints it: `"8. Crescente"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.day, self.phase)
    }
}

/// Compute the month's transition events.
///
/// `phase_for` is evaluated once per day, in day order.  Pass
/// [`folhinha_astro::phase_on`] for the real Moon, or any closure for a
/// synthetic one.
pub fn lunar_events<F>(month: YearMonth, mut phase_for: F) -> Vec<LunarEvent>
where
    F: FnMut(Date) -> Phase,
{
    let mut events = Vec::new();
    let mut last_emitted: Option<PrincipalPhase> = None;
    for date in month.dates() {
        if let Some(phase) = phase_for(date).principal() {
            if last_emitted != Some(phase) {
                events.push(LunarEvent {
                    day: date.day(),
                    phase,
                });
                last_emitted = Some(phase);
            }
        }
    }
    events
}

/// The `" | "`-joined summary line, or `None` when there are no events.
pub fn lunar_line(events: &[LunarEvent]) -> Option<String> {
    if events.is_empty() {
        return None;
    }
    Some(
        events
            .iter()
            .map(LunarEvent::to_string)
            .collect::<Vec<_>>()
            .join(" | "),
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
