//! Synodic-month ephemeris: date → lunar age → phase.
//!
//! This is the mean-cycle approximation wall calendars use: the Moon's age
//! is the time since a reference new moon, modulo the mean synodic month,
//! and the age bins into eight equal windows centred on the phase instants.
//! Accurate to better than a day over the calendar's useful range.

use folhinha_time::Date;

use crate::phase::Phase;

/// Mean length of the synodic month, in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// Julian date of the reference new moon, 2000-01-06 18:14 UTC.
pub const NEW_MOON_REFERENCE_JD: f64 = 2_451_550.1;

/// The Moon's age in days at the UTC midnight opening `date`.
///
/// Always in `[0, SYNODIC_MONTH)`; `rem_euclid` keeps dates before the
/// reference new moon on the same footing as dates after it.
pub fn lunar_age(date: Date) -> f64 {
    // The Julian day number labels the whole day; its UTC midnight is half
    // a day earlier.
    let jd = date.julian_day_number() as f64 - 0.5;
    (jd - NEW_MOON_REFERENCE_JD).rem_euclid(SYNODIC_MONTH)
}

/// The phase for a given age in days.
///
/// Window boundaries sit on the odd multiples of a sixteenth of the synodic
/// month, so every window is centred on its phase's nominal instant
/// (age 0 = new, ≈ 14.77 = full).
pub fn phase_from_age(age: f64) -> Phase {
    const SIXTEENTH: f64 = SYNODIC_MONTH / 16.0;
    if age < SIXTEENTH {
        Phase::New
    } else if age < 3.0 * SIXTEENTH {
        Phase::WaxingCrescent
    } else if age < 5.0 * SIXTEENTH {
        Phase::FirstQuarter
    } else if age < 7.0 * SIXTEENTH {
        Phase::WaxingGibbous
    } else if age < 9.0 * SIXTEENTH {
        Phase::Full
    } else if age < 11.0 * SIXTEENTH {
        Phase::WaningGibbous
    } else if age < 13.0 * SIXTEENTH {
        Phase::LastQuarter
    } else if age < 15.0 * SIXTEENTH {
        Phase::WaningCrescent
    } else {
        Phase::New
    }
}

/// The lunar phase on a calendar day, evaluated at UTC midnight.
///
/// This is the default phase function for the calendar's annotators.
pub fn phase_on(date: Date) -> Phase {
    phase_from_age(lunar_age(date))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
