//! # folhinha-feed
//!
//! Wire models for the calendar's two external data sources: the yearly
//! national-holiday listing and the current-weather query.  Fetching is the
//! embedder's concern; this crate owns the payload shapes, best-effort
//! parsers, endpoint URLs, and the API-credential lookup.
//!
//! Feed problems are never errors here.  A calendar with no holiday marks
//! and no temperature is still a calendar, so every parser degrades to
//! "nothing" instead of failing.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The national-holiday feed.
pub mod holiday;

/// The current-weather feed.
pub mod weather;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use holiday::{holidays_endpoint, parse_holidays, HolidayRecord};
pub use weather::{
    api_key_from_env, parse_current_temp, weather_endpoint, Temperature, API_KEY_VAR, DEFAULT_CITY,
};
