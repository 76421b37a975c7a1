//! # folhinha-astro
//!
//! Lunar phase computation: Julian-day based synodic age and the mapping
//! from age to the eight canonical phases, with the fixed pt-BR labels the
//! calendar prints.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Synodic-month ephemeris: date → lunar age → phase.
pub mod ephemeris;

/// The eight lunar phases and the four principal ones.
pub mod phase;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use ephemeris::{lunar_age, phase_from_age, phase_on, NEW_MOON_REFERENCE_JD, SYNODIC_MONTH};
pub use phase::{Phase, PrincipalPhase};
