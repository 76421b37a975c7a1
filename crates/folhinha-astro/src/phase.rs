//! `Phase` and `PrincipalPhase` — the lunar phase taxonomy.
//!
//! The ephemeris distinguishes eight phases per cycle, but the calendar
//! prints only four transition markers.  The two gibbous phases have display
//! labels of their own and are never marked; the crescent/quarter pairs on
//! each side share a label with their principal phase, which is why the
//! display name, not the astronomical phase, drives transition detection.

/// One of the eight canonical lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// The dark moon (age ≈ 0).
    New,
    /// First sliver of the waxing moon.
    WaxingCrescent,
    /// Half lit, waxing (age ≈ 7.4 days).
    FirstQuarter,
    /// More than half lit, waxing.
    WaxingGibbous,
    /// Fully lit (age ≈ 14.8 days).
    Full,
    /// More than half lit, waning.
    WaningGibbous,
    /// Half lit, waning (age ≈ 22.1 days).
    LastQuarter,
    /// Last sliver of the waning moon.
    WaningCrescent,
}

impl Phase {
    /// The phases in cycle order, starting at the new moon.
    pub const ALL: [Phase; 8] = [
        Phase::New,
        Phase::WaxingCrescent,
        Phase::FirstQuarter,
        Phase::WaxingGibbous,
        Phase::Full,
        Phase::WaningGibbous,
        Phase::LastQuarter,
        Phase::WaningCrescent,
    ];

    /// Return the fixed pt-BR display label.
    ///
    /// The waxing crescent and the first quarter both print as
    /// `"Crescente"`, the last quarter and the waning crescent both as
    /// `"Minguante"` — the wording of a wall calendar, not an astronomical
    /// classification.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::New => "Lua Nova",
            Phase::WaxingCrescent => "Crescente",
            Phase::FirstQuarter => "Crescente",
            Phase::WaxingGibbous => "Gibosa Crescente",
            Phase::Full => "Lua Cheia",
            Phase::WaningGibbous => "Gibosa Minguante",
            Phase::LastQuarter => "Minguante",
            Phase::WaningCrescent => "Minguante",
        }
    }

    /// Return the principal phase this one displays as, or `None` for the
    /// gibbous phases, which never produce a transition marker.
    pub fn principal(&self) -> Option<PrincipalPhase> {
        match self {
            Phase::New => Some(PrincipalPhase::NewMoon),
            Phase::WaxingCrescent | Phase::FirstQuarter => Some(PrincipalPhase::Crescent),
            Phase::Full => Some(PrincipalPhase::FullMoon),
            Phase::LastQuarter | Phase::WaningCrescent => Some(PrincipalPhase::Waning),
            Phase::WaxingGibbous | Phase::WaningGibbous => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One of the four phases the calendar marks transitions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrincipalPhase {
    /// `"Lua Nova"`.
    NewMoon,
    /// `"Crescente"` — either waxing crescent or first quarter.
    Crescent,
    /// `"Lua Cheia"`.
    FullMoon,
    /// `"Minguante"` — either last quarter or waning crescent.
    Waning,
}

impl PrincipalPhase {
    /// The principal phases in cycle order.
    pub const ALL: [PrincipalPhase; 4] = [
        PrincipalPhase::NewMoon,
        PrincipalPhase::Crescent,
        PrincipalPhase::FullMoon,
        PrincipalPhase::Waning,
    ];

    /// Return the fixed pt-BR display label.
    pub fn name(&self) -> &'static str {
        match self {
            PrincipalPhase::NewMoon => "Lua Nova",
            PrincipalPhase::Crescent => "Crescente",
            PrincipalPhase::FullMoon => "Lua Cheia",
            PrincipalPhase::Waning => "Minguante",
        }
    }
}

impl std::fmt::Display for PrincipalPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_principal_labels() {
        // Whenever a phase collapses to a principal one, their labels agree
        for phase in Phase::ALL {
            if let Some(p) = phase.principal() {
                assert_eq!(phase.name(), p.name(), "label mismatch for {phase:?}");
            }
        }
    }

    #[test]
    fn gibbous_phases_are_not_principal() {
        assert_eq!(Phase::WaxingGibbous.principal(), None);
        assert_eq!(Phase::WaningGibbous.principal(), None);
        assert_eq!(Phase::WaxingGibbous.name(), "Gibosa Crescente");
        assert_eq!(Phase::WaningGibbous.name(), "Gibosa Minguante");
    }

    #[test]
    fn crescent_and_quarter_share_labels() {
        assert_eq!(Phase::WaxingCrescent.name(), Phase::FirstQuarter.name());
        assert_eq!(Phase::LastQuarter.name(), Phase::WaningCrescent.name());
        assert_eq!(
            Phase::WaxingCrescent.principal(),
            Phase::FirstQuarter.principal()
        );
        assert_eq!(
            Phase::LastQuarter.principal(),
            Phase::WaningCrescent.principal()
        );
    }

    #[test]
    fn principal_label_table() {
        let labels: Vec<&str> = PrincipalPhase::ALL.iter().map(PrincipalPhase::name).collect();
        assert_eq!(labels, ["Lua Nova", "Crescente", "Lua Cheia", "Minguante"]);
    }
}
