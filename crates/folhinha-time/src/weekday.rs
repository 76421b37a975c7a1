//! `Weekday` — day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 0–6 (Sunday = 0, Saturday = 6) so that a weekday
/// *is* its column index in the Sunday-first calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Sunday (0) — the first grid column.
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in grid order, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Construct from the Sunday-first index (0 = Sunday … 6 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_index(n: u8) -> Option<Self> {
        match n {
            0 => Some(Weekday::Sunday),
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// Return the Sunday-first grid column index (0–6).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Return the pt-BR abbreviation (`"Dom"`, `"Seg"`, …).
    pub fn short_name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Dom",
            Weekday::Monday => "Seg",
            Weekday::Tuesday => "Ter",
            Weekday::Wednesday => "Qua",
            Weekday::Thursday => "Qui",
            Weekday::Friday => "Sex",
            Weekday::Saturday => "Sáb",
        }
    }

    /// Return the full pt-BR name (`"Domingo"`, `"Segunda-feira"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Domingo",
            Weekday::Monday => "Segunda-feira",
            Weekday::Tuesday => "Terça-feira",
            Weekday::Wednesday => "Quarta-feira",
            Weekday::Thursday => "Quinta-feira",
            Weekday::Friday => "Sexta-feira",
            Weekday::Saturday => "Sábado",
        }
    }

    /// Return the single-letter column header used by compact grids
    /// (`D S T Q Q S S`).
    pub fn initial(&self) -> char {
        match self {
            Weekday::Sunday => 'D',
            Weekday::Monday | Weekday::Friday | Weekday::Saturday => 'S',
            Weekday::Tuesday => 'T',
            Weekday::Wednesday | Weekday::Thursday => 'Q',
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}
