//! The national-holiday feed (BrasilAPI `feriados/v1` shape).
//!
//! The feed answers a year query with a JSON array of
//! `{"date": "YYYY-MM-DD", "name": …}` objects, in chronological order.
//! Parsing is best-effort: a payload that is not such an array yields no
//! holidays, and an entry whose date is not a real calendar date is
//! dropped.

use serde::Deserialize;

use folhinha_time::Date;

/// One national holiday, as delivered by the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRecord {
    /// The holiday's calendar date.
    pub date: Date,
    /// Display name, e.g. `"Carnaval"`.
    pub name: String,
}

/// Wire shape of one feed entry.  Unknown fields (`type`, …) are ignored.
#[derive(Debug, Deserialize)]
struct RawHoliday {
    date: String,
    name: String,
}

/// Parse a yearly holiday payload.
///
/// Never fails: a malformed payload parses as no holidays, and entries
/// whose `date` field is not a calendar date are skipped.
pub fn parse_holidays(body: &str) -> Vec<HolidayRecord> {
    let raw: Vec<RawHoliday> = serde_json::from_str(body).unwrap_or_default();
    raw.into_iter()
        .filter_map(|entry| {
            let date = entry.date.parse().ok()?;
            Some(HolidayRecord {
                date,
                name: entry.name,
            })
        })
        .collect()
}

/// URL of the yearly national-holiday listing.
pub fn holidays_endpoint(year: i32) -> String {
    format!("https://brasilapi.com.br/api/feriados/v1/{year}")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // The first entries of the real 2024 payload
    const FIXTURE: &str = r#"[
        {"date":"2024-01-01","name":"Confraternização mundial","type":"national"},
        {"date":"2024-02-13","name":"Carnaval","type":"national"},
        {"date":"2024-03-29","name":"Sexta-feira Santa","type":"national"},
        {"date":"2024-04-21","name":"Tiradentes","type":"national"},
        {"date":"2024-05-01","name":"Dia do trabalho","type":"national"}
    ]"#;

    #[test]
    fn parses_the_feed_shape() {
        let holidays = parse_holidays(FIXTURE);
        assert_eq!(holidays.len(), 5);
        assert_eq!(holidays[0].date, Date::new(2024, 1, 1).unwrap());
        assert_eq!(holidays[0].name, "Confraternização mundial");
        assert_eq!(holidays[1].date, Date::new(2024, 2, 13).unwrap());
        assert_eq!(holidays[1].name, "Carnaval");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = r#"[{"date":"2024-02-13","name":"Carnaval","type":"national","level":3}]"#;
        assert_eq!(parse_holidays(body).len(), 1);
    }

    #[test]
    fn malformed_payload_is_empty() {
        assert!(parse_holidays("").is_empty());
        assert!(parse_holidays("not json").is_empty());
        // an object instead of an array
        assert!(parse_holidays(r#"{"message":"rate limited"}"#).is_empty());
        // an entry missing a required field poisons the whole payload
        assert!(parse_holidays(r#"[{"date":"2024-02-13"}]"#).is_empty());
    }

    #[test]
    fn bad_dates_are_skipped() {
        let body = r#"[
            {"date":"2024-02-30","name":"Inexistente"},
            {"date":"2024-02-13","name":"Carnaval"},
            {"date":"13/02/2024","name":"Formato errado"}
        ]"#;
        let holidays = parse_holidays(body);
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].name, "Carnaval");
    }

    #[test]
    fn endpoint_is_the_year_query() {
        assert_eq!(
            holidays_endpoint(2024),
            "https://brasilapi.com.br/api/feriados/v1/2024"
        );
    }
}
