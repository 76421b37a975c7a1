//! Integration tests for date arithmetic and parsing.

use folhinha_time::{days_in_month, is_leap_year, Date, Month, Weekday};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::new(y, m, d).unwrap_or_else(|e| panic!("bad test date {y}-{m:02}-{d:02}: {e}"))
}

#[test]
fn weekday_anchors() {
    // Spot checks against a printed calendar
    let cases = [
        (1900, 1, 1, Weekday::Monday),
        (1969, 7, 20, Weekday::Sunday),
        (2000, 1, 1, Weekday::Saturday),
        (2024, 2, 1, Weekday::Thursday),
        (2024, 12, 25, Weekday::Wednesday),
        (2025, 3, 1, Weekday::Saturday),
    ];
    for (y, m, d, expected) in cases {
        assert_eq!(date(y, m, d).weekday(), expected, "for {y}-{m:02}-{d:02}");
    }
}

#[test]
fn julian_day_anchors() {
    assert_eq!(date(2000, 1, 1).julian_day_number(), 2_451_545);
    assert_eq!(date(1900, 1, 1).julian_day_number(), 2_415_021);
    assert_eq!(date(2024, 1, 1).julian_day_number(), 2_460_311);
    // consecutive days differ by exactly one
    assert_eq!(
        date(2024, 2, 29).julian_day_number() + 1,
        date(2024, 3, 1).julian_day_number()
    );
}

#[test]
fn february_length_follows_leap_rule() {
    for year in 1890..2110 {
        let expected = if is_leap_year(year) { 29 } else { 28 };
        assert_eq!(days_in_month(year, Month::February), expected, "year {year}");
    }
}

#[test]
fn year_lengths_sum_to_365_or_366() {
    for year in [1900, 2000, 2023, 2024, 2100] {
        let total: u32 = Month::ALL
            .iter()
            .map(|m| days_in_month(year, *m) as u32)
            .sum();
        let expected = if is_leap_year(year) { 366 } else { 365 };
        assert_eq!(total, expected, "year {year}");
    }
}

#[test]
fn ordering_is_chronological() {
    let mut dates = vec![
        date(2024, 3, 1),
        date(2023, 12, 31),
        date(2024, 2, 29),
        date(2024, 1, 1),
    ];
    dates.sort();
    assert_eq!(
        dates,
        [
            date(2023, 12, 31),
            date(2024, 1, 1),
            date(2024, 2, 29),
            date(2024, 3, 1),
        ]
    );
}

#[test]
fn display_parse_roundtrip() {
    for (y, m, d) in [(2024, 2, 15), (1999, 12, 31), (2000, 1, 1), (2024, 11, 5)] {
        let original = date(y, m, d);
        let parsed: Date = original.to_string().parse().unwrap();
        assert_eq!(parsed, original);
    }
}

#[test]
fn feed_style_dates_parse() {
    // The holiday feed emits zero-padded ISO dates
    let d: Date = "2024-02-13".parse().unwrap();
    assert_eq!((d.year(), d.month().number(), d.day()), (2024, 2, 13));
    assert!("2024-02-13T00:00:00".parse::<Date>().is_err());
    assert!("13/02/2024".parse::<Date>().is_err());
}
