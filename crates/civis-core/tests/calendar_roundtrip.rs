//! # Calendar Round-Trip Tests
//!
//! Exercises the public temporal API the way the tariff calculators use
//! it: parse portal-supplied strings, do calendar arithmetic, render back
//! to ISO. The round-trip property (`to_iso_date(parse(s)) == s`) is what
//! keeps dates stable across a fetch-compute-render cycle.

use civis_core::{temporal, CivilDateTime};

#[test]
fn iso_date_roundtrip_over_a_full_year() {
    // Every day of a leap year survives parse -> format unchanged.
    let mut day = temporal::parse_date("2024-01-01").unwrap();
    let end = temporal::parse_date("2024-12-31").unwrap();
    let mut count = 0;
    while day <= end {
        let iso = temporal::to_iso_date(day);
        assert_eq!(temporal::parse_date(&iso), Some(day));
        assert_eq!(CivilDateTime::parse(&iso).unwrap().to_iso_date(), iso);
        day = temporal::add_days_to_date(day, 1).unwrap();
        count += 1;
    }
    assert_eq!(count, 366);
}

#[test]
fn stamp_and_date_arithmetic_agree() {
    let date = temporal::parse_date("2025-01-31").unwrap();
    let stamp = CivilDateTime::from_date(date);

    assert_eq!(
        temporal::add_months_to_date(date, 1).unwrap(),
        stamp.add_months(1).unwrap().date()
    );
    assert_eq!(
        temporal::add_years_to_date(date, 1).unwrap(),
        stamp.add_years(1).unwrap().date()
    );
    assert_eq!(
        temporal::add_days_to_date(date, 7).unwrap(),
        stamp.add_days(7).unwrap().date()
    );
}

#[test]
fn a_month_of_grace_is_not_thirty_days() {
    // Month addition tracks month length; a fixed 30-day offset does not.
    let due = temporal::parse_date("2025-01-31").unwrap();
    let one_month = temporal::add_months_to_date(due, 1).unwrap();
    let thirty_days = temporal::add_days_to_date(due, 30).unwrap();
    assert_eq!(temporal::to_iso_date(one_month), "2025-02-28");
    assert_eq!(temporal::to_iso_date(thirty_days), "2025-03-02");

    let due = temporal::parse_date("2025-06-30").unwrap();
    let one_month = temporal::add_months_to_date(due, 1).unwrap();
    assert_eq!(temporal::to_iso_date(one_month), "2025-07-30");
}

#[test]
fn day_counting_floors_across_stamp_precision() {
    let from = CivilDateTime::parse("2025-01-01T23:59:59").unwrap();
    let to = CivilDateTime::parse("2025-01-15T00:00:00").unwrap();
    // 13 days and 1 second elapse; floor keeps it at day 13.
    assert_eq!(from.days_until(&to), 13);
}
