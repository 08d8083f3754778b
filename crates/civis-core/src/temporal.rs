//! # Temporal Types — Civil-Calendar Date Arithmetic
//!
//! Defines `CivilDateTime`, a wall-clock timestamp with no timezone,
//! truncated to seconds precision, plus the calendar helpers every tariff
//! rule routes through.
//!
//! ## Calendar Invariant
//!
//! All day-counting in the engine happens in civil (local wall-clock)
//! days: a bare ISO date is interpreted at midnight, and day differences
//! are **floored**, never rounded. Grace periods, discount windows, and
//! validity checks all rely on floor semantics — `13.9` elapsed days is
//! still day 13.
//!
//! Month and year addition follow `chrono`'s end-of-month clamping
//! (`2025-01-31` plus one month is `2025-02-28`). Due dates issued by the
//! portal fall on the 1st of a month, so the clamp is never observable in
//! produced quotes.
//!
//! ## Malformed Input
//!
//! Parsing returns `Option` and never panics. Calculators treat a `None`
//! date as the single well-defined "malformed" case and degrade to
//! zero/neutral results instead of surfacing an error mid-render.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// A civil (timezone-less) timestamp with seconds precision.
///
/// This is the engine's only notion of "a point in time". Callers supply
/// an explicit as-of stamp for every time-sensitive calculation instead of
/// the engine reading a global clock, so results are reproducible and
/// testable.
///
/// # Construction
///
/// - [`CivilDateTime::parse()`] — from an ISO date or timestamp string.
/// - [`CivilDateTime::from_date()`] — a calendar date at midnight.
/// - [`CivilDateTime::from_naive()`] — from a `chrono::NaiveDateTime`,
///   truncating sub-seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime(NaiveDateTime);

impl CivilDateTime {
    /// Create a stamp at local midnight of the given calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }

    /// Create a stamp from a `chrono::NaiveDateTime`, truncating sub-seconds.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a stamp from an ISO string.
    ///
    /// Accepts either a bare date (`YYYY-MM-DD`, interpreted at midnight so
    /// downstream day-counting stays in civil days) or a timestamp
    /// (`YYYY-MM-DDTHH:MM:SS`, optionally with fractional seconds and an
    /// offset). An offset is dropped, keeping the wall-clock exactly as
    /// written. Returns `None` on failure, never panics.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();
        if s.is_empty() {
            return None;
        }
        if s.contains('T') {
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(Self::from_naive(dt.naive_local()));
            }
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
                return Some(Self::from_naive(dt));
            }
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
                return Some(Self::from_naive(dt));
            }
            return None;
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .map(Self::from_date)
    }

    /// The calendar date of this stamp.
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// The calendar year of this stamp.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Access the inner `NaiveDateTime`.
    pub fn as_naive(&self) -> &NaiveDateTime {
        &self.0
    }

    /// Render the calendar date as `YYYY-MM-DD`.
    pub fn to_iso_date(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Render the full stamp as `YYYY-MM-DDTHH:MM:SS`.
    pub fn to_iso(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    /// Add a signed number of days. `None` only on calendar overflow.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        let delta = TimeDelta::try_days(days)?;
        self.0.checked_add_signed(delta).map(Self)
    }

    /// Add a signed number of calendar months, clamping the day of month
    /// to the target month's length. `None` only on calendar overflow.
    pub fn add_months(&self, months: i32) -> Option<Self> {
        if months >= 0 {
            self.0.checked_add_months(Months::new(months as u32)).map(Self)
        } else {
            self.0
                .checked_sub_months(Months::new(months.unsigned_abs()))
                .map(Self)
        }
    }

    /// Add a signed number of calendar years (12-month steps, so Feb 29
    /// clamps to Feb 28 in a non-leap target year).
    pub fn add_years(&self, years: i32) -> Option<Self> {
        self.add_months(years.checked_mul(12)?)
    }

    /// Whole civil days from `self` to `other`, floored.
    ///
    /// Negative when `other` precedes `self`. Floor (not round, not
    /// truncate-toward-zero) is load-bearing: discount windows and
    /// overdue-day counts treat a partial day as not yet elapsed.
    pub fn days_until(&self, other: &CivilDateTime) -> i64 {
        (other.0 - self.0).num_seconds().div_euclid(SECONDS_PER_DAY)
    }

    /// Non-strict "at or after" comparison.
    pub fn is_on_or_after(&self, other: &CivilDateTime) -> bool {
        self.0 >= other.0
    }

    /// Non-strict "at or before" comparison.
    pub fn is_on_or_before(&self, other: &CivilDateTime) -> bool {
        self.0 <= other.0
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso())
    }
}

impl Serialize for CivilDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso())
    }
}

impl<'de> Deserialize<'de> for CivilDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| D::Error::custom(format!("invalid civil timestamp: {s:?}")))
    }
}

/// Serde adapter for `Option<CivilDateTime>` fields fed by user forms.
///
/// Absent, null, empty, or unparseable values all deserialize to `None`
/// instead of failing the whole record, so "malformed date" is decided
/// here and nowhere else.
pub mod lenient {
    use super::CivilDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as an ISO timestamp string, or null.
    pub fn serialize<S: Serializer>(
        value: &Option<CivilDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(stamp) => serializer.serialize_str(&stamp.to_iso()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize leniently: any failure maps to `None`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<CivilDateTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(CivilDateTime::parse))
    }
}

/// Truncate a `NaiveDateTime` to seconds precision (discard nanoseconds).
///
/// Floor day-differences are computed in whole seconds; keeping stamps at
/// seconds precision makes that computation exact.
fn truncate_to_seconds(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}

// ── Date-level helpers ─────────────────────────────────────────────────

/// Parse a bare `YYYY-MM-DD` string into a calendar date. `None` on failure.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Render a calendar date as `YYYY-MM-DD`.
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Add days to a calendar date. `None` only on calendar overflow.
pub fn add_days_to_date(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let delta = TimeDelta::try_days(days)?;
    date.checked_add_signed(delta)
}

/// Add calendar months to a date, clamping to the target month's length.
pub fn add_months_to_date(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

/// Add calendar years to a date (12-month steps).
pub fn add_years_to_date(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    add_months_to_date(date, years.checked_mul(12)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ---- parsing ----

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let stamp = CivilDateTime::parse("2025-01-10").unwrap();
        assert_eq!(stamp.to_iso(), "2025-01-10T00:00:00");
        assert_eq!(stamp.as_naive().time(), NaiveTime::MIN);
    }

    #[test]
    fn test_parse_timestamp() {
        let stamp = CivilDateTime::parse("2025-01-10T14:30:05").unwrap();
        assert_eq!(stamp.to_iso(), "2025-01-10T14:30:05");
    }

    #[test]
    fn test_parse_keeps_written_wall_clock_of_offset_timestamps() {
        let stamp = CivilDateTime::parse("2025-01-10T14:30:05+02:00").unwrap();
        assert_eq!(stamp.to_iso(), "2025-01-10T14:30:05");
        let stamp = CivilDateTime::parse("2025-01-10T14:30:05Z").unwrap();
        assert_eq!(stamp.to_iso(), "2025-01-10T14:30:05");
    }

    #[test]
    fn test_parse_truncates_subseconds() {
        let stamp = CivilDateTime::parse("2025-01-10T14:30:05.987").unwrap();
        assert_eq!(stamp.to_iso(), "2025-01-10T14:30:05");
    }

    #[test]
    fn test_parse_minute_precision() {
        let stamp = CivilDateTime::parse("2025-01-10T14:30").unwrap();
        assert_eq!(stamp.to_iso(), "2025-01-10T14:30:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(CivilDateTime::parse("").is_none());
        assert!(CivilDateTime::parse("  ").is_none());
        assert!(CivilDateTime::parse("not-a-date").is_none());
        assert!(CivilDateTime::parse("2025-13-40").is_none());
        assert!(CivilDateTime::parse("2025-01-10Tnoon").is_none());
    }

    #[test]
    fn test_iso_date_roundtrip() {
        for s in ["2024-02-29", "2025-01-01", "2025-12-31"] {
            let stamp = CivilDateTime::parse(s).unwrap();
            assert_eq!(stamp.to_iso_date(), s);
        }
    }

    // ---- arithmetic ----

    #[test]
    fn test_add_days() {
        let stamp = CivilDateTime::from_date(date(2025, 1, 10));
        assert_eq!(stamp.add_days(7).unwrap().to_iso_date(), "2025-01-17");
        assert_eq!(stamp.add_days(-10).unwrap().to_iso_date(), "2024-12-31");
    }

    #[test]
    fn test_add_months_honors_month_length() {
        let stamp = CivilDateTime::from_date(date(2024, 12, 1));
        assert_eq!(stamp.add_months(1).unwrap().to_iso_date(), "2025-01-01");
        let stamp = CivilDateTime::from_date(date(2025, 2, 1));
        assert_eq!(stamp.add_months(1).unwrap().to_iso_date(), "2025-03-01");
    }

    #[test]
    fn test_add_months_clamps_month_end() {
        let stamp = CivilDateTime::from_date(date(2025, 1, 31));
        assert_eq!(stamp.add_months(1).unwrap().to_iso_date(), "2025-02-28");
        let stamp = CivilDateTime::from_date(date(2024, 1, 31));
        assert_eq!(stamp.add_months(1).unwrap().to_iso_date(), "2024-02-29");
    }

    #[test]
    fn test_add_months_negative() {
        let stamp = CivilDateTime::from_date(date(2025, 1, 1));
        assert_eq!(stamp.add_months(-1).unwrap().to_iso_date(), "2024-12-01");
    }

    #[test]
    fn test_add_years() {
        let stamp = CivilDateTime::from_date(date(2025, 1, 10));
        assert_eq!(stamp.add_years(1).unwrap().to_iso_date(), "2026-01-10");
        // Leap day clamps in a non-leap target year.
        let stamp = CivilDateTime::from_date(date(2024, 2, 29));
        assert_eq!(stamp.add_years(1).unwrap().to_iso_date(), "2025-02-28");
    }

    // ---- day differences ----

    #[test]
    fn test_days_until_whole_days() {
        let a = CivilDateTime::from_date(date(2025, 1, 1));
        let b = CivilDateTime::from_date(date(2025, 2, 15));
        assert_eq!(a.days_until(&b), 45);
        assert_eq!(b.days_until(&a), -45);
    }

    #[test]
    fn test_days_until_floors_partial_days() {
        let issued = CivilDateTime::parse("2025-01-01T10:00:00").unwrap();
        let later = CivilDateTime::parse("2025-01-02T09:59:59").unwrap();
        assert_eq!(issued.days_until(&later), 0);
        let later = CivilDateTime::parse("2025-01-02T10:00:00").unwrap();
        assert_eq!(issued.days_until(&later), 1);
    }

    #[test]
    fn test_days_until_floors_negative_partial_days() {
        // One second before the reference stamp is already day -1.
        let a = CivilDateTime::parse("2025-01-10T00:00:00").unwrap();
        let b = CivilDateTime::parse("2025-01-09T23:59:59").unwrap();
        assert_eq!(a.days_until(&b), -1);
    }

    // ---- comparisons ----

    #[test]
    fn test_non_strict_comparisons() {
        let a = CivilDateTime::parse("2025-01-10").unwrap();
        let b = CivilDateTime::parse("2025-01-10").unwrap();
        let c = CivilDateTime::parse("2025-01-11").unwrap();
        assert!(a.is_on_or_after(&b));
        assert!(a.is_on_or_before(&b));
        assert!(c.is_on_or_after(&a));
        assert!(!c.is_on_or_before(&a));
    }

    // ---- serde ----

    #[test]
    fn test_serde_roundtrip() {
        let stamp = CivilDateTime::parse("2025-06-01T08:15:00").unwrap();
        let json = serde_json::to_string(&stamp).unwrap();
        assert_eq!(json, "\"2025-06-01T08:15:00\"");
        let parsed: CivilDateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(stamp, parsed);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<CivilDateTime>("\"never\"").is_err());
    }

    #[test]
    fn test_lenient_adapter() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Holder {
            #[serde(default, with = "super::lenient")]
            at: Option<CivilDateTime>,
        }

        let holder: Holder = serde_json::from_str(r#"{"at": "2025-01-10"}"#).unwrap();
        assert_eq!(holder.at.unwrap().to_iso_date(), "2025-01-10");

        let holder: Holder = serde_json::from_str(r#"{"at": "garbage"}"#).unwrap();
        assert!(holder.at.is_none());

        let holder: Holder = serde_json::from_str(r#"{"at": null}"#).unwrap();
        assert!(holder.at.is_none());

        let holder: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert!(holder.at.is_none());
    }

    // ---- date-level helpers ----

    #[test]
    fn test_parse_date_helper() {
        assert_eq!(parse_date("2025-12-01"), Some(date(2025, 12, 1)));
        assert_eq!(parse_date("12/01/2025"), None);
    }

    #[test]
    fn test_date_helper_roundtrip() {
        assert_eq!(to_iso_date(date(2025, 12, 1)), "2025-12-01");
    }

    #[test]
    fn test_add_months_to_date_grace_period_shape() {
        // One calendar month, not a fixed 30-day offset.
        assert_eq!(add_months_to_date(date(2024, 12, 1), 1), Some(date(2025, 1, 1)));
        assert_eq!(add_months_to_date(date(2025, 1, 1), 1), Some(date(2025, 2, 1)));
        assert_eq!(add_months_to_date(date(2025, 1, 31), 1), Some(date(2025, 2, 28)));
    }

    #[test]
    fn test_add_years_to_date() {
        assert_eq!(add_years_to_date(date(2025, 1, 10), 1), Some(date(2026, 1, 10)));
    }
}
