//! Date parsing used by the date primitives and range checks.
//!
//! Values without an offset are interpreted as UTC.

use crate::pattern::ISO_DATE_PREFIX;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const ISO_DATE: &str = "%Y-%m-%d";

const ISO_NAIVE_DATE_TIMES: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

// RFC 3339 requires seconds; ISO-8601 does not.
const ISO_OFFSET_DATE_TIMES: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

const LENIENT_NAIVE_DATE_TIMES: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const LENIENT_DATES: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a strict ISO-8601 date or date-time.
///
/// Accepts `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM[:SS[.fff]]`, either naive or
/// with a `Z` or numeric offset.
pub fn parse_iso_date(value: &str) -> Option<DateTime<Utc>> {
    if !ISO_DATE_PREFIX.is_match(value) {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, ISO_DATE) {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }
    if let Some(parsed) = ISO_OFFSET_DATE_TIMES
        .iter()
        .find_map(|format| DateTime::parse_from_str(value, format).ok())
    {
        return Some(parsed.with_timezone(&Utc));
    }
    let naive = value
        .strip_suffix('Z')
        .or_else(|| value.strip_suffix('z'))
        .unwrap_or(value);
    ISO_NAIVE_DATE_TIMES
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
        .map(|naive| naive.and_utc())
}

/// Parse anything a browser `Date` would reasonably accept.
///
/// Covers the ISO forms, RFC 2822, slash-separated dates and space-separated
/// date-times.
pub fn parse_date_like(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    parse_iso_date(value)
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|parsed| parsed.with_timezone(&Utc))
        })
        .or_else(|| {
            DateTime::parse_from_rfc2822(value)
                .ok()
                .map(|parsed| parsed.with_timezone(&Utc))
        })
        .or_else(|| {
            LENIENT_NAIVE_DATE_TIMES
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            LENIENT_DATES
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        })
}

/// Parse an `HH:MM` time of day.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}
