//! Day-first date format engine.
//!
//! Three operations over textual dates:
//!
//! - [`parse_strict`]: exact `DD/MM/YYYY`, calendar-checked.
//! - [`normalize`]: best-effort rewrite of lenient input into `DD/MM/YYYY`.
//! - [`is_before`]: strict day-granularity ordering of two strings.
//!
//! # Disambiguation
//!
//! The locale is day/month/year. For a lenient `a/b/yyyy` input:
//!
//! | Condition | Interpretation |
//! |-----------|----------------|
//! | `a <= 12` and `b <= 12` | day = a, month = b |
//! | `a > 12` | day = a, month = b |
//! | `b > 12` | day = b, month = a (month-first fallback) |
//!
//! A leading four-digit segment is read year-first (`2025-04-08`).

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::CalendarDate;

/// Formats tried once structural parsing has failed.
const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%A, %d %B %Y",
    "%a, %d %b %Y",
];

const FALLBACK_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parses exactly `DD/MM/YYYY`.
///
/// Day and month must be zero-padded and the year must have four digits.
/// Calendar-invalid combinations such as `31/02/2024` or `29/02/2023` are
/// rejected because the reconstructed date does not round-trip.
///
/// # Examples
///
/// ```
/// use u_prepgo::dates::parse_strict;
///
/// assert!(parse_strict("29/02/2024").is_some());
/// assert!(parse_strict("29/02/2023").is_none());
/// assert!(parse_strict("8/4/2025").is_none());
/// ```
pub fn parse_strict(text: &str) -> Option<CalendarDate> {
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let day: u32 = text[0..2].parse().ok()?;
    let month: u32 = text[3..5].parse().ok()?;
    let year: i32 = text[6..10].parse().ok()?;
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return None;
    }

    let date = CalendarDate::from_ymd(year, month, day)?;
    // Round-trip guard.
    if date.day() != day || date.month() != month || date.year() != year {
        return None;
    }
    Some(date)
}

/// Rewrites lenient input as `DD/MM/YYYY`.
///
/// Never fails: if nothing parses, the input is returned unchanged.
///
/// # Examples
///
/// ```
/// use u_prepgo::dates::normalize;
///
/// assert_eq!(normalize("8/4/2025"), "08/04/2025");
/// assert_eq!(normalize("4/13/2025"), "13/04/2025");
/// assert_eq!(normalize("not a date"), "not a date");
/// ```
pub fn normalize(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return text.to_string();
    }
    if let Some(date) = parse_strict(trimmed) {
        return date.to_string();
    }
    if let Some(date) = parse_segments(trimmed).or_else(|| parse_fallback(trimmed)) {
        return date.to_string();
    }
    text.to_string()
}

/// Parses lenient input into a date, if [`normalize`] would succeed.
pub fn parse_lenient(text: &str) -> Option<CalendarDate> {
    parse_strict(&normalize(text))
}

/// Strict chronological comparison: `a` falls on an earlier day than `b`.
///
/// Returns `true` when either input fails [`parse_strict`]: incomplete
/// dates are treated as "not yet comparable" and must not be relied on for
/// a true ordering.
pub fn is_before(a: &str, b: &str) -> bool {
    match (parse_strict(a), parse_strict(b)) {
        (Some(a), Some(b)) => a < b,
        _ => true,
    }
}

fn parse_segments(text: &str) -> Option<CalendarDate> {
    let parts: Vec<&str> = text.split(['/', '-', '.']).map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }
    if parts
        .iter()
        .any(|p| p.is_empty() || p.len() > 4 || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    if parts[0].len() == 4 {
        let year: i32 = parts[0].parse().ok()?;
        let month: u32 = parts[1].parse().ok()?;
        let day: u32 = parts[2].parse().ok()?;
        return CalendarDate::from_ymd(year, month, day);
    }

    if parts[2].len() != 4 || parts[0].len() > 2 || parts[1].len() > 2 {
        return None;
    }
    let first: u32 = parts[0].parse().ok()?;
    let second: u32 = parts[1].parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;

    let (day, month) = if first > 12 {
        (first, second)
    } else if second > 12 {
        (second, first)
    } else {
        (first, second)
    };
    CalendarDate::from_ymd(year, month, day)
}

fn parse_fallback(text: &str) -> Option<CalendarDate> {
    for fmt in FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return Some(date.into());
        }
    }
    for fmt in FALLBACK_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.date().into());
        }
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.date_naive().into())
}
