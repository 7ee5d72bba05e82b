//! Day-granularity calendar date.
//!
//! The engine's canonical textual form is day-first `DD/MM/YYYY`. The
//! persistent store speaks ISO `YYYY-MM-DD`; [`CalendarDate::to_iso`] and
//! [`CalendarDate::from_iso`] cover that boundary.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical day-first format.
pub const DAY_FIRST_FORMAT: &str = "%d/%m/%Y";

/// ISO format used by the store adapter.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// A calendar date with no time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from year, month, day. Returns `None` for invalid combinations.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses an ISO `YYYY-MM-DD` string.
    pub fn from_iso(text: &str) -> Option<Self> {
        NaiveDate::parse_from_str(text.trim(), ISO_FORMAT)
            .ok()
            .map(Self)
    }

    /// ISO `YYYY-MM-DD` representation.
    pub fn to_iso(&self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }

    /// The underlying chrono date.
    #[inline]
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Shifts by a signed number of calendar days.
    ///
    /// Saturates at the chrono date range boundary.
    pub fn add_days(&self, days: i64) -> Self {
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.0.checked_add_days(magnitude)
        } else {
            self.0.checked_sub_days(magnitude)
        };
        Self(shifted.unwrap_or(self.0))
    }

    /// The previous calendar day.
    #[inline]
    pub fn pred(&self) -> Self {
        self.add_days(-1)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FIRST_FORMAT))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        crate::dates::parse_strict(&text).ok_or_else(|| {
            serde::de::Error::custom(format!("expected DD/MM/YYYY date, got '{text}'"))
        })
    }
}
