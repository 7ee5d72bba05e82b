//! Calendar fact provider.
//!
//! Answers two questions about a calendar date:
//!
//! - Is it a weekend? Computed from the proleptic Gregorian weekday.
//! - Is it a public holiday, and for which jurisdictions? Answered by a
//!   [`HolidayProvider`], an injected and versioned dataset.
//!
//! # Jurisdiction Matching
//! A query for jurisdiction `J` matches any fact whose jurisdiction set
//! contains `ALL` or `J`. All facts on the queried date are considered, not
//! just the first, because regions can observe different holidays on the
//! same day.

mod australia;
mod table;

pub use table::HolidayTable;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{CalendarDate, HolidayFact};

/// Source of holiday facts.
///
/// Implementations return every fact registered for `date`, in
/// registration order.
pub trait HolidayProvider {
    /// Dataset version label.
    fn version(&self) -> &str;

    /// All facts observed on `date`.
    fn lookup(&self, date: CalendarDate) -> Vec<&HolidayFact>;
}

/// Descriptive result of a holiday lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayInfo {
    pub is_holiday: bool,
    /// Name of the earliest-registered matching fact.
    pub name: Option<String>,
    /// Jurisdictions of the earliest-registered matching fact.
    pub jurisdictions: Option<BTreeSet<String>>,
}

/// Whether `date` falls on Saturday or Sunday.
#[inline]
pub fn is_weekend(date: CalendarDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether `date` is a holiday in `jurisdiction`.
pub fn is_holiday<P: HolidayProvider + ?Sized>(
    provider: &P,
    date: CalendarDate,
    jurisdiction: &str,
) -> bool {
    provider
        .lookup(date)
        .iter()
        .any(|fact| fact.applies_to(jurisdiction))
}

/// Holiday details for `date` in `jurisdiction`.
///
/// Returns the first matching fact's name and jurisdictions.
pub fn holiday_info<P: HolidayProvider + ?Sized>(
    provider: &P,
    date: CalendarDate,
    jurisdiction: &str,
) -> HolidayInfo {
    match provider
        .lookup(date)
        .into_iter()
        .find(|fact| fact.applies_to(jurisdiction))
    {
        Some(fact) => HolidayInfo {
            is_holiday: true,
            name: Some(fact.name.clone()),
            jurisdictions: Some(fact.jurisdictions.clone()),
        },
        None => HolidayInfo::default(),
    }
}
