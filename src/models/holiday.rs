//! Holiday reference data.
//!
//! A [`HolidayFact`] is an immutable datum: one named holiday on one date,
//! observed in a set of jurisdictions. Several facts may share a date when
//! regions observe different holidays on the same day (e.g. NT May Day and
//! QLD Labour Day).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::CalendarDate;

/// Jurisdiction token that matches every jurisdiction query.
pub const ALL_JURISDICTIONS: &str = "ALL";

/// A public holiday observed on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayFact {
    /// Observed date.
    pub date: CalendarDate,
    /// Display name.
    pub name: String,
    /// Jurisdiction codes, or [`ALL_JURISDICTIONS`].
    pub jurisdictions: BTreeSet<String>,
}

impl HolidayFact {
    /// Creates a fact observed in the given jurisdictions.
    pub fn new<I, S>(date: CalendarDate, name: impl Into<String>, jurisdictions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            date,
            name: name.into(),
            jurisdictions: jurisdictions.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a fact observed everywhere.
    pub fn national(date: CalendarDate, name: impl Into<String>) -> Self {
        Self::new(date, name, [ALL_JURISDICTIONS])
    }

    /// Whether this fact answers a query for `jurisdiction`.
    ///
    /// Matches when the set holds `ALL` or the queried code itself.
    pub fn applies_to(&self, jurisdiction: &str) -> bool {
        self.jurisdictions.contains(ALL_JURISDICTIONS) || self.jurisdictions.contains(jurisdiction)
    }
}
