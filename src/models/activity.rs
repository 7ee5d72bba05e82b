//! Activity model.
//!
//! An activity is the scheduling unit: a named piece of work with a PREP
//! (preparation) milestone and a GO (execution) milestone.
//!
//! # Date Fields
//!
//! Both milestones are held as day-first text (`DD/MM/YYYY`), the wire form
//! used by importers and exporters. Text allows a row to sit in a transient
//! invalid state while it is being edited; the typed accessors
//! [`Activity::prep`] and [`Activity::go`] parse on demand.
//!
//! # Identifier
//!
//! `activity_id` is structured as `{prefix}{number}` (e.g. `A3`, `MKT12`).
//! See [`crate::sequencer`] for how numbers are kept dense.

use serde::{Deserialize, Serialize};

use super::CalendarDate;
use crate::calendar::HolidayProvider;
use crate::dates;

/// An activity with paired PREP and GO dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Structured `{prefix}{number}` identifier.
    pub activity_id: String,
    /// Human-readable name.
    pub activity_name: String,
    /// Free text.
    #[serde(default)]
    pub description: String,
    /// Free text.
    #[serde(default)]
    pub strategy: String,
    /// PREP milestone, `DD/MM/YYYY`.
    pub prep_date: String,
    /// GO milestone, `DD/MM/YYYY`.
    pub go_date: String,
    /// Cached weekend flag. Not authoritative; see [`Activity::refresh_flags`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_weekend: Option<bool>,
    /// Cached holiday flag. Not authoritative; see [`Activity::refresh_flags`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_holiday: Option<bool>,
}

impl Activity {
    /// Creates an activity with empty dates and free-text fields.
    pub fn new(activity_id: impl Into<String>, activity_name: impl Into<String>) -> Self {
        Self {
            activity_id: activity_id.into(),
            activity_name: activity_name.into(),
            description: String::new(),
            strategy: String::new(),
            prep_date: String::new(),
            go_date: String::new(),
            is_weekend: None,
            is_holiday: None,
        }
    }

    /// Sets both milestone dates.
    pub fn with_dates(mut self, prep_date: impl Into<String>, go_date: impl Into<String>) -> Self {
        self.prep_date = prep_date.into();
        self.go_date = go_date.into();
        self
    }

    /// Sets the PREP date.
    pub fn with_prep_date(mut self, prep_date: impl Into<String>) -> Self {
        self.prep_date = prep_date.into();
        self
    }

    /// Sets the GO date.
    pub fn with_go_date(mut self, go_date: impl Into<String>) -> Self {
        self.go_date = go_date.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// Parsed PREP date, if the text is strictly valid.
    pub fn prep(&self) -> Option<CalendarDate> {
        dates::parse_strict(&self.prep_date)
    }

    /// Parsed GO date, if the text is strictly valid.
    pub fn go(&self) -> Option<CalendarDate> {
        dates::parse_strict(&self.go_date)
    }

    /// Whether this activity occupies `date` as either milestone.
    ///
    /// Both sides are parsed leniently and compared as dates. Blank or
    /// unparseable text never matches, even against identical text.
    pub fn occupies(&self, date: &str) -> bool {
        let Some(wanted) = dates::parse_lenient(date) else {
            return false;
        };
        [&self.prep_date, &self.go_date]
            .into_iter()
            .any(|own| dates::parse_lenient(own) == Some(wanted))
    }

    /// Recomputes the cached weekend/holiday flags.
    ///
    /// A flag is set when either milestone lands on that condition; it is
    /// cleared (`None`) when neither date parses.
    pub fn refresh_flags<P: HolidayProvider + ?Sized>(&mut self, calendar: &P, jurisdiction: &str) {
        let parsed: Vec<CalendarDate> = [self.prep(), self.go()].into_iter().flatten().collect();
        if parsed.is_empty() {
            self.is_weekend = None;
            self.is_holiday = None;
            return;
        }
        self.is_weekend = Some(parsed.iter().any(|d| crate::calendar::is_weekend(*d)));
        self.is_holiday = Some(
            parsed
                .iter()
                .any(|d| crate::calendar::is_holiday(calendar, *d, jurisdiction)),
        );
    }
}
