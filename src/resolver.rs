//! Constraint resolver.
//!
//! Decides whether a date is acceptable under a [`SchedulingPolicy`], derives
//! the default PREP date from a GO date, and walks backward from an
//! unacceptable date to the nearest acceptable one.
//!
//! # Backward Search
//! The search steps one calendar day at a time and is capped at
//! [`EngineConfig::max_backward_steps`]. When the cap binds, the last
//! candidate examined is returned even though it is unacceptable; real
//! holiday density never gets close to the default of 10.

use serde::Serialize;
use tracing::{debug, warn};

use crate::calendar::{self, HolidayInfo, HolidayProvider};
use crate::config::EngineConfig;
use crate::models::{CalendarDate, SchedulingPolicy};

/// Date rules bound to a holiday provider and a configuration.
pub struct ConstraintResolver<'a, P: HolidayProvider + ?Sized> {
    calendar: &'a P,
    config: &'a EngineConfig,
}

/// A PREP date derived from a GO date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepDerivation {
    /// The GO date the derivation started from.
    pub go: CalendarDate,
    /// GO minus the configured offset, before policy resolution.
    pub naive: CalendarDate,
    /// The PREP date after backward resolution.
    pub resolved: CalendarDate,
    /// Whether `resolved` is itself acceptable (false only if the cap bound).
    pub acceptable: bool,
}

impl PrepDerivation {
    /// Whether resolution moved the PREP date.
    ///
    /// Callers should tell the user about the adjustment, quoting both
    /// `naive` and `resolved`.
    pub fn adjusted(&self) -> bool {
        self.naive != self.resolved
    }
}

impl<'a, P: HolidayProvider + ?Sized> ConstraintResolver<'a, P> {
    /// Binds the rules to a calendar and configuration.
    pub fn new(calendar: &'a P, config: &'a EngineConfig) -> Self {
        Self { calendar, config }
    }

    pub fn config(&self) -> &EngineConfig {
        self.config
    }

    /// Whether `date` is a holiday in the configured jurisdiction.
    pub fn is_holiday(&self, date: CalendarDate) -> bool {
        calendar::is_holiday(self.calendar, date, &self.config.jurisdiction)
    }

    /// Holiday details in the configured jurisdiction.
    pub fn holiday_info(&self, date: CalendarDate) -> HolidayInfo {
        calendar::holiday_info(self.calendar, date, &self.config.jurisdiction)
    }

    /// Whether `date` is acceptable under `policy`.
    ///
    /// Unacceptable iff it is a weekend the policy disallows or a holiday
    /// the policy disallows.
    pub fn is_acceptable(&self, date: CalendarDate, policy: &SchedulingPolicy) -> bool {
        if !policy.allow_weekends && calendar::is_weekend(date) {
            return false;
        }
        if !policy.allow_holidays && self.is_holiday(date) {
            return false;
        }
        true
    }

    /// GO minus the configured calendar-day offset (3 by default).
    ///
    /// The offset counts calendar days, not business days.
    pub fn derive_default_prep(&self, go: CalendarDate) -> CalendarDate {
        go.add_days(-self.config.prep_offset_days)
    }

    /// Walks back from `date` to the nearest acceptable day.
    ///
    /// Returns `date` unchanged if it is already acceptable.
    pub fn resolve_backward(&self, date: CalendarDate, policy: &SchedulingPolicy) -> CalendarDate {
        let mut candidate = date;
        let mut steps = 0u32;
        while !self.is_acceptable(candidate, policy) {
            if steps >= self.config.max_backward_steps {
                warn!(
                    start = %date,
                    last = %candidate,
                    cap = self.config.max_backward_steps,
                    "backward search cap reached without an acceptable day"
                );
                break;
            }
            candidate = candidate.pred();
            steps += 1;
        }
        candidate
    }

    /// Derives and resolves the PREP date for `go`.
    ///
    /// # Example
    ///
    /// ```
    /// use u_prepgo::calendar::HolidayTable;
    /// use u_prepgo::config::EngineConfig;
    /// use u_prepgo::dates::parse_strict;
    /// use u_prepgo::models::SchedulingPolicy;
    /// use u_prepgo::resolver::ConstraintResolver;
    ///
    /// let table = HolidayTable::australia();
    /// let config = EngineConfig::default();
    /// let resolver = ConstraintResolver::new(&table, &config);
    ///
    /// // Naive PREP 05/01/2025 is a Sunday; resolves back to Friday 03/01/2025.
    /// let go = parse_strict("08/01/2025").unwrap();
    /// let prep = resolver.derive_prep(go, &SchedulingPolicy::business_days_only());
    /// assert!(prep.adjusted());
    /// assert_eq!(prep.resolved.to_string(), "03/01/2025");
    /// ```
    pub fn derive_prep(&self, go: CalendarDate, policy: &SchedulingPolicy) -> PrepDerivation {
        let naive = self.derive_default_prep(go);
        let resolved = self.resolve_backward(naive, policy);
        let derivation = PrepDerivation {
            go,
            naive,
            resolved,
            acceptable: self.is_acceptable(resolved, policy),
        };
        if derivation.adjusted() {
            debug!(%go, %naive, %resolved, "PREP date adjusted to satisfy policy");
        }
        derivation
    }
}
