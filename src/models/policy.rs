//! Scheduling policy.
//!
//! A policy decides which calendar conditions a date may land on. It is
//! supplied by the caller per validation and is never stored on an
//! [`Activity`](super::Activity): two activities in the same collection may
//! have been created under different policies.

use serde::{Deserialize, Serialize};

/// Weekend/holiday acceptance toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingPolicy {
    /// Whether a date may fall on Saturday or Sunday.
    pub allow_weekends: bool,
    /// Whether a date may fall on a public holiday.
    pub allow_holidays: bool,
}

impl SchedulingPolicy {
    /// Creates a policy from explicit toggles.
    pub fn new(allow_weekends: bool, allow_holidays: bool) -> Self {
        Self {
            allow_weekends,
            allow_holidays,
        }
    }

    /// Rejects both weekends and holidays.
    pub fn business_days_only() -> Self {
        Self::new(false, false)
    }

    /// Accepts every date.
    pub fn permissive() -> Self {
        Self::new(true, true)
    }

    pub fn with_weekends(mut self, allow: bool) -> Self {
        self.allow_weekends = allow;
        self
    }

    pub fn with_holidays(mut self, allow: bool) -> Self {
        self.allow_holidays = allow;
        self
    }
}

impl Default for SchedulingPolicy {
    fn default() -> Self {
        Self::business_days_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_builders() {
        let p = SchedulingPolicy::business_days_only().with_weekends(true);
        assert!(p.allow_weekends);
        assert!(!p.allow_holidays);
        assert_eq!(SchedulingPolicy::default(), SchedulingPolicy::new(false, false));
    }

    #[test]
    fn test_policy_deserialize() {
        let p: SchedulingPolicy =
            serde_json::from_str(r#"{"allowWeekends":true,"allowHolidays":false}"#).unwrap();
        assert_eq!(p, SchedulingPolicy::new(true, false));
    }
}
