//! Engine configuration.
//!
//! All fields have defaults, so an empty JSON object (`{}`) is a valid
//! configuration.
//!
//! | Field | Default | Meaning |
//! |-------|---------|---------|
//! | `prepOffsetDays` | 3 | Calendar days between a GO date and its derived PREP date |
//! | `maxBackwardSteps` | 10 | Cap on the backward search for an acceptable day |
//! | `rescheduleOffsetDays` | 5 | Default shift for "move forward" |
//! | `jurisdiction` | `ALL` | Jurisdiction used for holiday checks |

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::ALL_JURISDICTIONS;

/// Default PREP offset (calendar days before GO).
pub const DEFAULT_PREP_OFFSET_DAYS: i64 = 3;

/// Default cap on backward search iterations.
pub const DEFAULT_MAX_BACKWARD_STEPS: u32 = 10;

/// Default "move forward" shift in days.
pub const DEFAULT_RESCHEDULE_OFFSET_DAYS: i64 = 5;

/// Tunable engine parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Calendar days subtracted from GO to derive PREP.
    pub prep_offset_days: i64,
    /// Maximum days the backward search will step.
    pub max_backward_steps: u32,
    /// Default day offset for bulk reschedule.
    pub reschedule_offset_days: i64,
    /// Jurisdiction code used for holiday checks.
    pub jurisdiction: String,
}

impl EngineConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON, filling omitted fields with defaults.
    pub fn from_json(text: &str) -> Result<Self, EngineError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the engine cannot honor.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.prep_offset_days < 1 {
            return Err(EngineError::InvalidConfig(format!(
                "prepOffsetDays must be at least 1, got {}",
                self.prep_offset_days
            )));
        }
        if self.jurisdiction.trim().is_empty() {
            return Err(EngineError::InvalidConfig(
                "jurisdiction must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_prep_offset_days(mut self, days: i64) -> Self {
        self.prep_offset_days = days;
        self
    }

    pub fn with_max_backward_steps(mut self, steps: u32) -> Self {
        self.max_backward_steps = steps;
        self
    }

    pub fn with_reschedule_offset_days(mut self, days: i64) -> Self {
        self.reschedule_offset_days = days;
        self
    }

    pub fn with_jurisdiction(mut self, jurisdiction: impl Into<String>) -> Self {
        self.jurisdiction = jurisdiction.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prep_offset_days: DEFAULT_PREP_OFFSET_DAYS,
            max_backward_steps: DEFAULT_MAX_BACKWARD_STEPS,
            reschedule_offset_days: DEFAULT_RESCHEDULE_OFFSET_DAYS,
            jurisdiction: ALL_JURISDICTIONS.to_string(),
        }
    }
}
