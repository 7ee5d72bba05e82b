//! Candidate validation.
//!
//! Checks a candidate activity before any mutation commits. Checks run in a
//! fixed order and the first failure is returned:
//!
//! 1. Required fields present (id, name, PREP date, GO date)
//! 2. Strict `DD/MM/YYYY` format (PREP, then GO)
//! 3. Weekend/holiday acceptability under the active policy (PREP, then GO)
//!
//! Date ordering (PREP strictly before GO) is a separate check,
//! [`check_sequence`], run by the mutator after the candidate passes.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::calendar::{self, HolidayProvider};
use crate::dates;
use crate::models::{Activity, CalendarDate, SchedulingPolicy};
use crate::resolver::ConstraintResolver;

/// Validation result.
pub type ValidationResult = Result<(), ValidationError>;

/// A structured validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Field the failure is attached to.
    pub field: Field,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A required field is empty.
    MissingField,
    /// A date is not strict `DD/MM/YYYY`.
    InvalidDateFormat,
    /// PREP date is not strictly before GO date.
    DateSequenceViolation,
    /// A date lands on a weekend or holiday the policy disallows.
    PolicyViolation,
    /// A date collides with another activity's PREP or GO date.
    DateConflict,
    /// An activity id has no trailing number and is excluded from sequencing.
    UnparseableIdentifier,
}

impl ValidationErrorKind {
    /// Whether the failure blocks a mutation outright.
    ///
    /// `DateConflict` halts only the automatic path and can be confirmed;
    /// `UnparseableIdentifier` only narrows sequencing.
    pub fn is_hard_blocking(&self) -> bool {
        !matches!(self, Self::DateConflict | Self::UnparseableIdentifier)
    }
}

/// Activity fields that validation reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    ActivityId,
    ActivityName,
    PrepDate,
    GoDate,
}

impl Field {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ActivityId => "Activity ID",
            Self::ActivityName => "Activity name",
            Self::PrepDate => "PREP date",
            Self::GoDate => "GO date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, field: Field, message: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
        }
    }

    pub(crate) fn missing(field: Field) -> Self {
        Self::new(
            ValidationErrorKind::MissingField,
            field,
            format!("{field} is required"),
        )
    }

    pub(crate) fn invalid_format(field: Field, value: &str) -> Self {
        Self::new(
            ValidationErrorKind::InvalidDateFormat,
            field,
            format!("{field} '{value}' must be in DD/MM/YYYY format"),
        )
    }
}

/// Validates a candidate activity under `policy`.
///
/// # Returns
/// `Ok(())` if every check passes, otherwise the first failure found.
pub fn validate_candidate<P: HolidayProvider + ?Sized>(
    activity: &Activity,
    policy: &SchedulingPolicy,
    resolver: &ConstraintResolver<'_, P>,
) -> ValidationResult {
    let required = [
        (Field::ActivityId, &activity.activity_id),
        (Field::ActivityName, &activity.activity_name),
        (Field::PrepDate, &activity.prep_date),
        (Field::GoDate, &activity.go_date),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(ValidationError::missing(*field));
    }

    let prep = parse_field(Field::PrepDate, &activity.prep_date)?;
    let go = parse_field(Field::GoDate, &activity.go_date)?;

    check_policy(Field::PrepDate, prep, policy, resolver)?;
    check_policy(Field::GoDate, go, policy, resolver)?;

    Ok(())
}

/// Checks that PREP falls strictly before GO.
///
/// Both dates must already be strictly formatted.
pub fn check_sequence(activity: &Activity) -> ValidationResult {
    let prep = parse_field(Field::PrepDate, &activity.prep_date)?;
    let go = parse_field(Field::GoDate, &activity.go_date)?;
    if prep < go {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::DateSequenceViolation,
            Field::PrepDate,
            format!("PREP date {prep} must be before GO date {go}"),
        ))
    }
}

/// Checks a single date against `policy`, reporting it under `field`.
pub fn check_policy<P: HolidayProvider + ?Sized>(
    field: Field,
    date: CalendarDate,
    policy: &SchedulingPolicy,
    resolver: &ConstraintResolver<'_, P>,
) -> ValidationResult {
    if resolver.is_acceptable(date, policy) {
        return Ok(());
    }
    let reason = if !policy.allow_weekends && calendar::is_weekend(date) {
        "a weekend".to_string()
    } else {
        resolver
            .holiday_info(date)
            .name
            .unwrap_or_else(|| "a public holiday".to_string())
    };
    Err(ValidationError::new(
        ValidationErrorKind::PolicyViolation,
        field,
        format!("{field} {date} falls on {reason}"),
    ))
}

fn parse_field(field: Field, value: &str) -> Result<CalendarDate, ValidationError> {
    dates::parse_strict(value).ok_or_else(|| ValidationError::invalid_format(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayTable;
    use crate::config::EngineConfig;

    fn candidate() -> Activity {
        Activity::new("A1", "Launch").with_dates("07/03/2025", "10/03/2025")
    }

    fn check(activity: &Activity, policy: SchedulingPolicy) -> ValidationResult {
        let table = HolidayTable::australia();
        let config = EngineConfig::default();
        let resolver = ConstraintResolver::new(&table, &config);
        validate_candidate(activity, &policy, &resolver)
    }

    #[test]
    fn test_valid_candidate() {
        assert!(check(&candidate(), SchedulingPolicy::business_days_only()).is_ok());
    }

    #[test]
    fn test_missing_field_order() {
        let act = Activity::new("", "").with_dates("", "");
        let err = check(&act, SchedulingPolicy::permissive()).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingField);
        assert_eq!(err.field, Field::ActivityId);

        let act = candidate().with_go_date("   ");
        let err = check(&act, SchedulingPolicy::permissive()).unwrap_err();
        assert_eq!(err.field, Field::GoDate);
        assert_eq!(err.to_string(), "GO date is required");
    }

    #[test]
    fn test_missing_fields_reported_before_format() {
        let act = Activity::new("A1", "").with_dates("bad", "");
        let err = check(&act, SchedulingPolicy::permissive()).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingField);
        assert_eq!(err.field, Field::ActivityName);
    }

    #[test]
    fn test_invalid_format() {
        let act = candidate().with_prep_date("7/3/2025");
        let err = check(&act, SchedulingPolicy::permissive()).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidDateFormat);
        assert_eq!(err.field, Field::PrepDate);

        let act = candidate().with_go_date("31/02/2025");
        let err = check(&act, SchedulingPolicy::permissive()).unwrap_err();
        assert_eq!(err.field, Field::GoDate);
    }

    #[test]
    fn test_format_checked_before_policy() {
        // PREP lands on a Saturday, GO is malformed: format wins.
        let act = candidate().with_dates("08/03/2025", "xx");
        let err = check(&act, SchedulingPolicy::business_days_only()).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidDateFormat);
    }

    #[test]
    fn test_policy_violation_prep_then_go() {
        // Saturday PREP, Christmas GO.
        let act = candidate().with_dates("20/12/2025", "25/12/2025");
        let err = check(&act, SchedulingPolicy::business_days_only()).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::PolicyViolation);
        assert_eq!(err.field, Field::PrepDate);

        let err = check(&act, SchedulingPolicy::permissive().with_holidays(false)).unwrap_err();
        assert_eq!(err.field, Field::GoDate);
        assert!(err.message.contains("Christmas Day"));

        assert!(check(&act, SchedulingPolicy::permissive()).is_ok());
    }

    #[test]
    fn test_check_policy_agrees_with_resolver() {
        let table = HolidayTable::australia();
        let config = EngineConfig::default().with_jurisdiction("VIC");
        let resolver = ConstraintResolver::new(&table, &config);
        let strict = SchedulingPolicy::business_days_only();

        // VIC Labour Day, Saturday, plain Friday.
        for (text, expect_ok) in [("10/03/2025", false), ("08/03/2025", false), ("07/03/2025", true)] {
            let date = dates::parse_strict(text).unwrap();
            assert_eq!(resolver.is_acceptable(date, &strict), expect_ok);
            assert_eq!(check_policy(Field::PrepDate, date, &strict, &resolver).is_ok(), expect_ok);
        }

        let labour_day = dates::parse_strict("10/03/2025").unwrap();
        let err = check_policy(Field::PrepDate, labour_day, &strict, &resolver).unwrap_err();
        assert_eq!(err.message, "PREP date 10/03/2025 falls on Labour Day");
        let saturday = dates::parse_strict("08/03/2025").unwrap();
        let err = check_policy(Field::GoDate, saturday, &strict, &resolver).unwrap_err();
        assert_eq!(err.message, "GO date 08/03/2025 falls on a weekend");
    }

    #[test]
    fn test_check_sequence() {
        assert!(check_sequence(&candidate()).is_ok());
        let same = candidate().with_dates("10/03/2025", "10/03/2025");
        let err = check_sequence(&same).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::DateSequenceViolation);
        let reversed = candidate().with_dates("11/03/2025", "10/03/2025");
        assert!(check_sequence(&reversed).is_err());
    }

    #[test]
    fn test_hard_blocking_kinds() {
        assert!(ValidationErrorKind::MissingField.is_hard_blocking());
        assert!(ValidationErrorKind::PolicyViolation.is_hard_blocking());
        assert!(!ValidationErrorKind::DateConflict.is_hard_blocking());
        assert!(!ValidationErrorKind::UnparseableIdentifier.is_hard_blocking());
    }
}
