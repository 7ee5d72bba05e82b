//! Conflict detection.
//!
//! An activity *occupies* a date when its PREP date or its GO date parses to
//! that same calendar day. Unparseable text occupies nothing. Two different activities
//! occupying the same date is a conflict; an activity whose own PREP equals
//! its own GO is not a conflict by this rule (that is a sequence violation,
//! see [`crate::validation::check_sequence`]).

use serde::{Deserialize, Serialize};

use crate::dates;
use crate::models::{Activity, ActivityCollection};
use crate::validation::{Field, ValidationError, ValidationErrorKind};

/// Which entry to leave out of a conflict check.
///
/// The activity being edited must never conflict with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Exclusion<'a> {
    /// Check every entry.
    #[default]
    None,
    /// Skip the entry at this position.
    Index(usize),
    /// Skip entries with this activity id.
    Id(&'a str),
}

impl Exclusion<'_> {
    fn skips(&self, index: usize, activity: &Activity) -> bool {
        match self {
            Self::None => false,
            Self::Index(i) => *i == index,
            Self::Id(id) => activity.activity_id == *id,
        }
    }
}

/// Whether any non-excluded activity occupies `date`.
pub fn has_conflict(collection: &ActivityCollection, date: &str, exclude: Exclusion<'_>) -> bool {
    occupants(collection, date, exclude).next().is_some()
}

/// Names of the non-excluded activities occupying `date`, in collection order.
pub fn conflicting_names(
    collection: &ActivityCollection,
    date: &str,
    exclude: Exclusion<'_>,
) -> Vec<String> {
    occupants(collection, date, exclude)
        .map(|a| a.activity_name.clone())
        .collect()
}

fn occupants<'c>(
    collection: &'c ActivityCollection,
    date: &'c str,
    exclude: Exclusion<'c>,
) -> impl Iterator<Item = &'c Activity> + 'c {
    collection
        .iter()
        .enumerate()
        .filter(move |(i, a)| !exclude.skips(*i, a) && a.occupies(date))
        .map(|(_, a)| a)
}

/// One candidate date that collides with existing activities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateConflict {
    /// Which candidate field collides.
    pub field: Field,
    /// The colliding date, normalized.
    pub date: String,
    /// Ids of the occupying activities.
    pub activity_ids: Vec<String>,
    /// Names of the occupying activities.
    pub activity_names: Vec<String>,
}

/// Every collision found for a candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub conflicts: Vec<DateConflict>,
}

impl ConflictReport {
    /// Checks each `(field, date)` pair against the collection.
    ///
    /// A date listed twice (e.g. a naive and a resolved PREP that coincide)
    /// is reported once.
    pub fn check(
        collection: &ActivityCollection,
        candidates: &[(Field, &str)],
        exclude: Exclusion<'_>,
    ) -> Self {
        let mut conflicts: Vec<DateConflict> = Vec::new();
        for &(field, date) in candidates {
            let normalized = dates::normalize(date);
            if normalized.trim().is_empty() || conflicts.iter().any(|c| c.date == normalized) {
                continue;
            }
            let hits: Vec<&Activity> = occupants(collection, date, exclude).collect();
            if hits.is_empty() {
                continue;
            }
            conflicts.push(DateConflict {
                field,
                date: normalized,
                activity_ids: hits.iter().map(|a| a.activity_id.clone()).collect(),
                activity_names: hits.iter().map(|a| a.activity_name.clone()).collect(),
            });
        }
        Self { conflicts }
    }

    /// Checks a candidate's PREP and GO dates.
    pub fn for_activity(
        collection: &ActivityCollection,
        candidate: &Activity,
        exclude: Exclusion<'_>,
    ) -> Self {
        Self::check(
            collection,
            &[
                (Field::PrepDate, candidate.prep_date.as_str()),
                (Field::GoDate, candidate.go_date.as_str()),
            ],
            exclude,
        )
    }

    pub fn is_clear(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Names of every conflicting activity, de-duplicated, in first-seen order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.conflicts.iter().flat_map(|c| c.activity_names.iter()) {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        names
    }

    /// One [`ValidationErrorKind::DateConflict`] per colliding date.
    pub fn to_errors(&self) -> Vec<ValidationError> {
        self.conflicts
            .iter()
            .map(|c| {
                ValidationError::new(
                    ValidationErrorKind::DateConflict,
                    c.field,
                    format!(
                        "{} {} is already used by: {}",
                        c.field,
                        c.date,
                        c.activity_names.join(", ")
                    ),
                )
            })
            .collect()
    }
}

/// A whole-collection health problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum CollectionIssue {
    /// Two activities occupy the same date.
    SharedDate {
        date: String,
        first_id: String,
        second_id: String,
    },
    /// An activity's PREP date is not strictly before its GO date.
    SequenceViolation { activity_id: String },
}

/// Every collision and sequence violation in the collection.
///
/// Pairs are reported once, in collection order. Sequence violations only
/// count when both dates are strictly formatted.
pub fn find_all_conflicts(collection: &ActivityCollection) -> Vec<CollectionIssue> {
    let mut issues = Vec::new();
    let items = collection.as_slice();

    for (i, a) in items.iter().enumerate() {
        if !dates::is_before(&a.prep_date, &a.go_date) {
            issues.push(CollectionIssue::SequenceViolation {
                activity_id: a.activity_id.clone(),
            });
        }
        for b in &items[i + 1..] {
            let shared = [&a.prep_date, &a.go_date]
                .into_iter()
                .find(|date| b.occupies(date));
            if let Some(date) = shared {
                issues.push(CollectionIssue::SharedDate {
                    date: dates::normalize(date),
                    first_id: a.activity_id.clone(),
                    second_id: b.activity_id.clone(),
                });
            }
        }
    }

    issues
}

/// Whole-collection health check.
///
/// True if any two activities share a date or any activity's PREP date is
/// not strictly before its GO date.
pub fn has_any_conflicts(collection: &ActivityCollection) -> bool {
    !find_all_conflicts(collection).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ActivityCollection {
        vec![
            Activity::new("A1", "Kickoff").with_dates("10/06/2025", "15/06/2025"),
            Activity::new("A2", "Review").with_dates("16/06/2025", "20/06/2025"),
            Activity::new("B1", "Launch").with_dates("20/06/2025", "25/06/2025"),
        ]
        .into()
    }

    #[test]
    fn test_conflict_excludes_self_by_id() {
        let c = sample();
        assert!(!has_conflict(&c, "15/06/2025", Exclusion::Id("A1")));
        assert!(has_conflict(&c, "15/06/2025", Exclusion::Id("A2")));
        assert!(has_conflict(&c, "15/06/2025", Exclusion::None));
    }

    #[test]
    fn test_conflict_excludes_self_by_index() {
        let c = sample();
        assert!(!has_conflict(&c, "10/06/2025", Exclusion::Index(0)));
        assert!(has_conflict(&c, "10/06/2025", Exclusion::Index(1)));
    }

    #[test]
    fn test_conflicting_names() {
        let c = sample();
        assert_eq!(
            conflicting_names(&c, "20/06/2025", Exclusion::None),
            vec!["Review", "Launch"]
        );
        assert_eq!(
            conflicting_names(&c, "20/06/2025", Exclusion::Id("B1")),
            vec!["Review"]
        );
        assert!(conflicting_names(&c, "01/01/2025", Exclusion::None).is_empty());
    }

    #[test]
    fn test_lenient_query_matches_after_normalization() {
        let c = sample();
        assert!(has_conflict(&c, "15/6/2025", Exclusion::None));
        assert!(!has_conflict(&c, "", Exclusion::None));
    }

    #[test]
    fn test_own_prep_equal_go_is_not_a_conflict() {
        let c: ActivityCollection =
            vec![Activity::new("A1", "Same").with_dates("10/06/2025", "10/06/2025")].into();
        assert!(!has_conflict(&c, "10/06/2025", Exclusion::Id("A1")));
        // ... but it is a sequence problem.
        assert!(has_any_conflicts(&c));
    }

    #[test]
    fn test_report_for_candidate() {
        let c = sample();
        let candidate = Activity::new("C1", "New").with_dates("15/06/2025", "16/06/2025");
        let report = ConflictReport::for_activity(&c, &candidate, Exclusion::None);
        assert_eq!(report.conflicts.len(), 2);
        assert_eq!(report.conflicts[0].field, Field::PrepDate);
        assert_eq!(report.conflicts[0].activity_ids, vec!["A1"]);
        assert_eq!(report.conflicts[1].field, Field::GoDate);
        assert_eq!(report.names(), vec!["Kickoff", "Review"]);

        let errors = report.to_errors();
        assert_eq!(errors[0].kind, ValidationErrorKind::DateConflict);
        assert!(errors[0].message.contains("Kickoff"));
    }

    #[test]
    fn test_report_dedupes_repeated_dates() {
        let c = sample();
        let report = ConflictReport::check(
            &c,
            &[(Field::PrepDate, "15/06/2025"), (Field::PrepDate, "15/6/2025")],
            Exclusion::None,
        );
        assert_eq!(report.conflicts.len(), 1);
    }

    #[test]
    fn test_health_check() {
        let c = sample();
        let issues = find_all_conflicts(&c);
        assert_eq!(
            issues,
            vec![CollectionIssue::SharedDate {
                date: "20/06/2025".to_string(),
                first_id: "A2".to_string(),
                second_id: "B1".to_string(),
            }]
        );
        assert!(has_any_conflicts(&c));

        let clean: ActivityCollection = vec![
            Activity::new("A1", "One").with_dates("10/06/2025", "15/06/2025"),
            Activity::new("A2", "Two").with_dates("16/06/2025", "19/06/2025"),
        ]
        .into();
        assert!(!has_any_conflicts(&clean));
    }

    #[test]
    fn test_health_check_ignores_unparseable_dates() {
        let c: ActivityCollection = vec![
            Activity::new("A1", "Draft").with_dates("TBD", "TBD"),
            Activity::new("A2", "Draft").with_dates("TBD", "TBD"),
        ]
        .into();
        assert!(find_all_conflicts(&c).is_empty());
        assert!(!has_any_conflicts(&c));
        assert!(!has_conflict(&c, "TBD", Exclusion::None));
    }

    #[test]
    fn test_health_check_ignores_incomplete_dates() {
        let c: ActivityCollection = vec![
            Activity::new("A1", "Draft").with_dates("", ""),
            Activity::new("A2", "Draft").with_dates("", ""),
        ]
        .into();
        assert!(!has_any_conflicts(&c));
    }
}
