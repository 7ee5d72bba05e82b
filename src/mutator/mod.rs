//! Activity collection mutator.
//!
//! [`ActivityScheduler`] owns the holiday calendar and configuration and
//! exposes every collection mutation. Each mutation takes the caller's
//! snapshot by reference and returns a new, internally consistent
//! collection; nothing is modified in place.
//!
//! # Insert / Update
//!
//! 1. Validate the candidate (fields, format, policy); hard-blocking.
//! 2. Check PREP strictly before GO; hard-blocking.
//! 3. Check collisions with other activities; soft-blocking. A collision
//!    returns [`MutationOutcome::ConflictPending`] and commits nothing. The
//!    `*_confirmed` entry points skip only this step.
//! 4. Insert at the first index whose PREP date is not before the
//!    candidate's (append if none).
//! 5. Renumber prefix groups densely in PREP-date order.
//!
//! An update first removes the edited row, so it never collides with itself.
//!
//! # Delete
//! Removes the row and renumbers with the same prefix-grouped,
//! date-ordered rule.
//!
//! # Move Forward
//! Shifts both dates of every row from a start index onward by a day
//! offset. The shift bypasses policy and conflict checks; the returned
//! [`Reschedule`] carries a post-shift health check instead.

mod outcome;

pub use outcome::{MutationOutcome, PrepProposal, Reschedule};

use tracing::{debug, info, warn};

use crate::calendar::{HolidayProvider, HolidayTable};
use crate::config::EngineConfig;
use crate::conflict::{self, ConflictReport, Exclusion};
use crate::dates;
use crate::error::EngineError;
use crate::models::{Activity, ActivityCollection, SchedulingPolicy};
use crate::resolver::{ConstraintResolver, PrepDerivation};
use crate::sequencer;
use crate::validation::{self, Field, ValidationError, ValidationResult};

/// Scheduling engine over a holiday calendar.
///
/// # Example
///
/// ```
/// use u_prepgo::models::{Activity, ActivityCollection, SchedulingPolicy};
/// use u_prepgo::mutator::ActivityScheduler;
///
/// let scheduler = ActivityScheduler::australia();
/// let rows: ActivityCollection = vec![
///     Activity::new("A1", "Kickoff").with_dates("06/01/2025", "09/01/2025"),
/// ]
/// .into();
///
/// let candidate = Activity::new("A2", "Review").with_dates("13/01/2025", "16/01/2025");
/// let outcome = scheduler
///     .insert(&rows, candidate, &SchedulingPolicy::business_days_only())
///     .unwrap();
/// let rows = outcome.committed().unwrap();
/// assert_eq!(rows.ids(), vec!["A1", "A2"]);
/// ```
#[derive(Debug, Clone)]
pub struct ActivityScheduler<P: HolidayProvider = HolidayTable> {
    calendar: P,
    config: EngineConfig,
}

impl ActivityScheduler<HolidayTable> {
    /// Scheduler over the built-in Australian holiday table.
    pub fn australia() -> Self {
        Self::new(HolidayTable::australia())
    }
}

impl<P: HolidayProvider> ActivityScheduler<P> {
    /// Creates a scheduler with the default configuration.
    pub fn new(calendar: P) -> Self {
        Self {
            calendar,
            config: EngineConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn calendar(&self) -> &P {
        &self.calendar
    }

    /// Date rules bound to this scheduler's calendar and configuration.
    pub fn resolver(&self) -> ConstraintResolver<'_, P> {
        ConstraintResolver::new(&self.calendar, &self.config)
    }

    /// Validates a candidate (fields, format, policy).
    pub fn validate(&self, candidate: &Activity, policy: &SchedulingPolicy) -> ValidationResult {
        validation::validate_candidate(candidate, policy, &self.resolver())
    }

    /// Derives and resolves a PREP date from GO text.
    ///
    /// The GO text must be strict `DD/MM/YYYY`.
    pub fn derive_prep(
        &self,
        go_date: &str,
        policy: &SchedulingPolicy,
    ) -> Result<PrepDerivation, ValidationError> {
        let go = dates::parse_strict(go_date)
            .ok_or_else(|| ValidationError::invalid_format(Field::GoDate, go_date))?;
        Ok(self.resolver().derive_prep(go, policy))
    }

    /// Proposes a PREP date for a GO date and reports collisions.
    ///
    /// The GO date itself must be acceptable under `policy`. Collisions
    /// are checked for the naive PREP date (the one a user sees before any
    /// adjustment), the resolved PREP date, and the GO date.
    pub fn propose_from_go(
        &self,
        collection: &ActivityCollection,
        go_date: &str,
        policy: &SchedulingPolicy,
        exclude: Exclusion<'_>,
    ) -> Result<PrepProposal, ValidationError> {
        if go_date.trim().is_empty() {
            return Err(ValidationError::missing(Field::GoDate));
        }
        let derivation = self.derive_prep(go_date, policy)?;
        validation::check_policy(Field::GoDate, derivation.go, policy, &self.resolver())?;

        let naive = derivation.naive.to_string();
        let resolved = derivation.resolved.to_string();
        let go = derivation.go.to_string();
        let conflicts = ConflictReport::check(
            collection,
            &[
                (Field::PrepDate, naive.as_str()),
                (Field::PrepDate, resolved.as_str()),
                (Field::GoDate, go.as_str()),
            ],
            exclude,
        );
        if !conflicts.is_clear() {
            debug!(go = %go, names = ?conflicts.names(), "proposed dates collide");
        }
        Ok(PrepProposal {
            derivation,
            conflicts,
        })
    }

    /// Inserts a new activity, pausing on collisions.
    pub fn insert(
        &self,
        collection: &ActivityCollection,
        candidate: Activity,
        policy: &SchedulingPolicy,
    ) -> Result<MutationOutcome, EngineError> {
        self.check_candidate(&candidate, policy)?;
        let report = ConflictReport::for_activity(collection, &candidate, Exclusion::None);
        if !report.is_clear() {
            debug!(id = %candidate.activity_id, names = ?report.names(), "insert paused on conflict");
            return Ok(MutationOutcome::ConflictPending(report));
        }
        Ok(MutationOutcome::Committed(self.commit_insert(collection, candidate)))
    }

    /// Inserts a new activity despite collisions.
    ///
    /// Every other check still applies.
    pub fn insert_confirmed(
        &self,
        collection: &ActivityCollection,
        candidate: Activity,
        policy: &SchedulingPolicy,
    ) -> Result<ActivityCollection, EngineError> {
        self.check_candidate(&candidate, policy)?;
        Ok(self.commit_insert(collection, candidate))
    }

    /// Replaces the activity at `index`, pausing on collisions.
    pub fn update(
        &self,
        collection: &ActivityCollection,
        index: usize,
        edited: Activity,
        policy: &SchedulingPolicy,
    ) -> Result<MutationOutcome, EngineError> {
        let remainder = remove_at(collection, index)?;
        self.check_candidate(&edited, policy)?;
        let report = ConflictReport::for_activity(&remainder, &edited, Exclusion::None);
        if !report.is_clear() {
            debug!(index, names = ?report.names(), "update paused on conflict");
            return Ok(MutationOutcome::ConflictPending(report));
        }
        Ok(MutationOutcome::Committed(self.commit_insert(&remainder, edited)))
    }

    /// Replaces the activity at `index` despite collisions.
    pub fn update_confirmed(
        &self,
        collection: &ActivityCollection,
        index: usize,
        edited: Activity,
        policy: &SchedulingPolicy,
    ) -> Result<ActivityCollection, EngineError> {
        let remainder = remove_at(collection, index)?;
        self.check_candidate(&edited, policy)?;
        Ok(self.commit_insert(&remainder, edited))
    }

    /// Removes the activity at `index` and renumbers.
    pub fn delete(
        &self,
        collection: &ActivityCollection,
        index: usize,
    ) -> Result<ActivityCollection, EngineError> {
        let remainder = remove_at(collection, index)?;
        info!(index, remaining = remainder.len(), "activity deleted");
        Ok(sequencer::renumber_after_mutation(&remainder))
    }

    /// Shifts every activity from `start_index` onward by `offset_days`
    /// (the configured default when `None`).
    ///
    /// No policy or conflict check is applied. A `start_index` equal to the
    /// collection length shifts nothing; anything past it is out of bounds.
    pub fn move_forward(
        &self,
        collection: &ActivityCollection,
        start_index: usize,
        offset_days: Option<i64>,
    ) -> Result<Reschedule, EngineError> {
        if start_index > collection.len() {
            return Err(EngineError::IndexOutOfBounds {
                index: start_index,
                len: collection.len(),
            });
        }
        let offset = offset_days.unwrap_or(self.config.reschedule_offset_days);

        let mut activities = collection.clone();
        let mut shifted = 0;
        let mut skipped = Vec::new();
        for activity in activities.as_mut_vec().iter_mut().skip(start_index) {
            let prep = activity.prep();
            let go = activity.go();
            if prep.is_none() || go.is_none() {
                warn!(id = %activity.activity_id, "activity has an unparseable date; not shifted");
                skipped.push(activity.activity_id.clone());
            }
            if let Some(prep) = prep {
                activity.prep_date = prep.add_days(offset).to_string();
            }
            if let Some(go) = go {
                activity.go_date = go.add_days(offset).to_string();
            }
            if prep.is_some() || go.is_some() {
                shifted += 1;
            }
        }

        let issues = conflict::find_all_conflicts(&activities);
        info!(start_index, offset, shifted, issues = issues.len(), "activities moved forward");
        Ok(Reschedule {
            activities,
            shifted,
            skipped,
            issues,
        })
    }

    /// Recomputes every activity's cached weekend/holiday flags.
    pub fn refresh_flags(&self, collection: &ActivityCollection) -> ActivityCollection {
        collection
            .iter()
            .cloned()
            .map(|mut activity| {
                activity.refresh_flags(&self.calendar, &self.config.jurisdiction);
                activity
            })
            .collect()
    }

    fn check_candidate(&self, candidate: &Activity, policy: &SchedulingPolicy) -> Result<(), EngineError> {
        self.validate(candidate, policy)?;
        validation::check_sequence(candidate)?;
        Ok(())
    }

    fn commit_insert(&self, collection: &ActivityCollection, candidate: Activity) -> ActivityCollection {
        let mut rows = collection.clone();
        let position = insertion_index(&rows, &candidate);
        info!(id = %candidate.activity_id, position, "activity committed");
        rows.as_mut_vec().insert(position, candidate);
        sequencer::renumber_after_mutation(&rows)
    }
}

impl Default for ActivityScheduler<HolidayTable> {
    fn default() -> Self {
        Self::australia()
    }
}

/// First index whose PREP date is not before the candidate's, or the end.
pub fn insertion_index(collection: &ActivityCollection, candidate: &Activity) -> usize {
    collection
        .iter()
        .position(|a| !dates::is_before(&a.prep_date, &candidate.prep_date))
        .unwrap_or(collection.len())
}

fn remove_at(collection: &ActivityCollection, index: usize) -> Result<ActivityCollection, EngineError> {
    if index >= collection.len() {
        return Err(EngineError::IndexOutOfBounds {
            index,
            len: collection.len(),
        });
    }
    let mut rows = collection.clone();
    rows.as_mut_vec().remove(index);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn strict() -> SchedulingPolicy {
        SchedulingPolicy::business_days_only()
    }

    fn sample() -> ActivityCollection {
        vec![
            Activity::new("A1", "Kickoff").with_dates("06/01/2025", "09/01/2025"),
            Activity::new("A2", "Review").with_dates("13/01/2025", "16/01/2025"),
            Activity::new("B1", "Launch").with_dates("20/01/2025", "23/01/2025"),
        ]
        .into()
    }

    fn names(c: &ActivityCollection) -> Vec<&str> {
        c.iter().map(|a| a.activity_name.as_str()).collect()
    }

    #[test]
    fn test_insert_earliest_goes_first() {
        let s = ActivityScheduler::australia();
        let candidate = Activity::new("A9", "Early").with_dates("02/01/2025", "03/01/2025");
        let out = s.insert(&sample(), candidate, &strict()).unwrap().committed().unwrap();
        assert_eq!(names(&out), vec!["Early", "Kickoff", "Review", "Launch"]);
        assert_eq!(out.ids(), vec!["A1", "A2", "A3", "B1"]);
    }

    #[test]
    fn test_insert_latest_appends() {
        let s = ActivityScheduler::australia();
        let c = sample();
        let id = sequencer::next_id(&c, "B");
        let candidate = Activity::new(id, "Wrap").with_dates("28/01/2025", "31/01/2025");
        let out = s.insert(&c, candidate, &strict()).unwrap().committed().unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(out[3].activity_name, "Wrap");
        assert_eq!(out[3].activity_id, "B2");
    }

    #[test]
    fn test_insert_middle_renumbers_group() {
        let s = ActivityScheduler::australia();
        let candidate = Activity::new("A3", "Mid").with_dates("10/01/2025", "14/01/2025");
        let out = s.insert(&sample(), candidate, &strict()).unwrap().committed().unwrap();
        assert_eq!(names(&out), vec!["Kickoff", "Mid", "Review", "Launch"]);
        assert_eq!(out.ids(), vec!["A1", "A2", "A3", "B1"]);
        // Caller's snapshot untouched.
        assert_eq!(sample().len(), 3);
    }

    #[test]
    fn test_insert_pauses_on_conflict_and_confirm_proceeds() {
        let s = ActivityScheduler::australia();
        let c = sample();
        let candidate = Activity::new("A3", "Clash").with_dates("08/01/2025", "09/01/2025");
        let outcome = s.insert(&c, candidate.clone(), &strict()).unwrap();
        assert!(!outcome.is_committed());
        let report = outcome.conflicts().unwrap();
        assert_eq!(report.names(), vec!["Kickoff"]);

        let out = s.insert_confirmed(&c, candidate, &strict()).unwrap();
        assert_eq!(out.len(), 4);
        assert!(conflict::has_any_conflicts(&out));
    }

    #[test]
    fn test_confirm_still_enforces_hard_checks() {
        let s = ActivityScheduler::australia();
        let weekend = Activity::new("A3", "Sat").with_dates("11/01/2025", "14/01/2025");
        let err = s.insert_confirmed(&sample(), weekend, &strict()).unwrap_err();
        assert_eq!(
            err.as_validation().unwrap().kind,
            ValidationErrorKind::PolicyViolation
        );

        let backwards = Activity::new("A3", "Backwards").with_dates("15/01/2025", "14/01/2025");
        let err = s.insert_confirmed(&sample(), backwards, &strict()).unwrap_err();
        assert_eq!(
            err.as_validation().unwrap().kind,
            ValidationErrorKind::DateSequenceViolation
        );
    }

    #[test]
    fn test_update_excludes_self_and_reorders() {
        let s = ActivityScheduler::australia();
        let c = sample();
        // Same dates as before: no self-conflict.
        let unchanged = c[0].clone().with_description("edited");
        let out = s.update(&c, 0, unchanged, &strict()).unwrap().committed().unwrap();
        assert_eq!(out[0].description, "edited");

        // Move Kickoff after Review.
        let moved = c[0].clone().with_dates("14/01/2025", "17/01/2025");
        let out = s.update(&c, 0, moved, &strict()).unwrap().committed().unwrap();
        assert_eq!(names(&out), vec!["Review", "Kickoff", "Launch"]);
        assert_eq!(out.ids(), vec!["A1", "A2", "B1"]);
    }

    #[test]
    fn test_update_conflict_with_other_row() {
        let s = ActivityScheduler::australia();
        let c = sample();
        let clash = c[0].clone().with_dates("08/01/2025", "13/01/2025");
        let outcome = s.update(&c, 0, clash.clone(), &strict()).unwrap();
        assert_eq!(outcome.conflicts().unwrap().names(), vec!["Review"]);
        let out = s.update_confirmed(&c, 0, clash, &strict()).unwrap();
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_update_out_of_bounds() {
        let s = ActivityScheduler::australia();
        let err = s
            .update(&sample(), 7, Activity::new("A1", "x"), &strict())
            .unwrap_err();
        assert_eq!(err, EngineError::IndexOutOfBounds { index: 7, len: 3 });
    }

    #[test]
    fn test_delete_renumbers_by_prefix_and_date() {
        let s = ActivityScheduler::australia();
        let out = s.delete(&sample(), 0).unwrap();
        assert_eq!(names(&out), vec!["Review", "Launch"]);
        assert_eq!(out.ids(), vec!["A1", "B1"]);
        assert!(s.delete(&out, 2).is_err());
    }

    #[test]
    fn test_move_forward_default_offset() {
        let s = ActivityScheduler::australia();
        let r = s.move_forward(&sample(), 1, None).unwrap();
        assert_eq!(r.shifted, 2);
        assert_eq!(r.activities[0].prep_date, "06/01/2025");
        assert_eq!(r.activities[1].prep_date, "18/01/2025");
        assert_eq!(r.activities[1].go_date, "21/01/2025");
        assert_eq!(r.activities[2].go_date, "28/01/2025");
        assert!(!r.has_any_conflicts());
    }

    #[test]
    fn test_move_forward_bypasses_checks_but_reports_health() {
        let s = ActivityScheduler::australia();
        let c: ActivityCollection = vec![
            Activity::new("A1", "Long").with_dates("06/01/2025", "20/01/2025"),
            Activity::new("A2", "Short").with_dates("13/01/2025", "16/01/2025"),
        ]
        .into();
        // Short moves to 17/01–20/01, landing on Long's GO date.
        let r = s.move_forward(&c, 1, Some(4)).unwrap();
        assert_eq!(r.activities[1].go_date, "20/01/2025");
        assert!(r.has_any_conflicts());

        // A Saturday landing is not corrected.
        let r = s.move_forward(&sample(), 2, Some(5)).unwrap();
        assert_eq!(r.activities[2].prep_date, "25/01/2025");
    }

    #[test]
    fn test_move_forward_skips_unparseable_dates() {
        let s = ActivityScheduler::australia();
        let c: ActivityCollection = vec![
            Activity::new("A1", "Draft").with_dates("soon", "06/01/2025"),
        ]
        .into();
        let r = s.move_forward(&c, 0, Some(1)).unwrap();
        assert_eq!(r.skipped, vec!["A1"]);
        assert_eq!(r.activities[0].prep_date, "soon");
        assert_eq!(r.activities[0].go_date, "07/01/2025");
        assert!(s.move_forward(&c, 2, None).is_err());
    }

    #[test]
    fn test_move_forward_at_end_is_noop() {
        let s = ActivityScheduler::australia();
        let r = s.move_forward(&ActivityCollection::new(), 0, None).unwrap();
        assert!(r.activities.is_empty());
        assert_eq!(r.shifted, 0);

        let c = sample();
        let r = s.move_forward(&c, c.len(), Some(3)).unwrap();
        assert_eq!(r.shifted, 0);
        assert_eq!(r.activities, c);
        assert_eq!(
            s.move_forward(&c, 4, None).unwrap_err(),
            EngineError::IndexOutOfBounds { index: 4, len: 3 }
        );
    }

    #[test]
    fn test_update_confirmed_enforces_policy() {
        let s = ActivityScheduler::australia();
        let c = sample();
        // Saturday PREP.
        let edited = c[1].clone().with_dates("11/01/2025", "16/01/2025");
        let err = s.update_confirmed(&c, 1, edited.clone(), &strict()).unwrap_err();
        let validation = err.as_validation().unwrap();
        assert_eq!(validation.kind, ValidationErrorKind::PolicyViolation);
        assert_eq!(validation.field, Field::PrepDate);

        let err = s.update(&c, 1, edited, &strict()).unwrap_err();
        assert_eq!(
            err.as_validation().unwrap().kind,
            ValidationErrorKind::PolicyViolation
        );
    }

    #[test]
    fn test_derive_prep_rejects_bad_go() {
        let s = ActivityScheduler::australia();
        let err = s.derive_prep("8/1/2025", &strict()).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidDateFormat);
        assert_eq!(err.field, Field::GoDate);
    }

    #[test]
    fn test_propose_rejects_weekend_go() {
        let s = ActivityScheduler::australia();
        let err = s
            .propose_from_go(&sample(), "11/01/2025", &strict(), Exclusion::None)
            .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::PolicyViolation);
        let err = s
            .propose_from_go(&sample(), "", &strict(), Exclusion::None)
            .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingField);
    }

    #[test]
    fn test_propose_clear_and_apply() {
        let s = ActivityScheduler::australia();
        let p = s
            .propose_from_go(&sample(), "31/01/2025", &strict(), Exclusion::None)
            .unwrap();
        assert!(!p.requires_confirmation());
        assert!(!p.adjusted());
        assert!(p.adjustment_notice().is_none());
        let act = p.apply_to(Activity::new("B2", "Wrap"));
        assert_eq!(act.prep_date, "28/01/2025");
        assert_eq!(act.go_date, "31/01/2025");
    }

    #[test]
    fn test_refresh_flags() {
        let s = ActivityScheduler::australia();
        let c: ActivityCollection = vec![
            Activity::new("A1", "Holiday").with_dates("24/12/2025", "25/12/2025"),
            Activity::new("A2", "Plain").with_dates("02/12/2025", "05/12/2025"),
        ]
        .into();
        let out = s.refresh_flags(&c);
        assert_eq!(out[0].is_holiday, Some(true));
        assert_eq!(out[0].is_weekend, Some(false));
        assert_eq!(out[1].is_holiday, Some(false));
        assert!(c[0].is_holiday.is_none());
    }
}
