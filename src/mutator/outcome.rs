//! Results returned by collection mutations.

use serde::Serialize;

use crate::conflict::{CollectionIssue, ConflictReport};
use crate::models::{Activity, ActivityCollection};
use crate::resolver::PrepDerivation;

/// Result of an insert or update.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// The mutation committed; this is the new canonical collection.
    Committed(ActivityCollection),
    /// The candidate collides with other activities. Nothing was committed;
    /// the caller may re-issue the mutation through the matching
    /// `*_confirmed` entry point.
    ConflictPending(ConflictReport),
}

impl MutationOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    /// The committed collection, if any.
    pub fn committed(self) -> Option<ActivityCollection> {
        match self {
            Self::Committed(collection) => Some(collection),
            Self::ConflictPending(_) => None,
        }
    }

    /// The pending conflicts, if any.
    pub fn conflicts(&self) -> Option<&ConflictReport> {
        match self {
            Self::Committed(_) => None,
            Self::ConflictPending(report) => Some(report),
        }
    }
}

/// A PREP date proposed for a GO date, with its collisions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepProposal {
    pub derivation: PrepDerivation,
    /// Collisions for the naive PREP, the resolved PREP, and the GO date.
    pub conflicts: ConflictReport,
}

impl PrepProposal {
    /// Whether the caller must confirm before committing.
    pub fn requires_confirmation(&self) -> bool {
        !self.conflicts.is_clear()
    }

    /// Whether the PREP date was moved off the naive date.
    pub fn adjusted(&self) -> bool {
        self.derivation.adjusted()
    }

    /// User-facing note describing an automatic adjustment.
    pub fn adjustment_notice(&self) -> Option<String> {
        self.adjusted().then(|| {
            format!(
                "PREP date moved from {} to {} to avoid a weekend or holiday",
                self.derivation.naive, self.derivation.resolved
            )
        })
    }

    /// Writes the proposed PREP and GO dates into `activity`.
    pub fn apply_to(&self, activity: Activity) -> Activity {
        activity.with_dates(
            self.derivation.resolved.to_string(),
            self.derivation.go.to_string(),
        )
    }
}

/// Result of a bulk "move forward".
#[derive(Debug, Clone, PartialEq)]
pub struct Reschedule {
    /// The shifted collection.
    pub activities: ActivityCollection,
    /// Number of rows whose dates moved.
    pub shifted: usize,
    /// Ids of rows in range that had a date which could not be parsed.
    /// Those dates are left as they were.
    pub skipped: Vec<String>,
    /// Health problems present after the shift.
    pub issues: Vec<CollectionIssue>,
}

impl Reschedule {
    /// Post-shift health check: any collision or sequence violation.
    pub fn has_any_conflicts(&self) -> bool {
        !self.issues.is_empty()
    }
}
