//! Identifier sequencing.
//!
//! Activity ids are `{prefix}{number}`: the number is the trailing maximal
//! digit run and the prefix is everything before it. Activities sharing a
//! prefix form a *prefix group*. After every mutation each group is
//! renumbered so its numbers are dense (`1..=N`) and follow PREP-date order.
//!
//! Ids without a trailing number (or with an empty prefix) are *unmanaged*:
//! they are left untouched and take no part in any group's numbering.
//!
//! # Example
//!
//! ```
//! use u_prepgo::models::{Activity, ActivityCollection};
//! use u_prepgo::sequencer::renumber_after_mutation;
//!
//! let rows: ActivityCollection = vec![
//!     Activity::new("A1", "One").with_dates("01/01/2025", "05/01/2025"),
//!     Activity::new("A3", "Two").with_dates("06/01/2025", "09/01/2025"),
//!     Activity::new("A4", "Three").with_dates("10/01/2025", "15/01/2025"),
//! ]
//! .into();
//! let renumbered = renumber_after_mutation(&rows);
//! assert_eq!(renumbered.ids(), vec!["A1", "A2", "A3"]);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::models::{ActivityCollection, CalendarDate};
use crate::validation::{Field, ValidationError, ValidationErrorKind};

/// A structured activity id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedId {
    pub prefix: String,
    pub number: u64,
}

impl ParsedId {
    pub fn new(prefix: impl Into<String>, number: u64) -> Self {
        Self {
            prefix: prefix.into(),
            number,
        }
    }
}

impl fmt::Display for ParsedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.number)
    }
}

/// Splits an id into prefix and trailing number.
///
/// Returns `None` when there are no trailing digits, when nothing precedes
/// them, or when the number overflows.
pub fn parse_id(id: &str) -> Option<ParsedId> {
    let prefix = id.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &id[prefix.len()..];
    if prefix.is_empty() || digits.is_empty() {
        return None;
    }
    let number = digits.parse().ok()?;
    Some(ParsedId::new(prefix, number))
}

/// Like [`parse_id`], reporting an unmanaged id as a non-fatal error.
pub fn parse_id_checked(id: &str) -> Result<ParsedId, ValidationError> {
    parse_id(id).ok_or_else(|| {
        ValidationError::new(
            ValidationErrorKind::UnparseableIdentifier,
            Field::ActivityId,
            format!("Activity ID '{id}' has no numeric suffix and will not be renumbered"),
        )
    })
}

/// Next free number for `prefix`: 1 if unused, otherwise max + 1.
pub fn next_number(collection: &ActivityCollection, prefix: &str) -> u64 {
    collection
        .iter()
        .filter_map(|a| parse_id(&a.activity_id))
        .filter(|p| p.prefix == prefix)
        .map(|p| p.number)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Next free id string for `prefix`.
pub fn next_id(collection: &ActivityCollection, prefix: &str) -> String {
    ParsedId::new(prefix, next_number(collection, prefix)).to_string()
}

/// Warnings for every unmanaged id in the collection.
pub fn unmanaged_ids(collection: &ActivityCollection) -> Vec<ValidationError> {
    collection
        .iter()
        .filter_map(|a| parse_id_checked(&a.activity_id).err())
        .collect()
}

/// Renumbers every prefix group densely in PREP-date order.
///
/// # Algorithm
/// 1. Group parseable ids by prefix, remembering collection positions.
/// 2. Stable-sort each group by PREP date; rows without a valid PREP date
///    sort after dated rows, keeping their relative order.
/// 3. Assign each member its 1-based rank within the group.
///
/// Row order in the collection is not changed; only ids are rewritten.
pub fn renumber_after_mutation(collection: &ActivityCollection) -> ActivityCollection {
    let mut groups: HashMap<String, Vec<(usize, Option<CalendarDate>)>> = HashMap::new();
    for (idx, activity) in collection.iter().enumerate() {
        match parse_id(&activity.activity_id) {
            Some(parsed) => groups
                .entry(parsed.prefix)
                .or_default()
                .push((idx, activity.prep())),
            None => debug!(id = %activity.activity_id, "skipping unmanaged activity id"),
        }
    }

    let mut renumbered = collection.clone();
    let rows = renumbered.as_mut_vec();
    for (prefix, mut members) in groups {
        members.sort_by_key(|&(_, prep)| (prep.is_none(), prep));
        for (rank, (idx, _)) in members.into_iter().enumerate() {
            rows[idx].activity_id = ParsedId::new(prefix.as_str(), rank as u64 + 1).to_string();
        }
    }
    renumbered
}

/// Renumbers by collection position, ignoring dates.
///
/// Each prefix group's members are numbered in the order they appear.
/// Exposed for callers that keep rows in a hand-arranged order; the
/// mutator itself always uses [`renumber_after_mutation`].
pub fn renumber_by_position(collection: &ActivityCollection) -> ActivityCollection {
    let mut counters: HashMap<String, u64> = HashMap::new();
    collection
        .iter()
        .cloned()
        .map(|mut activity| {
            if let Some(parsed) = parse_id(&activity.activity_id) {
                let counter = counters.entry(parsed.prefix.clone()).or_insert(0);
                *counter += 1;
                activity.activity_id = ParsedId::new(parsed.prefix, *counter).to_string();
            }
            activity
        })
        .collect()
}

/// Whether every prefix group is dense and in PREP-date order.
pub fn is_densely_numbered(collection: &ActivityCollection) -> bool {
    renumber_after_mutation(collection).ids() == collection.ids()
}
