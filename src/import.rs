//! Importer contract.
//!
//! Line-oriented importers (CSV and similar) hand the engine raw records.
//! Column order is fixed:
//!
//! | # | Column |
//! |---|--------|
//! | 0 | activity id |
//! | 1 | activity name |
//! | 2 | description |
//! | 3 | strategy |
//! | 4 | PREP date |
//! | 5 | GO date |
//!
//! Both date columns pass through [`dates::normalize`]. A date that cannot be
//! normalized is kept verbatim so validation can report it later.

use crate::dates;
use crate::error::EngineError;
use crate::models::{Activity, ActivityCollection};

/// Number of columns an import record must carry.
pub const RECORD_COLUMNS: usize = 6;

/// Builds an activity from one record.
///
/// Extra trailing columns are ignored.
pub fn activity_from_record<S: AsRef<str>>(record: &[S]) -> Result<Activity, EngineError> {
    if record.len() < RECORD_COLUMNS {
        return Err(EngineError::MalformedRecord(format!(
            "expected {RECORD_COLUMNS} columns, found {}",
            record.len()
        )));
    }
    let field = |i: usize| record[i].as_ref().trim();
    Ok(Activity::new(field(0), field(1))
        .with_description(field(2))
        .with_strategy(field(3))
        .with_dates(dates::normalize(field(4)), dates::normalize(field(5))))
}

/// Builds a collection from records, ordered ascending by PREP date.
///
/// The sort is stable; rows without a valid PREP date keep their relative
/// order after dated rows. Ids are kept as imported.
pub fn collection_from_records<S: AsRef<str>>(
    records: &[Vec<S>],
) -> Result<ActivityCollection, EngineError> {
    let mut activities = records
        .iter()
        .map(|r| activity_from_record(r.as_slice()))
        .collect::<Result<Vec<_>, _>>()?;
    activities.sort_by_key(|a| {
        let prep = a.prep();
        (prep.is_none(), prep)
    });
    Ok(activities.into())
}
