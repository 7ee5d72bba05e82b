//! In-memory holiday table.
//!
//! Facts are kept in registration order and indexed by date, so a lookup
//! returns every fact on a date in the order it was added.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::HolidayProvider;
use crate::error::EngineError;
use crate::models::{CalendarDate, HolidayFact};

/// Serialized form of a holiday dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HolidayDataset {
    version: String,
    holidays: Vec<HolidayFact>,
}

/// A versioned, date-indexed set of holiday facts.
///
/// # Example
///
/// ```
/// use u_prepgo::calendar::{is_holiday, HolidayTable};
/// use u_prepgo::dates::parse_strict;
///
/// let table = HolidayTable::australia();
/// let may_6 = parse_strict("06/05/2024").unwrap();
/// assert!(is_holiday(&table, may_6, "NT"));
/// assert!(!is_holiday(&table, may_6, "VIC"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HolidayTable {
    version: String,
    facts: Vec<HolidayFact>,
    by_date: HashMap<CalendarDate, Vec<usize>>,
}

impl HolidayTable {
    /// Creates an empty table.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            facts: Vec::new(),
            by_date: HashMap::new(),
        }
    }

    /// Built-in Australian national and state/territory holidays.
    pub fn australia() -> Self {
        let mut table = Self::new(super::australia::VERSION);
        for fact in super::australia::facts() {
            table.insert(fact);
        }
        table
    }

    /// Loads a dataset from JSON.
    ///
    /// Expected shape:
    /// `{"version": "...", "holidays": [{"date": "DD/MM/YYYY", "name": "...", "jurisdictions": ["ALL"]}]}`
    pub fn from_json(text: &str) -> Result<Self, EngineError> {
        let dataset: HolidayDataset = serde_json::from_str(text)
            .map_err(|e| EngineError::InvalidDataset(e.to_string()))?;
        let mut table = Self::new(dataset.version);
        for fact in dataset.holidays {
            if fact.jurisdictions.is_empty() {
                return Err(EngineError::InvalidDataset(format!(
                    "holiday '{}' on {} has no jurisdictions",
                    fact.name, fact.date
                )));
            }
            table.insert(fact);
        }
        Ok(table)
    }

    /// Serializes the table back to the JSON dataset shape.
    pub fn to_json(&self) -> Result<String, EngineError> {
        let dataset = HolidayDataset {
            version: self.version.clone(),
            holidays: self.facts.clone(),
        };
        serde_json::to_string_pretty(&dataset).map_err(|e| EngineError::InvalidDataset(e.to_string()))
    }

    /// Adds a fact.
    pub fn with_fact(mut self, fact: HolidayFact) -> Self {
        self.insert(fact);
        self
    }

    /// Appends another table's facts after this table's own.
    ///
    /// The version label becomes `"{self}+{other}"`.
    pub fn extend(mut self, other: HolidayTable) -> Self {
        self.version = format!("{}+{}", self.version, other.version);
        for fact in other.facts {
            self.insert(fact);
        }
        self
    }

    /// Adds a fact in place.
    pub fn insert(&mut self, fact: HolidayFact) {
        let idx = self.facts.len();
        self.by_date.entry(fact.date).or_default().push(idx);
        self.facts.push(fact);
    }

    /// Number of facts.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// All facts in registration order.
    pub fn facts(&self) -> &[HolidayFact] {
        &self.facts
    }
}

impl HolidayProvider for HolidayTable {
    fn version(&self) -> &str {
        &self.version
    }

    fn lookup(&self, date: CalendarDate) -> Vec<&HolidayFact> {
        self.by_date
            .get(&date)
            .map(|indices| indices.iter().map(|&i| &self.facts[i]).collect())
            .unwrap_or_default()
    }
}
