//! Activity collection (the snapshot the engine mutates).
//!
//! Ordered ascending by PREP date for display and processing. Every engine
//! operation takes a collection by reference and returns a fresh one; the
//! caller's snapshot is never modified.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::Activity;

/// An ordered sequence of activities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityCollection {
    activities: Vec<Activity>,
}

impl ActivityCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }

    pub fn as_slice(&self) -> &[Activity] {
        &self.activities
    }

    pub fn get(&self, index: usize) -> Option<&Activity> {
        self.activities.get(index)
    }

    /// Finds an activity by its identifier.
    pub fn find(&self, activity_id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.activity_id == activity_id)
    }

    /// Position of an activity by its identifier.
    pub fn position(&self, activity_id: &str) -> Option<usize> {
        self.activities
            .iter()
            .position(|a| a.activity_id == activity_id)
    }

    /// Identifiers in collection order.
    pub fn ids(&self) -> Vec<&str> {
        self.activities
            .iter()
            .map(|a| a.activity_id.as_str())
            .collect()
    }

    pub fn into_vec(self) -> Vec<Activity> {
        self.activities
    }

    pub(crate) fn as_mut_vec(&mut self) -> &mut Vec<Activity> {
        &mut self.activities
    }
}

impl From<Vec<Activity>> for ActivityCollection {
    fn from(activities: Vec<Activity>) -> Self {
        Self { activities }
    }
}

impl FromIterator<Activity> for ActivityCollection {
    fn from_iter<T: IntoIterator<Item = Activity>>(iter: T) -> Self {
        Self {
            activities: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for ActivityCollection {
    type Output = Activity;

    fn index(&self, index: usize) -> &Self::Output {
        &self.activities[index]
    }
}

impl<'a> IntoIterator for &'a ActivityCollection {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.iter()
    }
}
