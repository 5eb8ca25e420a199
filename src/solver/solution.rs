//! Solver output: one encoded result per evaluation point.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "json")]
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Result for one evaluation point.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ResultEntry {
    /// The point literal, echoed as the output base.
    pub base: String,
    /// The polynomial's value at the point, encoded in that base.
    pub value: String,
}

/// Point literal → result, in first-seen input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    entries: Vec<(String, ResultEntry)>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry. Returns `false` and leaves the solution unchanged
    /// if `point` is already present.
    pub fn insert(&mut self, point: String, entry: ResultEntry) -> bool {
        if self.contains(&point) {
            return false;
        }
        self.entries.push((point, entry));
        true
    }

    pub fn contains(&self, point: &str) -> bool {
        self.get(point).is_some()
    }

    pub fn get(&self, point: &str) -> Option<&ResultEntry> {
        self.entries.iter().find(|(p, _)| p == point).map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResultEntry)> {
        self.entries.iter().map(|(p, e)| (p.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(feature = "json")]
impl Serialize for Solution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (point, entry) in &self.entries {
            map.serialize_entry(point, entry)?;
        }
        map.end()
    }
}
