//! Flat export rows

use serde::Serialize;
use serde_json::{Map, Value};

/// A flattened, export-ready representation of one record
///
/// Fields keep insertion order; that order becomes the CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Append a field
    pub fn with(mut self, name: &str, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a field
    pub fn insert(&mut self, name: &str, value: Value) {
        self.0.insert(name.to_string(), value);
    }

    /// Value of a field, if present
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Whether the field is present (a present field may still be null)
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Field names in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
