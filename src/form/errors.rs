//! Error map: invalid fields and their messages.

use std::collections::BTreeMap;

use super::FieldName;

/// Mapping of invalid fields to human-readable messages.
///
/// Entries iterate in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<FieldName, String>,
}

impl ErrorMap {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, replacing any previous message.
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Remove the error for a field.
    pub fn remove(&mut self, field: FieldName) -> Option<String> {
        self.entries.remove(&field)
    }

    /// Get the message for a field, if it is invalid.
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Check whether a field has an error.
    pub fn contains(&self, field: FieldName) -> bool {
        self.entries.contains_key(&field)
    }

    /// First invalid field in form order.
    pub fn first(&self) -> Option<FieldName> {
        self.entries.keys().next().copied()
    }

    /// Iterate over `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.entries.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no field is invalid.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every error.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace the entries for `fields` with those found in `fresh`.
    ///
    /// Errors for fields outside `fields` are left alone.
    pub fn replace_subset(&mut self, fields: &[FieldName], fresh: ErrorMap) {
        for field in fields {
            self.entries.remove(field);
        }
        self.entries.extend(fresh.entries);
    }

    /// Render every entry as `Label: message`.
    pub fn describe(&self) -> Vec<String> {
        self.iter()
            .map(|(field, message)| format!("{}: {}", field.label(), message))
            .collect()
    }
}
