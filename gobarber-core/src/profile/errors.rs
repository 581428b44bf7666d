//! Per-field validation messages

use super::form::ProfileField;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Validation failures keyed by form field, one message per field
///
/// Serializes as `{ "field_name": "message" }`, the shape form layers use to
/// attach inline errors to inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<ProfileField, String>,
}

impl FieldErrors {
    /// No errors
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. The first message recorded for a field
    /// is kept.
    pub fn insert(&mut self, field: ProfileField, message: impl Into<String>) {
        self.entries.entry(field).or_insert_with(|| message.into());
    }

    /// Drop the message for `field`, typically once the user edits it
    pub fn remove(&mut self, field: ProfileField) -> Option<String> {
        self.entries.remove(&field)
    }

    /// Message recorded for `field`
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Whether `field` has a message
    pub fn contains(&self, field: ProfileField) -> bool {
        self.entries.contains_key(&field)
    }

    /// True when every field passed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with a message
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Forget every message
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Fields with an error, in form order
    pub fn fields(&self) -> impl Iterator<Item = ProfileField> + '_ {
        self.entries.keys().copied()
    }

    /// Field and message pairs, in form order
    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &str)> + '_ {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl Serialize for FieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field.as_str(), message)?;
        }
        map.end()
    }
}
