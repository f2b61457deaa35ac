//! Raw and normalized record shapes.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{ModelError, Result};

/// A normalized value; `None` is the null marker.
pub type NormalizedValue = Option<String>;

/// One raw field of an input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub name: String,
    pub raw: String,
}

impl FieldValue {
    pub fn new(name: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
        }
    }
}

/// One input row, fields kept in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<FieldValue>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(name, raw)` pairs.
    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(name, raw)| FieldValue::new(name, raw))
                .collect(),
        }
    }

    /// Zip a header row with a data row.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::RowShape`] when the lengths differ.
    pub fn from_row(headers: &[String], cells: Vec<String>) -> Result<Self> {
        if headers.len() != cells.len() {
            return Err(ModelError::RowShape {
                expected: headers.len(),
                found: cells.len(),
            });
        }
        Ok(Self::from_pairs(headers.iter().cloned().zip(cells)))
    }

    pub fn push(&mut self, field: FieldValue) {
        self.fields.push(field);
    }

    /// Raw value of the first field with this name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.raw.as_str())
    }

    /// Raw value of a field, treating a missing field as empty.
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.iter()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A cleaned row. Serializes as a JSON object in field order, with the null
/// marker rendered as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRecord {
    fields: Vec<(String, NormalizedValue)>,
}

impl NormalizedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: NormalizedValue) {
        self.fields.push((name.into(), value));
    }

    /// Normalized value of a field; `None` when the field is absent.
    pub fn get(&self, name: &str) -> Option<&NormalizedValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Normalized value as `&str`; `None` when absent or null.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|value| value.as_deref())
    }

    pub fn is_null(&self, name: &str) -> bool {
        matches!(self.get(name), Some(None))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    pub fn null_count(&self) -> usize {
        self.fields.iter().filter(|(_, value)| value.is_none()).count()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for NormalizedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
