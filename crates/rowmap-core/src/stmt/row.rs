use super::Value;
use crate::{driver::Record, Result};

/// A single buffered row of named columns.
///
/// Columns keep their insertion order and names are stored as given; the
/// mapper does its own case normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column, returning the row for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.columns.push((name.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl Record for Row {
    fn field_count(&self) -> usize {
        self.columns.len()
    }

    fn name(&self, ordinal: usize) -> Result<&str> {
        match self.columns.get(ordinal) {
            Some((name, _)) => Ok(name),
            None => bail!("column ordinal {ordinal} is out of range; field_count={}", self.len()),
        }
    }

    fn value(&self, ordinal: usize) -> Result<Value> {
        match self.columns.get(ordinal) {
            Some((_, value)) => Ok(value.clone()),
            None => bail!("column ordinal {ordinal} is out of range; field_count={}", self.len()),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row {
            columns: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
