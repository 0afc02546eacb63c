use super::Value;
use crate::{
    driver::{Record, RowSource},
    Result,
};

use std::collections::VecDeque;

/// A buffered, forward-only result set.
///
/// All rows share one column list. Values of the current row are available
/// through [`Record`] after a successful [`RowSource::advance`].
#[derive(Debug, Clone, Default)]
pub struct Rows {
    columns: Vec<String>,
    pending: VecDeque<Vec<Value>>,
    current: Option<Vec<Value>>,
}

impl Rows {
    pub fn new<I>(columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Rows {
            columns: columns.into_iter().map(Into::into).collect(),
            pending: VecDeque::new(),
            current: None,
        }
    }

    /// Queues a row. The row must have one value per column.
    pub fn push(&mut self, values: Vec<Value>) -> Result<()> {
        if values.len() != self.columns.len() {
            bail!(
                "row has {} values but the result set has {} columns",
                values.len(),
                self.columns.len()
            );
        }

        self.pending.push_back(values);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows not yet produced by `advance`.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    fn current(&self) -> Result<&[Value]> {
        match &self.current {
            Some(values) => Ok(values),
            None => bail!("no current row; call `advance` first"),
        }
    }
}

impl Record for Rows {
    fn field_count(&self) -> usize {
        self.columns.len()
    }

    fn name(&self, ordinal: usize) -> Result<&str> {
        match self.columns.get(ordinal) {
            Some(name) => Ok(name),
            None => bail!(
                "column ordinal {ordinal} is out of range; field_count={}",
                self.columns.len()
            ),
        }
    }

    fn value(&self, ordinal: usize) -> Result<Value> {
        match self.current()?.get(ordinal) {
            Some(value) => Ok(value.clone()),
            None => bail!(
                "column ordinal {ordinal} is out of range; field_count={}",
                self.columns.len()
            ),
        }
    }
}

impl RowSource for Rows {
    fn advance(&mut self) -> Result<bool> {
        self.current = self.pending.pop_front();
        Ok(self.current.is_some())
    }
}
