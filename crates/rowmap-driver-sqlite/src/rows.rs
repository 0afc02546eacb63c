use rowmap_core::{
    driver::{Record, RowSource},
    stmt::{Rows, Value},
    Result,
};

/// The buffered result of [`Sqlite::query`](crate::Sqlite::query).
#[derive(Debug, Clone)]
pub struct SqliteRows {
    rows: Rows,
}

impl SqliteRows {
    pub(crate) fn new(rows: Rows) -> Self {
        SqliteRows { rows }
    }

    pub fn columns(&self) -> &[String] {
        self.rows.columns()
    }

    /// Number of rows not yet produced by `advance`.
    pub fn remaining(&self) -> usize {
        self.rows.remaining()
    }
}

impl Record for SqliteRows {
    fn field_count(&self) -> usize {
        self.rows.field_count()
    }

    fn name(&self, ordinal: usize) -> Result<&str> {
        self.rows.name(ordinal)
    }

    fn value(&self, ordinal: usize) -> Result<Value> {
        self.rows.value(ordinal)
    }
}

impl RowSource for SqliteRows {
    fn advance(&mut self) -> Result<bool> {
        self.rows.advance()
    }
}
