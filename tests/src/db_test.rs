use rowmap::{
    sqlite::{Sqlite, SqliteCommand},
    stmt::Value,
    Command, Record, RowSource,
};

/// Per-test harness. Creating one installs the test logger.
pub struct DbTest {
    _p: (),
}

impl DbTest {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        DbTest { _p: () }
    }

    /// Opens a fresh in-memory database and runs `schema` against it.
    pub fn setup_db(&mut self, schema: &str) -> Sqlite {
        let db = Sqlite::in_memory().expect("failed to open in-memory database");
        db.execute_batch(schema).expect("failed to create schema");

        db
    }

    /// Reads the single value `sql` returns, bypassing the mapper.
    pub fn raw_value(&self, db: &Sqlite, sql: &str) -> Value {
        let mut command = SqliteCommand::default();
        command.set_text(sql);

        let mut rows = db.query(&command).expect("query failed");
        assert!(rows.advance().expect("advance failed"), "query returned no rows");
        assert_eq!(rows.field_count(), 1, "query must return a single column");

        rows.value(0).expect("failed to read value")
    }
}

impl Default for DbTest {
    fn default() -> Self {
        Self::new()
    }
}
