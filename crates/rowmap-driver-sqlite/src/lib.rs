mod command;
pub use command::SqliteCommand;

mod rows;
pub use rows::SqliteRows;

mod transaction;
pub use transaction::Transaction;
use transaction::TransactionManager;

mod value;
pub(crate) use value::Value;

use rowmap_core::{
    driver::{Command, CommandKind, Connection, Parameter},
    err,
    stmt::Rows,
    Error, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

/// A SQLite database connection implementing the mapper's driver traits.
///
/// Commands are created empty through [`Connection::create_command`], filled
/// by the mapper, then run with [`Sqlite::execute`] or [`Sqlite::query`].
#[derive(Debug)]
pub struct Sqlite {
    connection: RusqliteConnection,
    location: Location,
    transactions: TransactionManager,
}

#[derive(Debug)]
enum Location {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Opens a SQLite database from a connection URL: `sqlite::memory:` or
    /// `sqlite:<path>`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(&url_str, err.to_string()))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(
                url_str,
                "expected the `sqlite` scheme",
            ));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(url.path())
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;

        Ok(Self::from_parts(connection, Location::InMemory))
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let connection = RusqliteConnection::open(&path).map_err(|err| {
            Error::driver_operation_failed(err)
                .context(err!("cannot open SQLite database at {}", path.display()))
        })?;

        Ok(Self::from_parts(connection, Location::File(path)))
    }

    fn from_parts(connection: RusqliteConnection, location: Location) -> Self {
        Sqlite {
            connection,
            location,
            transactions: TransactionManager::new(),
        }
    }

    pub fn url(&self) -> Cow<'_, str> {
        match &self.location {
            Location::InMemory => Cow::Borrowed("sqlite::memory:"),
            Location::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    /// Runs one or more parameterless statements, such as schema setup.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        tracing::debug!(sql, "executing batch");

        self.connection
            .execute_batch(sql)
            .map_err(Error::driver_operation_failed)
    }

    /// Starts a transaction. SQLite allows one open transaction per
    /// connection.
    pub fn begin(&self) -> Result<Transaction> {
        let transaction = self.transactions.begin()?;

        if let Err(err) = self.connection.execute("BEGIN", []) {
            self.transactions.end(&transaction)?;
            return Err(Error::driver_operation_failed(err));
        }

        Ok(transaction)
    }

    /// Commits the open transaction.
    ///
    /// If `COMMIT` fails while SQLite keeps the transaction open (a deferred
    /// constraint, a busy database), the handle stays active and can still be
    /// rolled back.
    pub fn commit(&self, transaction: &Transaction) -> Result<()> {
        self.finish(transaction, "COMMIT")
    }

    pub fn rollback(&self, transaction: &Transaction) -> Result<()> {
        self.finish(transaction, "ROLLBACK")
    }

    fn finish(&self, transaction: &Transaction, sql: &str) -> Result<()> {
        self.transactions.check(Some(transaction))?;

        let res = self.connection.execute(sql, []);

        // Track what SQLite reports, not what was asked for
        if self.connection.is_autocommit() {
            self.transactions.end(transaction)?;
        }

        res.map_err(Error::driver_operation_failed)?;
        Ok(())
    }

    /// Runs a command that returns no rows and reports the number of rows
    /// changed.
    pub fn execute(&self, command: &SqliteCommand) -> Result<usize> {
        let mut stmt = self.prepare(command)?;

        stmt.raw_execute().map_err(Error::driver_operation_failed)
    }

    /// Runs a command and buffers every row it returns.
    pub fn query(&self, command: &SqliteCommand) -> Result<SqliteRows> {
        let mut stmt = self.prepare(command)?;

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();
        let mut ret = Rows::new(columns);

        let mut rows = stmt.raw_query();

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut items = Vec::with_capacity(width);

                    for index in 0..width {
                        let value = row.get_ref(index).map_err(Error::driver_operation_failed)?;
                        items.push(Value::from_sql(value)?.into_inner());
                    }

                    ret.push(items)?;
                }
                Ok(None) => break,
                Err(err) => return Err(Error::driver_operation_failed(err)),
            }
        }

        Ok(SqliteRows::new(ret))
    }

    fn prepare(&self, command: &SqliteCommand) -> Result<rusqlite::Statement<'_>> {
        if command.kind() == CommandKind::StoredProcedure {
            return Err(Error::unsupported_feature(
                "SQLite does not support stored procedures",
            ));
        }

        self.transactions.check(command.transaction())?;

        let mut stmt = self
            .connection
            .prepare(command.text())
            .map_err(Error::driver_operation_failed)?;

        let mut bound = 0;

        for param in command.parameters() {
            // Parameters the statement does not reference are ignored
            let Some(index) = stmt
                .parameter_index(param.name())
                .map_err(Error::driver_operation_failed)?
            else {
                continue;
            };

            stmt.raw_bind_parameter(index, Value::from(param.value().clone()))
                .map_err(Error::driver_operation_failed)?;
            bound += 1;
        }

        tracing::debug!(
            sql = command.text(),
            parameters = command.parameters().len(),
            bound,
            "executing statement"
        );

        Ok(stmt)
    }
}

impl Connection for Sqlite {
    type Transaction = Transaction;
    type Command = SqliteCommand;

    fn create_command(&self) -> Result<SqliteCommand> {
        Ok(SqliteCommand::default())
    }
}
