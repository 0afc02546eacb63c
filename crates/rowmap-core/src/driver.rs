//! Capabilities the mapper consumes from a database access layer.
//!
//! The mapper never talks to a database itself. It creates commands and
//! parameters through a [`Connection`] and reads rows through a [`Record`] or
//! [`RowSource`]; executing commands, managing transactions and pooling
//! connections stay with the driver that implements these traits.

mod param;
pub use param::Param;

use crate::{stmt::Value, Result};

/// How a command's text is interpreted by the database.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// The text is a SQL statement
    #[default]
    Text,

    /// The text names a stored procedure
    StoredProcedure,
}

/// A database connection able to create commands.
pub trait Connection {
    /// Opaque transaction handle that can be attached to a command.
    type Transaction;

    type Command: Command<Transaction = Self::Transaction>;

    /// Creates a new, empty command bound to this connection.
    fn create_command(&self) -> Result<Self::Command>;
}

/// A parameterized command that has not been executed yet.
pub trait Command {
    type Parameter: Parameter;

    type Transaction;

    fn text(&self) -> &str;

    fn set_text(&mut self, text: &str);

    fn kind(&self) -> CommandKind;

    fn set_kind(&mut self, kind: CommandKind);

    fn transaction(&self) -> Option<&Self::Transaction>;

    /// Associates the command with a transaction.
    fn set_transaction(&mut self, transaction: &Self::Transaction);

    /// Creates a detached parameter. It is not bound until passed to
    /// [`Command::add_parameter`].
    fn create_parameter(&self) -> Result<Self::Parameter>;

    fn add_parameter(&mut self, parameter: Self::Parameter);

    /// Bound parameters in the order they were added.
    fn parameters(&self) -> &[Self::Parameter];
}

/// A named value bound to a command.
pub trait Parameter {
    fn name(&self) -> &str;

    fn set_name(&mut self, name: &str);

    fn value(&self) -> &Value;

    fn set_value(&mut self, value: Value);
}

/// One row of named, positional columns.
pub trait Record {
    fn field_count(&self) -> usize;

    /// Name of the column at `ordinal`.
    fn name(&self, ordinal: usize) -> Result<&str>;

    /// Raw value of the column at `ordinal`. SQL NULL is [`Value::Null`].
    fn value(&self, ordinal: usize) -> Result<Value>;
}

/// A forward-only source of rows.
///
/// After `advance` returns `true`, the source reads as the produced row through
/// its [`Record`] implementation.
pub trait RowSource: Record {
    /// Moves to the next row, returning `false` once the source is exhausted.
    fn advance(&mut self) -> Result<bool>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field_count(&self) -> usize {
        (**self).field_count()
    }

    fn name(&self, ordinal: usize) -> Result<&str> {
        (**self).name(ordinal)
    }

    fn value(&self, ordinal: usize) -> Result<Value> {
        (**self).value(ordinal)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn field_count(&self) -> usize {
        (**self).field_count()
    }

    fn name(&self, ordinal: usize) -> Result<&str> {
        (**self).name(ordinal)
    }

    fn value(&self, ordinal: usize) -> Result<Value> {
        (**self).value(ordinal)
    }
}

impl<S: RowSource + ?Sized> RowSource for Box<S> {
    fn advance(&mut self) -> Result<bool> {
        (**self).advance()
    }
}
