use crate::Transaction;
use rowmap_core::driver::{Command, CommandKind, Param};

/// A SQL statement and its named parameters, ready to run on a
/// [`Sqlite`](crate::Sqlite) connection.
#[derive(Debug, Clone, Default)]
pub struct SqliteCommand {
    text: String,
    kind: CommandKind,
    transaction: Option<Transaction>,
    parameters: Vec<Param>,
}

impl Command for SqliteCommand {
    type Parameter = Param;
    type Transaction = Transaction;

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn kind(&self) -> CommandKind {
        self.kind
    }

    fn set_kind(&mut self, kind: CommandKind) {
        self.kind = kind;
    }

    fn transaction(&self) -> Option<&Transaction> {
        self.transaction.as_ref()
    }

    fn set_transaction(&mut self, transaction: &Transaction) {
        self.transaction = Some(transaction.clone());
    }

    fn create_parameter(&self) -> rowmap_core::Result<Param> {
        Ok(Param::default())
    }

    fn add_parameter(&mut self, parameter: Param) {
        self.parameters.push(parameter);
    }

    fn parameters(&self) -> &[Param] {
        &self.parameters
    }
}
