use rowmap_core::{bail, Error, Result};
use std::cell::Cell;

/// Handle to an open transaction, attached to commands that run inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: u64,
}

/// Tracks the connection's open transaction. SQLite does not nest `BEGIN`.
#[derive(Debug)]
pub(crate) struct TransactionManager {
    next_id: Cell<u64>,
    active: Cell<Option<u64>>,
}

impl TransactionManager {
    pub(crate) fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            active: Cell::new(None),
        }
    }

    pub(crate) fn begin(&self) -> Result<Transaction> {
        if self.active.get().is_some() {
            return Err(Error::unsupported_feature(
                "SQLite does not support nested transactions",
            ));
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.active.set(Some(id));

        Ok(Transaction { id })
    }

    pub(crate) fn end(&self, transaction: &Transaction) -> Result<()> {
        self.check(Some(transaction))?;
        self.active.set(None);
        Ok(())
    }

    /// Fails unless `transaction` is absent or is the open transaction.
    pub(crate) fn check(&self, transaction: Option<&Transaction>) -> Result<()> {
        match (transaction, self.active.get()) {
            (None, _) => Ok(()),
            (Some(transaction), Some(active)) if transaction.id == active => Ok(()),
            (Some(transaction), _) => bail!(
                "transaction {} is not active on this connection",
                transaction.id
            ),
        }
    }
}
