//! The module contains `Account` struct and its implementation.

use uuid::Uuid;

use crate::{Operation, compute_balance};

/// A customer account.
///
/// The account is looked up by its `tax_id`, which is unique in a ledger.
/// The statement is append-only and kept in chronological order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    /// Stable identifier generated on creation.
    pub id: Uuid,
    pub tax_id: String,
    pub name: String,
    pub statement: Vec<Operation>,
}

impl Account {
    pub fn new(tax_id: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            tax_id,
            name,
            statement: Vec::new(),
        }
    }

    pub fn balance(&self) -> i64 {
        compute_balance(&self.statement)
    }

    pub(crate) fn append(&mut self, operation: Operation) -> &Operation {
        self.statement.push(operation);
        &self.statement[self.statement.len() - 1]
    }
}
