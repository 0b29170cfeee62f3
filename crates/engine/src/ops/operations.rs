use std::sync::Arc;

use crate::{EngineError, Operation, ResultEngine};

use super::Ledger;

impl Ledger {
    /// Appends a credit to the account's statement.
    ///
    /// A blank `description` is not recorded.
    pub fn deposit(
        &mut self,
        tax_id: &str,
        amount: i64,
        description: Option<&str>,
    ) -> ResultEngine<&Operation> {
        let policy = self.amount_policy;
        let clock = Arc::clone(&self.clock);
        let account = self.account_mut(tax_id)?;
        policy.check(amount)?;

        if account.balance().checked_add(amount).is_none() {
            return Err(EngineError::InvalidAmount(format!(
                "deposit of {amount} overflows the balance"
            )));
        }

        tracing::debug!(account_id = %account.id, amount, "deposit");
        Ok(account.append(Operation::credit(amount, clock.now(), description)))
    }

    /// Appends a debit if the current balance covers `amount`.
    ///
    /// A withdrawal equal to the balance is allowed. On
    /// [`EngineError::InsufficientFunds`] the statement is left unchanged.
    pub fn withdraw(&mut self, tax_id: &str, amount: i64) -> ResultEngine<&Operation> {
        let policy = self.amount_policy;
        let clock = Arc::clone(&self.clock);
        let account = self.account_mut(tax_id)?;
        policy.check(amount)?;

        if amount.checked_neg().is_none() {
            return Err(EngineError::InvalidAmount(format!(
                "withdrawal of {amount} cannot be negated"
            )));
        }

        let balance = account.balance();
        if balance < amount {
            tracing::warn!(account_id = %account.id, balance, amount, "withdrawal rejected");
            return Err(EngineError::InsufficientFunds {
                balance,
                requested: amount,
            });
        }
        if balance.checked_sub(amount).is_none() {
            return Err(EngineError::InvalidAmount(format!(
                "withdrawal of {amount} overflows the balance"
            )));
        }

        tracing::debug!(account_id = %account.id, amount, "withdrawal");
        Ok(account.append(Operation::debit(amount, clock.now())))
    }
}
