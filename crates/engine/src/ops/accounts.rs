use crate::{Account, EngineError, ResultEngine};

use super::Ledger;

impl Ledger {
    /// Creates an account with an empty statement.
    ///
    /// Fails with [`EngineError::ExistingKey`] when the tax id is taken.
    pub fn create_account(&mut self, tax_id: &str, name: &str) -> ResultEngine<&Account> {
        if self.position(tax_id).is_some() {
            return Err(EngineError::ExistingKey(tax_id.to_string()));
        }

        let account = Account::new(tax_id.to_string(), name.to_string());
        tracing::debug!(account_id = %account.id, "account created");
        self.accounts.push(account);

        Ok(&self.accounts[self.accounts.len() - 1])
    }

    /// Looks up an account by exact tax id.
    pub fn find_account(&self, tax_id: &str) -> ResultEngine<&Account> {
        self.accounts
            .iter()
            .find(|a| a.tax_id == tax_id)
            .ok_or_else(|| EngineError::KeyNotFound(tax_id.to_string()))
    }

    /// Renames an account. Id, tax id and statement are left untouched.
    pub fn update_account_name(&mut self, tax_id: &str, name: &str) -> ResultEngine<()> {
        let account = self.account_mut(tax_id)?;
        account.name = name.to_string();
        tracing::debug!(account_id = %account.id, "account renamed");
        Ok(())
    }

    /// Removes the account matching `tax_id` and returns it.
    pub fn delete_account(&mut self, tax_id: &str) -> ResultEngine<Account> {
        let index = self
            .position(tax_id)
            .ok_or_else(|| EngineError::KeyNotFound(tax_id.to_string()))?;
        let account = self.accounts.remove(index);
        tracing::debug!(account_id = %account.id, "account deleted");
        Ok(account)
    }

    /// All accounts, in creation order.
    pub fn list_accounts(&self) -> &[Account] {
        &self.accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_find_returns_empty_account() {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("123", "Alice").unwrap().id;

        let account = ledger.find_account("123").unwrap();
        assert_eq!(account.id, id);
        assert_eq!(account.name, "Alice");
        assert!(account.statement.is_empty());
        assert_eq!(account.balance(), 0);
    }

    #[test]
    fn duplicate_tax_id_is_rejected() {
        let mut ledger = Ledger::new();
        ledger.create_account("123", "Alice").unwrap();

        let err = ledger.create_account("123", "Bob").unwrap_err();
        assert_eq!(err, EngineError::ExistingKey("123".to_string()));
        assert_eq!(ledger.list_accounts().len(), 1);
        assert_eq!(ledger.list_accounts()[0].name, "Alice");
    }

    #[test]
    fn find_missing_account() {
        let ledger = Ledger::new();
        assert_eq!(
            ledger.find_account("404").unwrap_err(),
            EngineError::KeyNotFound("404".to_string())
        );
    }

    #[test]
    fn rename_keeps_identity() {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("123", "Alice").unwrap().id;

        ledger.update_account_name("123", "Alice Smith").unwrap();

        let account = ledger.find_account("123").unwrap();
        assert_eq!(account.id, id);
        assert_eq!(account.tax_id, "123");
        assert_eq!(account.name, "Alice Smith");
    }

    #[test]
    fn rename_missing_account() {
        let mut ledger = Ledger::new();
        assert!(matches!(
            ledger.update_account_name("404", "x"),
            Err(EngineError::KeyNotFound(_))
        ));
    }

    #[test]
    fn delete_removes_the_matching_account_only() {
        let mut ledger = Ledger::new();
        ledger.create_account("1", "First").unwrap();
        ledger.create_account("2", "Second").unwrap();
        ledger.create_account("3", "Third").unwrap();

        let removed = ledger.delete_account("3").unwrap();
        assert_eq!(removed.tax_id, "3");

        let remaining: Vec<_> = ledger
            .list_accounts()
            .iter()
            .map(|a| a.tax_id.as_str())
            .collect();
        assert_eq!(remaining, ["1", "2"]);
    }

    #[test]
    fn delete_missing_account_leaves_ledger_untouched() {
        let mut ledger = Ledger::new();
        ledger.create_account("1", "First").unwrap();

        assert!(matches!(
            ledger.delete_account("404"),
            Err(EngineError::KeyNotFound(_))
        ));
        assert_eq!(ledger.list_accounts().len(), 1);
    }

    #[test]
    fn tax_id_can_be_reused_after_delete() {
        let mut ledger = Ledger::new();
        let first = ledger.create_account("1", "First").unwrap().id;
        ledger.delete_account("1").unwrap();

        let second = ledger.create_account("1", "Again").unwrap().id;
        assert_ne!(first, second);
    }
}
