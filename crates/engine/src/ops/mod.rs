use std::sync::Arc;

use chrono_tz::Tz;

use crate::{Account, AmountPolicy, Clock, EngineError, ResultEngine, SystemClock};

mod accounts;
mod operations;
mod statements;

/// The account ledger.
///
/// Every account-scoped operation resolves the account by tax id first and
/// fails with [`EngineError::KeyNotFound`] before touching any state.
#[derive(Debug)]
pub struct Ledger {
    accounts: Vec<Account>,
    clock: Arc<dyn Clock>,
    amount_policy: AmountPolicy,
    timezone: Tz,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// An empty ledger using the system clock, [`AmountPolicy::Positive`]
    /// and UTC calendar dates.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    pub fn amount_policy(&self) -> AmountPolicy {
        self.amount_policy
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    fn position(&self, tax_id: &str) -> Option<usize> {
        self.accounts.iter().position(|a| a.tax_id == tax_id)
    }

    fn account_mut(&mut self, tax_id: &str) -> ResultEngine<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.tax_id == tax_id)
            .ok_or_else(|| EngineError::KeyNotFound(tax_id.to_string()))
    }
}

/// The builder for `Ledger`
#[derive(Debug)]
pub struct LedgerBuilder {
    clock: Arc<dyn Clock>,
    amount_policy: AmountPolicy,
    timezone: Tz,
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            amount_policy: AmountPolicy::default(),
            timezone: Tz::UTC,
        }
    }
}

impl LedgerBuilder {
    /// Time source used to stamp new operations.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> LedgerBuilder {
        self.clock = clock;
        self
    }

    pub fn amount_policy(mut self, policy: AmountPolicy) -> LedgerBuilder {
        self.amount_policy = policy;
        self
    }

    /// Time zone used to decide the calendar date of an operation.
    pub fn timezone(mut self, timezone: Tz) -> LedgerBuilder {
        self.timezone = timezone;
        self
    }

    /// Construct an empty `Ledger`
    pub fn build(self) -> Ledger {
        Ledger {
            accounts: Vec::new(),
            clock: self.clock,
            amount_policy: self.amount_policy,
            timezone: self.timezone,
        }
    }
}
