//! In-memory customer ledger.
//!
//! The [`Ledger`] owns every [`Account`] and its statement. Balances are never
//! stored: they are folded from the statement with [`compute_balance`].

pub use account::Account;
pub use clock::{Clock, SystemClock};
pub use error::EngineError;
pub use operation::{Operation, OperationKind, compute_balance};
pub use ops::{Ledger, LedgerBuilder};
pub use policy::{AmountPolicy, ParsePolicyError};

mod account;
mod clock;
mod error;
mod operation;
mod ops;
mod policy;

type ResultEngine<T> = Result<T, EngineError>;
