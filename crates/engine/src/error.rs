//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`ExistingKey`] thrown when an account with the same tax id is present.
//! - [`KeyNotFound`] thrown when no account matches a tax id.
//! - [`InsufficientFunds`] thrown when a withdrawal exceeds the balance.
//! - [`InvalidAmount`] thrown when an amount is rejected by the
//!   [`AmountPolicy`] or would overflow the balance.
//!
//!  [`ExistingKey`]: EngineError::ExistingKey
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InsufficientFunds`]: EngineError::InsufficientFunds
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`AmountPolicy`]: super::AmountPolicy
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: i64, requested: i64 },
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
