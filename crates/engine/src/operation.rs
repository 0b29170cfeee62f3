//! Statement primitives.
//!
//! An `Operation` is a single credit or debit appended to an account's
//! statement. Operations are never edited once appended: the balance is
//! always derived by folding the statement.

use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Credit,
    Debit,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

/// A statement line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operation {
    pub amount: i64,
    pub kind: OperationKind,
    /// Assigned by the ledger clock when the operation is appended.
    pub created_at: DateTime<Utc>,
    /// `None` unless a non-blank description was supplied.
    pub description: Option<String>,
}

impl Operation {
    pub(crate) fn credit(
        amount: i64,
        created_at: DateTime<Utc>,
        description: Option<&str>,
    ) -> Self {
        Self {
            amount,
            kind: OperationKind::Credit,
            created_at,
            description: normalize_description(description),
        }
    }

    pub(crate) fn debit(amount: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            amount,
            kind: OperationKind::Debit,
            created_at,
            description: None,
        }
    }
}

fn normalize_description(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Compute the balance of a statement.
///
/// Credits add their amount and debits subtract it, starting from zero. An
/// empty statement has a balance of zero.
pub fn compute_balance(statement: &[Operation]) -> i64 {
    statement
        .iter()
        .fold(0i64, |balance, op| match op.kind {
            OperationKind::Credit => balance.saturating_add(op.amount),
            OperationKind::Debit => balance.saturating_sub(op.amount),
        })
}
