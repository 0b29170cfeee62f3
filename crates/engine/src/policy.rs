//! Validation applied to deposit and withdrawal amounts.

use thiserror::Error;

use crate::{EngineError, ResultEngine};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AmountPolicy {
    /// Amounts must be strictly positive.
    #[default]
    Positive,
    /// Any amount is accepted, including zero and negative values.
    Unchecked,
}

impl AmountPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Unchecked => "unchecked",
        }
    }

    pub(crate) fn check(self, amount: i64) -> ResultEngine<()> {
        match self {
            Self::Positive if amount <= 0 => Err(EngineError::InvalidAmount(format!(
                "amount must be > 0, got {amount}"
            ))),
            _ => Ok(()),
        }
    }
}

/// Returned when a policy name is neither `positive` nor `unchecked`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown amount policy \"{0}\" (expected \"positive\" or \"unchecked\")")]
pub struct ParsePolicyError(pub String);

impl TryFrom<&str> for AmountPolicy {
    type Error = ParsePolicyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "unchecked" => Ok(Self::Unchecked),
            other => Err(ParsePolicyError(other.to_string())),
        }
    }
}
