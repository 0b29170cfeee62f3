//! Wire types of the ledger HTTP API.
//!
//! Field names follow the JSON contract clients already speak: the tax id is
//! `cpf` and an operation kind is serialized under `type`.

use serde::{Deserialize, Serialize};

pub mod account {
    use super::*;
    use uuid::Uuid;

    use crate::statement::OperationView;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountNew {
        pub cpf: String,
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountUpdate {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountView {
        pub id: Uuid,
        pub cpf: String,
        pub name: String,
        pub statement: Vec<OperationView>,
    }
}

pub mod statement {
    use super::*;
    use chrono::{DateTime, NaiveDate, Utc};

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum OperationKind {
        Credit,
        Debit,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct OperationView {
        pub amount: i64,
        #[serde(rename = "type")]
        pub kind: OperationKind,
        pub created_at: DateTime<Utc>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DepositNew {
        pub amount: i64,
        #[serde(default)]
        pub description: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct WithdrawNew {
        pub amount: i64,
    }

    /// Query string of `GET /statement/date`, e.g. `?date=2024-03-02`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct StatementDateQuery {
        pub date: NaiveDate,
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
