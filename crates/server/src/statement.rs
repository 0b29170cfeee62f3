//! Statement and balance API endpoints.

use api_types::statement::{
    DepositNew, OperationKind as ApiKind, OperationView, StatementDateQuery, WithdrawNew,
};
use axum::{
    Extension, Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::{
    ServerError,
    accounts::json_body,
    server::{Customer, ServerState},
};

fn map_kind(kind: engine::OperationKind) -> ApiKind {
    match kind {
        engine::OperationKind::Credit => ApiKind::Credit,
        engine::OperationKind::Debit => ApiKind::Debit,
    }
}

pub(crate) fn operation_view(op: &engine::Operation) -> OperationView {
    OperationView {
        amount: op.amount,
        kind: map_kind(op.kind),
        created_at: op.created_at,
        description: op.description.clone(),
    }
}

pub async fn list(
    Extension(Customer(tax_id)): Extension<Customer>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<OperationView>>, ServerError> {
    let ledger = state.ledger.read().await;
    let statement = ledger.statement(&tax_id)?;

    Ok(Json(statement.iter().map(operation_view).collect()))
}

pub async fn by_date(
    Extension(Customer(tax_id)): Extension<Customer>,
    State(state): State<ServerState>,
    query: Result<Query<StatementDateQuery>, QueryRejection>,
) -> Result<Json<Vec<OperationView>>, ServerError> {
    let Query(query) = query.map_err(|err| ServerError::Generic(err.body_text()))?;
    let ledger = state.ledger.read().await;
    let operations = ledger.statement_for_date(&tax_id, query.date)?;

    Ok(Json(operations.into_iter().map(operation_view).collect()))
}

pub async fn deposit(
    Extension(Customer(tax_id)): Extension<Customer>,
    State(state): State<ServerState>,
    payload: Result<Json<DepositNew>, JsonRejection>,
) -> Result<StatusCode, ServerError> {
    let payload = json_body(payload)?;
    state
        .ledger
        .write()
        .await
        .deposit(&tax_id, payload.amount, payload.description.as_deref())?;
    tracing::info!(amount = payload.amount, "deposit recorded");

    Ok(StatusCode::CREATED)
}

pub async fn withdraw(
    Extension(Customer(tax_id)): Extension<Customer>,
    State(state): State<ServerState>,
    payload: Result<Json<WithdrawNew>, JsonRejection>,
) -> Result<StatusCode, ServerError> {
    let payload = json_body(payload)?;
    state.ledger.write().await.withdraw(&tax_id, payload.amount)?;
    tracing::info!(amount = payload.amount, "withdrawal recorded");

    Ok(StatusCode::CREATED)
}

pub async fn balance(
    Extension(Customer(tax_id)): Extension<Customer>,
    State(state): State<ServerState>,
) -> Result<Json<i64>, ServerError> {
    let ledger = state.ledger.read().await;
    Ok(Json(ledger.balance(&tax_id)?))
}
