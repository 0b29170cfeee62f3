//! Account API endpoints.

use api_types::account::{AccountNew, AccountUpdate, AccountView};
use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    ServerError,
    server::{Customer, ServerState},
    statement::operation_view,
};

pub(crate) fn account_view(account: &engine::Account) -> AccountView {
    AccountView {
        id: account.id,
        cpf: account.tax_id.clone(),
        name: account.name.clone(),
        statement: account.statement.iter().map(operation_view).collect(),
    }
}

pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ServerError> {
    payload
        .map(|Json(body)| body)
        .map_err(|err| ServerError::Generic(err.body_text()))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<AccountNew>, JsonRejection>,
) -> Result<StatusCode, ServerError> {
    let payload = json_body(payload)?;
    let mut ledger = state.ledger.write().await;
    let account = ledger.create_account(&payload.cpf, &payload.name)?;
    tracing::info!(account_id = %account.id, "account opened");

    Ok(StatusCode::CREATED)
}

pub async fn list(State(state): State<ServerState>) -> Json<Vec<AccountView>> {
    let ledger = state.ledger.read().await;
    Json(ledger.list_accounts().iter().map(account_view).collect())
}

pub async fn get(
    Extension(Customer(tax_id)): Extension<Customer>,
    State(state): State<ServerState>,
) -> Result<Json<AccountView>, ServerError> {
    let ledger = state.ledger.read().await;
    Ok(Json(account_view(ledger.find_account(&tax_id)?)))
}

pub async fn update(
    Extension(Customer(tax_id)): Extension<Customer>,
    State(state): State<ServerState>,
    payload: Result<Json<AccountUpdate>, JsonRejection>,
) -> Result<StatusCode, ServerError> {
    let payload = json_body(payload)?;
    state
        .ledger
        .write()
        .await
        .update_account_name(&tax_id, &payload.name)?;

    Ok(StatusCode::CREATED)
}

/// Closes the account and returns the accounts left in the ledger.
pub async fn delete(
    Extension(Customer(tax_id)): Extension<Customer>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<AccountView>>, ServerError> {
    let mut ledger = state.ledger.write().await;
    let account = ledger.delete_account(&tax_id)?;
    tracing::info!(account_id = %account.id, "account closed");

    Ok(Json(ledger.list_accounts().iter().map(account_view).collect()))
}
