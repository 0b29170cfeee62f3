use api_types::ErrorBody;
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

pub use server::{ServerState, router, run_with_listener, spawn_with_listener};

mod accounts;
mod server;
mod statement;

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::ExistingKey(_)
        | EngineError::KeyNotFound(_)
        | EngineError::InsufficientFunds { .. }
        | EngineError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
    }
}

// Clients match on these strings, spelling included.
fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::ExistingKey(_) => "Customer already exists".to_string(),
        EngineError::KeyNotFound(_) => "customer not found".to_string(),
        EngineError::InsufficientFunds { .. } => "Insuficient funds".to_string(),
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
