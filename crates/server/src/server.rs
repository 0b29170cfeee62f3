use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use axum_extra::headers::{Error as HeaderError, Header, HeaderMapExt};
use engine::{EngineError, Ledger};
use tokio::sync::RwLock;

use std::sync::Arc;

use crate::{ServerError, accounts, statement};

static CPF_HEADER: HeaderName = HeaderName::from_static("cpf");

/// Shared state of the router.
///
/// A single lock guards the whole ledger, so "check then append" sequences
/// such as create or withdraw run under one write guard.
#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<RwLock<Ledger>>,
}

impl ServerState {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
        }
    }
}

/// Tax id of the customer resolved by [`identify`].
#[derive(Clone, Debug)]
pub struct Customer(pub String);

/// `TypedHeader` for the customer identity header.
///
/// Account-scoped requests must contain a "cpf" entry in the header.
#[derive(Debug)]
struct CpfHeader(String);

impl Header for CpfHeader {
    fn name() -> &'static HeaderName {
        &CPF_HEADER
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, HeaderError>
    where
        Self: Sized,
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(HeaderError::invalid)?;
        let Ok(value) = value.to_str() else {
            return Err(HeaderError::invalid());
        };

        Ok(CpfHeader(value.to_string()))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        match HeaderValue::from_str(&self.0) {
            Ok(value) => values.extend(std::iter::once(value)),
            Err(_) => tracing::error!("failed to encode cpf header"),
        }
    }
}

/// Resolve the customer from the identity header or reject the request.
async fn identify(
    headers: HeaderMap,
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let Some(CpfHeader(tax_id)) = headers.typed_get::<CpfHeader>() else {
        tracing::debug!("request without a readable cpf header");
        return Err(EngineError::KeyNotFound(String::new()).into());
    };

    if let Err(err) = state.ledger.read().await.find_account(&tax_id) {
        tracing::debug!("unknown customer");
        return Err(err.into());
    }

    request.extensions_mut().insert(Customer(tax_id));
    Ok(next.run(request).await)
}

pub fn router(state: ServerState) -> Router {
    let guard = middleware::from_fn_with_state(state.clone(), identify);

    Router::new()
        .route(
            "/account",
            post(accounts::create).merge(
                get(accounts::get)
                    .put(accounts::update)
                    .delete(accounts::delete)
                    .route_layer(guard.clone()),
            ),
        )
        .route("/accounts", get(accounts::list))
        .route(
            "/statement",
            get(statement::list).route_layer(guard.clone()),
        )
        .route(
            "/statement/date",
            get(statement::by_date).route_layer(guard.clone()),
        )
        .route(
            "/deposit",
            post(statement::deposit).route_layer(guard.clone()),
        )
        .route(
            "/withdraw",
            post(statement::withdraw).route_layer(guard.clone()),
        )
        .route(
            "/balance",
            get(statement::balance).route_layer(guard),
        )
        .with_state(state)
}

pub async fn run_with_listener(
    ledger: Ledger,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ServerState::new(ledger))).await
}

pub fn spawn_with_listener(
    ledger: Ledger,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(ledger, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
