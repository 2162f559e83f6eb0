//! HTTP surface of the outlet.
//!
//! | Method | Path          | Success                                   |
//! |--------|---------------|-------------------------------------------|
//! | POST   | `/menu`       | 201 `Menu item added.` / 200 `Menu item updated.` |
//! | GET    | `/menu`       | 200 JSON array of menu items              |
//! | POST   | `/orders`     | 201 JSON order                            |
//! | GET    | `/orders/:id` | 200 JSON order, 404 `Order not found.`    |
//!
//! Request bodies are checked here before anything reaches an actor. Messages are
//! plain text, entities are JSON.

mod validation;

use crate::catalog_actor::CatalogError;
use crate::clients::{CatalogClient, OrderClient};
use crate::ledger_actor::OrderError;
use crate::model::{MenuItem, Order, OrderId};
use anyhow::{Context, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::net::{SocketAddr, TcpListener as StdTcpListener};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use validation::{MenuItemRequest, OrderRequest};

/// Shared API state exposed to handlers.
#[derive(Clone)]
pub struct ApiState {
    catalog: CatalogClient,
    orders: OrderClient,
}

impl ApiState {
    pub fn new(catalog: CatalogClient, orders: OrderClient) -> Self {
        Self { catalog, orders }
    }
}

/// Builds the router without binding a socket.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/menu", get(get_menu).post(post_menu))
        .route("/orders", post(post_order))
        .route("/orders/:id", get(get_order))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handle to the running API server.
#[derive(Debug)]
pub struct ApiServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<Result<()>>,
}

impl ApiServer {
    /// The bound address; differs from the requested one when port 0 was asked for.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stops accepting connections and waits for in-flight requests.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        match self.task.await {
            Ok(result) => result,
            Err(err) => Err(err.into()),
        }
    }
}

/// Binds `addr` and serves the API in a background task.
pub fn spawn_api_server(state: Arc<ApiState>, addr: SocketAddr) -> Result<ApiServer> {
    let listener = StdTcpListener::bind(addr)
        .with_context(|| format!("failed to bind API listener {addr}"))?;
    listener
        .set_nonblocking(true)
        .context("failed to configure API listener as non-blocking")?;
    let tcp_listener =
        TcpListener::from_std(listener).context("failed to create tokio listener")?;
    let addr = tcp_listener
        .local_addr()
        .context("failed to read API listener address")?;

    let app = router(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let handle: JoinHandle<Result<()>> = tokio::spawn(async move {
        info!(address = %addr, "api server listening");
        if let Err(err) = axum::serve(tcp_listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
        {
            error!(address = %addr, error = %err, "api server exited with error");
            return Err(err.into());
        }
        Ok(())
    });

    Ok(ApiServer {
        addr,
        shutdown: Some(shutdown_tx),
        task: handle,
    })
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(error = %message, "request failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ActorCommunicationError(_) => Self::internal(err.to_string()),
            _ => Self::bad_request(err.to_string()),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::EmptyItems | OrderError::UnknownItems(_) => {
                Self::bad_request(err.to_string())
            }
            OrderError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Order not found."),
            OrderError::CatalogUnavailable(_) | OrderError::ActorCommunicationError(_) => {
                Self::internal(err.to_string())
            }
        }
    }
}

async fn get_menu(State(state): State<Arc<ApiState>>) -> Result<Json<Vec<MenuItem>>, ApiError> {
    Ok(Json(state.catalog.list_all().await?))
}

async fn post_menu(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<MenuItemRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(request) = body?;
    let upserted = state.catalog.upsert(request.validate()?).await?;
    if upserted.created {
        Ok((StatusCode::CREATED, "Menu item added."))
    } else {
        Ok((StatusCode::OK, "Menu item updated."))
    }
}

async fn post_order(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let Json(request) = body?;
    let order = state.orders.create_order(request.validate()?).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn get_order(
    State(state): State<Arc<ApiState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    let id = leading_order_id(&raw_id)
        .ok_or_else(|| ApiError::new(StatusCode::NOT_FOUND, "Order not found."))?;
    Ok(Json(state.orders.find(id).await?))
}

/// Reads the id from the leading digits of a path segment, so `1abc` is order 1.
///
/// Segments with no leading digits, or digits past any issued id, match no order.
fn leading_order_id(raw: &str) -> Option<OrderId> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse::<u32>().ok().map(OrderId)
}
