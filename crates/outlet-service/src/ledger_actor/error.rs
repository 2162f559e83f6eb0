//! Error types for the order ledger.

use crate::model::{MenuItemId, OrderId};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// An order must contain at least one item.
    #[error("Order must contain at least one item")]
    EmptyItems,

    /// Every referenced id that the catalog did not know, in request order.
    #[error("Invalid item IDs: {}", join_ids(.0))]
    UnknownItems(Vec<MenuItemId>),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The catalog could not be asked whether the items exist.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

fn join_ids(ids: &[MenuItemId]) -> String {
    ids.iter()
        .map(|id| id.0.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
