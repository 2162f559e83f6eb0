//! Error types for the Catalog actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// A menu item needs a name; it doubles as the upsert key.
    #[error("Menu item name must not be empty")]
    EmptyName,

    /// Prices must be finite and strictly positive.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// The category is not one of the menu sections.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
