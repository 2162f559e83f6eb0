//! # Catalog Actor
//!
//! This module implements the menu catalog as a resource actor.
//!
//! ## Overview
//!
//! The catalog owns every [`MenuItem`]. Items are only ever written through upserts: the
//! first upsert of a name creates the item with the next id, later ones re-price it in
//! place. Ids come from the actor's counter and are never reused.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`MenuItem`]
//! - [`error`] - [`CatalogError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use outlet_service::catalog_actor;
//! use outlet_service::clients::CatalogClient;
//! use outlet_service::model::{Category, MenuItemUpsert};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = catalog_actor::new(32);
//!     let client = CatalogClient::new(generic_client);
//!
//!     // Start the actor (no dependencies)
//!     tokio::spawn(actor.run(()));
//!
//!     let added = client
//!         .upsert(MenuItemUpsert {
//!             name: "Lemonade".to_string(),
//!             price: 2.5,
//!             category: Category::Beverage,
//!         })
//!         .await?;
//!     assert!(added.created);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use entity::CatalogAction;
pub use error::*;

use crate::model::MenuItem;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Catalog actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<MenuItem>, ResourceClient<MenuItem>) {
    ResourceActor::new(mailbox_capacity)
}
