//! # Order Ledger Actor
//!
//! This module implements the order ledger: every order the outlet has taken, and the
//! delivery progression that moves them forward.
//!
//! ## Overview
//!
//! The ledger depends on the catalog. It is started with a
//! [`CatalogClient`](crate::clients::CatalogClient) as its context, and `Order::on_create`
//! uses it to reject orders that reference unknown menu items. A rejected order does not
//! consume an order id.
//!
//! Status changes only happen through [`OrderAction::Advance`], which the sweep
//! scheduler broadcasts to every order at once:
//!
//! ```rust,ignore
//! let changes = order_client.advance_all().await?;
//! for change in changes {
//!     println!("{} {} -> {}", change.order_id, change.from, change.to);
//! }
//! ```
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`] for the delivery progression
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order ledger actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(mailbox_capacity)
}
