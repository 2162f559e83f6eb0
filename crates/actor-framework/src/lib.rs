//! # Actor Framework
//!
//! This crate provides the foundational building blocks for creating type-safe, concurrent
//! actor systems in Rust. It implements a **Resource-Oriented Architecture (ROA)** pattern
//! on top of the **Actor Model**, providing a clean abstraction for managing stateful entities.
//!
//! ## Why ROA + Actor Model?
//!
//! ### Resource-Oriented Architecture (ROA)
//!
//! - A small fixed set of operations (Create, Upsert, Get, List, Broadcast) on well-defined resources
//! - Predictable lifecycle management
//! - Clean, uniform API surface across all resource types
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor eliminates race conditions
//!
//! ### The Synergy
//!
//! - **Separation**: Each resource type (menu items, orders) gets its own actor with completely isolated state
//! - **Coordination**: When resources need to interact (e.g., an order validating its menu items), the
//!   dependent actor receives the other actor's client as its run-time context
//! - **Consistency**: A broadcast over every resource runs inside one mailbox turn, so readers see either
//!   all of it or none of it
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model) - Foundational concurrency pattern by Carl Hewitt
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`ResourceClient`]) - Type-safe communication
//!
//! ## Core Abstractions
//!
//! ### [`ActorEntity`] - The Business Logic
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! // 1. Define the Entity
//! #[derive(Clone, Debug)]
//! struct Dish {
//!     id: u32,
//!     name: String,
//!     price: f64,
//! }
//!
//! #[derive(Debug)] struct DishCreate { name: String, price: f64 }
//! #[derive(Clone, Debug)] enum DishAction {}
//! #[derive(Debug, thiserror::Error)] #[error("{0}")] struct DishError(String);
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32;
//!     type Create = DishCreate;
//!     type Action = DishAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = DishError;
//!
//!     fn from_create_params(id: u32, params: DishCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name, price: params.price })
//!     }
//!
//!     // Dishes are keyed by name: upserting "Soup" twice updates one record.
//!     fn natural_key(params: &DishCreate) -> Option<String> {
//!         Some(params.name.clone())
//!     }
//!
//!     async fn on_upsert(&mut self, params: DishCreate, _ctx: &()) -> Result<(), Self::Error> {
//!         self.price = params.price;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: DishAction, _: &()) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! // 2. Use the Actor
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Dish>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let first = client.upsert(DishCreate { name: "Soup".into(), price: 4.0 }).await.unwrap();
//!     let second = client.upsert(DishCreate { name: "Soup".into(), price: 5.0 }).await.unwrap();
//!     assert!(first.created && !second.created);
//!     assert_eq!(client.get(1).await.unwrap().unwrap().price, 5.0);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at construction time.
//! Every actor is created first, and each one is then started with the clients it needs:
//!
//! ```rust,ignore
//! let (catalog_actor, catalog_client) = ResourceActor::<MenuItem>::new(32);
//! let (ledger_actor, ledger_client) = ResourceActor::<Order>::new(32);
//!
//! tokio::spawn(catalog_actor.run(()));
//! // The ledger validates item ids against the catalog from `Order::on_create`.
//! tokio::spawn(ledger_actor.run(CatalogClient::new(catalog_client)));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - Multiple actors run in **parallel**
//! - An actor may call another actor from a hook, as long as the calls never form a cycle
//!
//! ## Testing
//!
//! [`mock::MockClient`] hands out a real [`ResourceClient`] answered from canned expectations,
//! so an actor under test can be given mocked dependencies. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response, Upserted};
