//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (menu item, order, …) must implement to be managed by the generic `ResourceActor`. It specifies associated types for IDs, payloads, actions, context, and errors, and provides lifecycle hooks (`on_create`, `on_upsert`, `handle_action`). Implementing this trait enables the framework to offer a uniform Create/Upsert/Get/List/Broadcast API for any domain model.
//!
//! # Architecture Note
//! By defining a contract (`ActorEntity`) that all resource types must satisfy,
//! we write the `ResourceActor` logic *once* and reuse it for every resource.
//!
//! We use "Associated Types" (type Id, type Create, etc.) to enforce type safety.
//! A `MenuItem` entity requires a `MenuItemUpsert` payload, and you can't accidentally send it
//! an `OrderCreate` payload. The compiler prevents this class of bugs entirely.
//!
//! # Provided Methods (Hooks)
//! This trait includes **Provided Methods** (methods with default implementations):
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::natural_key`]
//! - [`ActorEntity::on_upsert`]
//!
//! You do **not** need to implement these methods unless you want to customize behavior.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other actors).
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation, and ordered so
    /// that listing follows allocation order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    /// Upserts reuse the same payload.
    type Create: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `Advance`).
    /// Cloned once per entity when broadcast across the whole store.
    type Action: Clone + Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message; clients downcast it
    /// back out of [`FrameworkError::EntityError`](crate::FrameworkError::EntityError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built but before it is stored.
    /// Returning an error discards the entity and leaves the id sequence untouched.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Natural key of a payload, used by upsert to find an existing entity.
    ///
    /// `None` means entities of this type are only addressable by id, and every
    /// upsert creates.
    fn natural_key(_params: &Self::Create) -> Option<String> {
        None
    }

    /// Re-applies a payload to the entity that owns its natural key.
    /// The entity keeps its id.
    async fn on_upsert(
        &mut self,
        _params: Self::Create,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
