//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Outcome of an upsert: the stored entity and whether it was newly created.
#[derive(Debug, Clone, PartialEq)]
pub struct Upserted<T> {
    pub entity: T,
    pub created: bool,
}

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one type of resource (the [`ActorEntity`]). Instead of defining
/// ad-hoc messages for every operation, we standardize around a small set of lifecycle
/// operations:
///
/// - **Create**: Lifecycle start. Uses [`ActorEntity::Create`] to initialize a new resource.
/// - **Upsert**: Create, or re-apply the payload to the entity owning its natural key.
/// - **Get (Read)**: Fetches the current state of one resource by ID.
/// - **List**: Snapshot of every resource in ID order.
/// - **Broadcast**: Executes a custom [`ActorEntity::Action`] on every resource in one turn.
///
/// There is no update-by-id or delete: resources only change through upserts and actions.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Upsert {
        params: T::Create,
        respond_to: Response<Upserted<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Broadcast {
        action: T::Action,
        respond_to: Response<Vec<(T::Id, T::ActionResult)>>,
    },
}
