//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Upserted};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so the mailbox is the
/// mutual exclusion for the store. A reader never observes a half-applied request, and a
/// [`Broadcast`](ResourceRequest::Broadcast) over every entity is one indivisible turn.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Ticket { id: u32, punched: bool }
/// #[derive(Debug)] struct TicketCreate;
/// #[derive(Clone, Debug)] struct Punch;
/// #[derive(Debug, thiserror::Error)] #[error("ticket error")] struct TicketError;
///
/// #[async_trait]
/// impl ActorEntity for Ticket {
///     type Id = u32;
///     type Create = TicketCreate;
///     type Action = Punch;
///     type ActionResult = bool;
///     type Context = ();
///     type Error = TicketError;
///
///     fn from_create_params(id: u32, _: TicketCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, punched: false })
///     }
///     async fn handle_action(&mut self, _: Punch, _: &()) -> Result<bool, Self::Error> {
///         Ok(!std::mem::replace(&mut self.punched, true))
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Ticket>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let ticket = client.create(TicketCreate).await.unwrap();
///     assert_eq!(ticket.id, 1);
///     let punched = client.broadcast(Punch).await.unwrap();
///     assert_eq!(punched, vec![(1, true)]);
/// }
/// ```
///
/// # Implementation Details
///
/// The actor keeps entities in a `BTreeMap` keyed by id, a `HashMap` from natural key to id
/// for upserts, and a `u32` counter (`next_id`) for id generation.
///
/// * **Create**: builds the entity from `next_id`, runs `on_create`, and only then stores it
///   and advances the counter. A rejected create never burns an id.
/// * **Upsert**: looks the payload's natural key up in the index. A hit runs `on_upsert` in
///   place; a miss goes through the create path.
///
/// Every successful insert, whether from Create or Upsert, indexes its natural key.
/// * **Get**: clone of the entity, or `None`.
/// * **List**: clones of every entity in id order.
/// * **Broadcast**: runs `handle_action` on every entity in id order. Failures are logged and
///   left out of the result; the sweep always reaches the last entity.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    keys: HashMap<String, T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the mailbox. When it is full, client calls wait
    /// until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            keys: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "outlet_service::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    match self.insert_new(params, &context).await {
                        Ok((id, item)) => {
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Upsert { params, respond_to } => {
                    debug!(entity_type, ?params, "Upsert");
                    let existing =
                        T::natural_key(&params).and_then(|key| self.keys.get(&key).cloned());

                    let outcome = match existing
                        .and_then(|id| self.store.get_mut(&id).map(|item| (id, item)))
                    {
                        Some((id, item)) => item
                            .on_upsert(params, &context)
                            .await
                            .map(|_| (id, item.clone(), false)),
                        None => self
                            .insert_new(params, &context)
                            .await
                            .map(|(id, item)| (id, item, true)),
                    };

                    match outcome {
                        Ok((id, entity, created)) => {
                            info!(entity_type, %id, created, size = self.store.len(), "Upserted");
                            let _ = respond_to.send(Ok(Upserted { entity, created }));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Upsert failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let items = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Broadcast { action, respond_to } => {
                    debug!(entity_type, ?action, size = self.store.len(), "Broadcast");
                    let mut results = Vec::with_capacity(self.store.len());
                    for (id, item) in self.store.iter_mut() {
                        match item.handle_action(action.clone(), &context).await {
                            Ok(result) => results.push((id.clone(), result)),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                    }
                    info!(entity_type, visited = self.store.len(), ok = results.len(), "Broadcast done");
                    let _ = respond_to.send(Ok(results));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn insert_new(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<(T::Id, T), T::Error> {
        let id = T::Id::from(self.next_id);
        let key = T::natural_key(&params);
        let mut item = T::from_create_params(id.clone(), params)?;
        item.on_create(context).await?;
        self.next_id += 1;
        if let Some(key) = key {
            self.keys.insert(key, id.clone());
        }
        self.store.insert(id.clone(), item.clone());
        Ok((id, item))
    }
}
