//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `get` and `list` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// // 1. Define Entity
/// #[derive(Clone, Debug)]
/// struct Table { id: u32 }
/// #[derive(Debug)] struct TableCreate;
/// #[derive(Clone, Debug)] enum TableAction {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct TableError(String);
///
/// #[async_trait]
/// impl ActorEntity for Table {
///     type Id = u32;
///     type Create = TableCreate;
///     type Action = TableAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TableError;
///
///     fn from_create_params(id: u32, _: TableCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn handle_action(&mut self, _: TableAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// // 2. Define Client Wrapper
/// struct TableClient {
///     inner: ResourceClient<Table>,
/// }
///
/// // 3. Implement ActorClient
/// #[async_trait]
/// impl ActorClient<Table> for TableClient {
///     type Error = TableError;
///
///     fn inner(&self) -> &ResourceClient<Table> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         TableError(e.to_string())
///     }
/// }
///
/// // 4. Usage
/// async fn usage(client: TableClient) {
///     // get() and list() are provided automatically!
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID. `Ok(None)` when it does not exist.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity in id order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
