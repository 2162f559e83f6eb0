//! # Catalog Client
//!
//! Provides a high‑level API for interacting with the catalog actor.
//! It wraps a `ResourceClient<MenuItem>` and exposes domain‑specific methods.
use crate::catalog_actor::CatalogError;
use crate::model::{MenuItem, MenuItemId, MenuItemUpsert};
use actor_framework::{ActorClient, FrameworkError, ResourceClient, Upserted};
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<MenuItem>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<MenuItem> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<CatalogError>()
            .unwrap_or_else(|e| CatalogError::ActorCommunicationError(e.to_string()))
    }
}

impl CatalogClient {
    /// Adds the item, or re-prices the existing item with the same name.
    #[instrument(skip(self))]
    pub async fn upsert(&self, params: MenuItemUpsert) -> Result<Upserted<MenuItem>, CatalogError> {
        debug!("Sending request");
        self.inner.upsert(params).await.map_err(Self::map_error)
    }

    /// Every item, in the order it was first added.
    pub async fn list_all(&self) -> Result<Vec<MenuItem>, CatalogError> {
        self.list().await
    }

    pub async fn exists(&self, id: MenuItemId) -> Result<bool, CatalogError> {
        Ok(self.get(id).await?.is_some())
    }

    /// The ids from `ids` the catalog does not hold, in input order.
    ///
    /// Answered from a single snapshot of the catalog, so a concurrent upsert is either
    /// fully visible or not at all.
    #[instrument(skip(self))]
    pub async fn unknown_items(&self, ids: &[MenuItemId]) -> Result<Vec<MenuItemId>, CatalogError> {
        let known: HashSet<MenuItemId> = self.list().await?.into_iter().map(|item| item.id).collect();
        Ok(ids.iter().copied().filter(|id| !known.contains(id)).collect())
    }
}
