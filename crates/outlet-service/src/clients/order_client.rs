//! # Order Client
//!
//! Provides a high‑level API for interacting with the order ledger.
//! It wraps a `ResourceClient<Order>`; catalog validation happens inside the ledger.
use crate::ledger_actor::{OrderAction, OrderError};
use crate::model::{Order, OrderCreate, OrderId, StatusChange};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the order ledger.
///
/// Item validation happens in the ledger's `Order::on_create` hook, so a successful
/// `create_order` means every item existed at that moment.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("create_order called");
        info!(items = params.items.len(), "Sending create_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Like [`get`](ActorClient::get), but absence is [`OrderError::NotFound`].
    pub async fn find(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id).await?.ok_or(OrderError::NotFound(id))
    }

    /// Advances every order by one step and returns the orders that moved.
    #[instrument(skip(self))]
    pub async fn advance_all(&self) -> Result<Vec<StatusChange>, OrderError> {
        let results = self
            .inner
            .broadcast(OrderAction::Advance)
            .await
            .map_err(Self::map_error)?;
        Ok(results.into_iter().filter_map(|(_, change)| change).collect())
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<OrderError>()
            .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItemId, OrderStatus};
    use actor_framework::mock::{create_mock_client, expect_broadcast, MockClient};

    #[tokio::test]
    async fn test_advance_all_keeps_only_real_changes() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let sweep = tokio::spawn(async move { order_client.advance_all().await });

        let (action, responder) = expect_broadcast(&mut receiver)
            .await
            .expect("Expected Broadcast request");
        assert_eq!(action, OrderAction::Advance);

        let change = StatusChange {
            order_id: OrderId(2),
            from: OrderStatus::Preparing,
            to: OrderStatus::OutForDelivery,
        };
        responder
            .send(Ok(vec![(OrderId(1), None), (OrderId(2), Some(change))]))
            .unwrap();

        assert_eq!(sweep.await.unwrap().unwrap(), vec![change]);
    }

    #[tokio::test]
    async fn test_find_maps_absence_to_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId(42)).return_ok(None);
        mock.expect_get(OrderId(1))
            .return_ok(Some(Order::new(OrderId(1), vec![MenuItemId(1)])));
        let client = OrderClient::new(mock.client());

        assert_eq!(
            client.find(OrderId(42)).await,
            Err(OrderError::NotFound(OrderId(42)))
        );
        assert_eq!(client.find(OrderId(1)).await.unwrap().id, OrderId(1));
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_order_surfaces_unknown_items() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                OrderError::UnknownItems(vec![MenuItemId(999)]),
            )));
        let client = OrderClient::new(mock.client());

        let result = client
            .create_order(OrderCreate {
                items: vec![MenuItemId(999)],
            })
            .await;
        assert_eq!(
            result,
            Err(OrderError::UnknownItems(vec![MenuItemId(999)]))
        );
    }
}
