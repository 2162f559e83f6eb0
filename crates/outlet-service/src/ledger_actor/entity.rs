//! ActorEntity trait implementation for the Order domain type.
//!
//! Orders are validated against the catalog in `on_create` and advanced by
//! [`OrderAction::Advance`].

use super::actions::OrderAction;
use super::error::OrderError;
use crate::clients::CatalogClient;
use crate::model::{Order, OrderCreate, OrderId, StatusChange};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = Option<StatusChange>;
    type Context = CatalogClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        Ok(Self::new(id, params.items))
    }

    /// Checks every item against the catalog and reports all unknown ids at once.
    ///
    /// The catalog answers from its own mailbox; the ledger only waits for the reply,
    /// and the catalog never calls back into the ledger.
    async fn on_create(&mut self, catalog: &CatalogClient) -> Result<(), Self::Error> {
        debug!(order_id = %self.id, items = self.items.len(), "Validating items");
        let unknown = catalog
            .unknown_items(&self.items)
            .await
            .map_err(|e| OrderError::CatalogUnavailable(e.to_string()))?;

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(OrderError::UnknownItems(unknown))
        }
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _catalog: &CatalogClient,
    ) -> Result<Option<StatusChange>, Self::Error> {
        match action {
            OrderAction::Advance => {
                if self.status.is_terminal() {
                    return Ok(None);
                }
                let from = self.status;
                self.status = from.next();
                Ok(Some(StatusChange {
                    order_id: self.id,
                    from,
                    to: self.status,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItemId, OrderStatus};
    use actor_framework::mock::MockClient;

    #[test]
    fn empty_order_is_rejected_before_catalog_lookup() {
        let result = Order::from_create_params(OrderId(1), OrderCreate { items: vec![] });
        assert_eq!(result, Err(OrderError::EmptyItems));
    }

    #[tokio::test]
    async fn advance_steps_once_per_call() {
        // Advance never touches the catalog
        let catalog = CatalogClient::new(MockClient::new().client());
        let mut order = Order::new(OrderId(7), vec![MenuItemId(1)]);

        let first = order.handle_action(OrderAction::Advance, &catalog).await;
        assert_eq!(
            first,
            Ok(Some(StatusChange {
                order_id: OrderId(7),
                from: OrderStatus::Preparing,
                to: OrderStatus::OutForDelivery,
            }))
        );

        let second = order.handle_action(OrderAction::Advance, &catalog).await;
        assert_eq!(second.unwrap().map(|c| c.to), Some(OrderStatus::Delivered));

        let third = order.handle_action(OrderAction::Advance, &catalog).await;
        assert_eq!(third, Ok(None));
        assert_eq!(order.status, OrderStatus::Delivered);
    }
}
