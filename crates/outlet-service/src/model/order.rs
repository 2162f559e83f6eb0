//! Represents a customer order.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`impl ActorEntity for Order`](Order#impl-ActorEntity-for-Order) for details on:
//! - Creation parameters ([`OrderCreate`])
//! - The delivery progression ([`OrderAction`](crate::ledger_actor::OrderAction))

use crate::model::MenuItemId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders. Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Delivery progress of an order.
///
/// `Preparing -> Out for Delivery -> Delivered`. Only moves forward, one step per sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Preparing,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// The status one sweep later. `Delivered` maps to itself.
    pub fn next(self) -> Self {
        match self {
            OrderStatus::Preparing => OrderStatus::OutForDelivery,
            OrderStatus::OutForDelivery | OrderStatus::Delivered => OrderStatus::Delivered,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Delivered
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<MenuItemId>,
    pub status: OrderStatus,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Notes
    /// The order is initialized with status `Preparing`.
    pub fn new(id: OrderId, items: Vec<MenuItemId>) -> Self {
        Self {
            id,
            items,
            status: OrderStatus::Preparing,
        }
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub items: Vec<MenuItemId>,
}

/// One order moving one step forward during a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusChange {
    pub order_id: OrderId,
    pub from: OrderStatus,
    pub to: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_walks_forward_and_stops_at_delivered() {
        let mut status = OrderStatus::Preparing;
        let mut seen = vec![status];
        for _ in 0..4 {
            status = status.next();
            seen.push(status);
        }
        assert_eq!(
            seen,
            [
                OrderStatus::Preparing,
                OrderStatus::OutForDelivery,
                OrderStatus::Delivered,
                OrderStatus::Delivered,
                OrderStatus::Delivered,
            ]
        );
        assert!(status.is_terminal());
        assert!(!OrderStatus::OutForDelivery.is_terminal());
    }

    #[test]
    fn order_serializes_like_the_http_payload() {
        let order = Order::new(OrderId(1), vec![MenuItemId(1), MenuItemId(2)]);
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            serde_json::json!({ "id": 1, "items": [1, 2], "status": "Preparing" })
        );

        let moving = Order {
            status: OrderStatus::OutForDelivery,
            ..order
        };
        assert_eq!(
            serde_json::to_value(&moving).unwrap()["status"],
            "Out for Delivery"
        );
    }
}
