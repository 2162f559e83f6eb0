//! Represents a dish or drink on the outlet's menu.
//!
//! # Actor Framework
//! [`MenuItem`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`impl ActorEntity for MenuItem`](MenuItem#impl-ActorEntity-for-MenuItem) for details on:
//! - Upsert parameters ([`MenuItemUpsert`])
//! - The name acting as natural key

use crate::catalog_actor::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for menu items. Serializes as a bare integer.
///
/// The catalog only hands out positive ids, but orders may reference any integer;
/// those simply match nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub i64);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id.into())
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_item_{}", self.0)
    }
}

/// Menu section an item is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Main Course")]
    MainCourse,
    Beverage,
    Dessert,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::MainCourse, Category::Beverage, Category::Dessert];

    /// The name used on the wire and in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MainCourse => "Main Course",
            Category::Beverage => "Beverage",
            Category::Dessert => "Dessert",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: f64,
    pub category: Category,
}

impl MenuItem {
    /// Creates a new MenuItem instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the actor system)
    /// * `name` - Display name, unique within the catalog
    /// * `price` - Unit price
    /// * `category` - Menu section
    pub fn new(id: MenuItemId, name: impl Into<String>, price: f64, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category,
        }
    }
}

/// Payload for adding a menu item, or re-pricing the item with the same name.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemUpsert {
    pub name: String,
    pub price: f64,
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_wire_names() {
        assert_eq!("Main Course".parse::<Category>().unwrap(), Category::MainCourse);
        assert_eq!("Beverage".parse::<Category>().unwrap(), Category::Beverage);
        assert_eq!("Dessert".parse::<Category>().unwrap(), Category::Dessert);
    }

    #[test]
    fn category_rejects_unknown_names() {
        assert_eq!(
            "MainCourse".parse::<Category>(),
            Err(CatalogError::UnknownCategory("MainCourse".to_string()))
        );
        assert!("dessert".parse::<Category>().is_err());
    }

    #[test]
    fn menu_item_serializes_with_plain_id_and_category_label() {
        let item = MenuItem::new(MenuItemId(1), "Pizza", 10.99, Category::MainCourse);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Pizza",
                "price": 10.99,
                "category": "Main Course"
            })
        );
    }
}
