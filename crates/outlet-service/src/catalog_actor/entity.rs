//! ActorEntity trait implementation for the MenuItem domain type.
//!
//! Menu items are created and re-priced through upserts keyed by name. They have no
//! custom actions and no dependencies.

use super::error::CatalogError;
use crate::model::{MenuItem, MenuItemId, MenuItemUpsert};
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Menu items take no broadcast actions.
#[derive(Debug, Clone)]
pub enum CatalogAction {}

fn check_price(price: f64) -> Result<(), CatalogError> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidPrice(price))
    }
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemUpsert;
    type Action = CatalogAction;
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    /// Builds a new item after checking the name and price.
    fn from_create_params(id: MenuItemId, params: MenuItemUpsert) -> Result<Self, Self::Error> {
        if params.name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        check_price(params.price)?;
        Ok(Self::new(id, params.name, params.price, params.category))
    }

    /// Items are unique by exact name.
    fn natural_key(params: &MenuItemUpsert) -> Option<String> {
        Some(params.name.clone())
    }

    /// Replaces price and category; id and name stay.
    async fn on_upsert(
        &mut self,
        params: MenuItemUpsert,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        check_price(params.price)?;
        self.price = params.price;
        self.category = params.category;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CatalogAction,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn pizza(price: f64) -> MenuItemUpsert {
        MenuItemUpsert {
            name: "Pizza".to_string(),
            price,
            category: Category::MainCourse,
        }
    }

    #[test]
    fn rejects_empty_name_and_bad_prices() {
        let nameless = MenuItemUpsert {
            name: String::new(),
            ..pizza(1.0)
        };
        assert_eq!(
            MenuItem::from_create_params(MenuItemId(1), nameless),
            Err(CatalogError::EmptyName)
        );
        assert_eq!(
            MenuItem::from_create_params(MenuItemId(1), pizza(0.0)),
            Err(CatalogError::InvalidPrice(0.0))
        );
        assert!(MenuItem::from_create_params(MenuItemId(1), pizza(-3.5)).is_err());
        assert!(MenuItem::from_create_params(MenuItemId(1), pizza(f64::NAN)).is_err());
        assert!(MenuItem::from_create_params(MenuItemId(1), pizza(f64::INFINITY)).is_err());
    }

    #[tokio::test]
    async fn upsert_keeps_id_and_name() {
        let mut item = MenuItem::from_create_params(MenuItemId(3), pizza(10.99)).unwrap();
        let dessert = MenuItemUpsert {
            category: Category::Dessert,
            ..pizza(12.99)
        };
        item.on_upsert(dessert, &()).await.unwrap();

        assert_eq!(
            item,
            MenuItem::new(MenuItemId(3), "Pizza", 12.99, Category::Dessert)
        );
    }

    #[tokio::test]
    async fn rejected_upsert_leaves_item_untouched() {
        let mut item = MenuItem::from_create_params(MenuItemId(1), pizza(10.99)).unwrap();
        let err = item.on_upsert(pizza(-1.0), &()).await.unwrap_err();

        assert_eq!(err, CatalogError::InvalidPrice(-1.0));
        assert_eq!(item.price, 10.99);
    }
}
