//! Request body shapes and their validation.
//!
//! Fields are optional at the serde level so a missing field produces a readable message
//! instead of a deserializer error. Wrong JSON types still fail in the extractor.

use super::ApiError;
use crate::model::{Category, MenuItemId, MenuItemUpsert, OrderCreate};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct MenuItemRequest {
    name: Option<String>,
    price: Option<f64>,
    category: Option<String>,
}

impl MenuItemRequest {
    pub(super) fn validate(self) -> Result<MenuItemUpsert, ApiError> {
        let name = self.name.ok_or_else(|| required("name"))?;
        if name.is_empty() {
            return Err(ApiError::bad_request(
                "\"name\" is not allowed to be empty",
            ));
        }

        let price = self.price.ok_or_else(|| required("price"))?;
        if !(price.is_finite() && price > 0.0) {
            return Err(ApiError::bad_request("\"price\" must be a positive number"));
        }

        let category = self
            .category
            .ok_or_else(|| required("category"))?
            .parse::<Category>()
            .map_err(|_| {
                let allowed: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
                ApiError::bad_request(format!(
                    "\"category\" must be one of [{}]",
                    allowed.join(", ")
                ))
            })?;

        Ok(MenuItemUpsert {
            name,
            price,
            category,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct OrderRequest {
    items: Option<Vec<i64>>,
}

impl OrderRequest {
    pub(super) fn validate(self) -> Result<OrderCreate, ApiError> {
        let items = self.items.ok_or_else(|| required("items"))?;
        if items.is_empty() {
            return Err(ApiError::bad_request("\"items\" must contain at least 1 items"));
        }

        // Range is not checked here; ids the catalog never issued come back as unknown items.
        Ok(OrderCreate {
            items: items.into_iter().map(MenuItemId).collect(),
        })
    }
}

fn required(field: &str) -> ApiError {
    ApiError::bad_request(format!("\"{field}\" is required"))
}
