//! Plain data types shared by the actors, clients and HTTP layer.

pub mod menu_item;
pub mod order;

pub use menu_item::*;
pub use order::*;
