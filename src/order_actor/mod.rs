//! # Order Actor
//!
//! The order book: every order placed at the end of a conversation is stored
//! here under a sequential [`OrderId`](crate::model::OrderId).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use order_bot::clients::OrderClient;
//! use order_bot::menu::MenuCatalog;
//! use order_bot::model::{LineItem, OrderCreate};
//! use order_bot::order_actor;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = order_actor::new(32);
//!     tokio::spawn(actor.run(Arc::new(MenuCatalog::builtin())));
//!
//!     let orders = OrderClient::new(client);
//!     let id = orders
//!         .place_order(OrderCreate {
//!             restaurant: "desi delight".into(),
//!             items: vec![LineItem::new("roti", 20, 3)],
//!             payment_method: None,
//!             address: "4 MG Road Pune".into(),
//!         })
//!         .await?;
//!     assert_eq!(orders.summarize(id).await?.total, 60);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
