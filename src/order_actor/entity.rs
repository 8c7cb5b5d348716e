//! ActorEntity trait implementation for the Order domain type.
//!
//! Validation lives in `on_create`, which sees the shared [`MenuCatalog`]
//! injected through the actor context.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::framework::ActorEntity;
use crate::menu::MenuCatalog;
use crate::model::{Order, OrderCreate, OrderId};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = Arc<MenuCatalog>;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params))
    }

    /// Rejects orders that have no items, no address, or an unknown restaurant.
    async fn on_create(&mut self, catalog: &Arc<MenuCatalog>) -> Result<(), Self::Error> {
        if self.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        if self.address.trim().is_empty() {
            return Err(OrderError::InvalidAddress);
        }
        if catalog.get(&self.restaurant).is_none() {
            return Err(OrderError::UnknownRestaurant(self.restaurant.clone()));
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _catalog: &Arc<MenuCatalog>,
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::Summarize => Ok(OrderActionResult::Summarize(self.summary())),
        }
    }
}
