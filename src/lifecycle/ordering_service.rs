use crate::clients::OrderClient;
use crate::conversation::{self, ConversationContext, Reply, Turn};
use crate::menu::MenuCatalog;
use crate::model::LineItem;
use crate::order_actor::{self, OrderError};
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, instrument};

/// Runs conversations against a menu catalog and a live order book.
///
/// `OrderingService` is responsible for:
/// - **Lifecycle Management**: spawning the order actor and stopping it again
/// - **Dependency Wiring**: handing the shared [`MenuCatalog`] to the actor as its context
/// - **Turn Handling**: placing the order when a conversation reaches checkout
///
/// # Example
///
/// ```rust
/// use order_bot::conversation::ConversationContext;
/// use order_bot::lifecycle::OrderingService;
/// use order_bot::menu::MenuCatalog;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let service = OrderingService::new(MenuCatalog::builtin(), 32);
///
///     let reply = service.handle(ConversationContext::new(), "some biryani").await?;
///     assert_eq!(reply.options, vec!["Desi Delight"]);
///
///     service.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderingService {
    catalog: Arc<MenuCatalog>,
    orders: OrderClient,
    handle: Option<JoinHandle<()>>,
}

impl OrderingService {
    /// Spawns the order actor with a mailbox of `channel_capacity` requests.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(catalog: MenuCatalog, channel_capacity: usize) -> Self {
        let catalog = Arc::new(catalog);
        let (actor, client) = order_actor::new(channel_capacity);
        let handle = tokio::spawn(actor.run(Arc::clone(&catalog)));
        info!(restaurants = catalog.len(), "Ordering service started");

        Self {
            catalog,
            orders: OrderClient::new(client),
            handle: Some(handle),
        }
    }

    /// Uses an existing order client instead of spawning an actor.
    pub fn with_client(catalog: Arc<MenuCatalog>, orders: OrderClient) -> Self {
        Self {
            catalog,
            orders,
            handle: None,
        }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn order_client(&self) -> &OrderClient {
        &self.orders
    }

    /// Line items in `raw_text` for `restaurant`; empty when the restaurant is unknown.
    pub fn extract(&self, raw_text: &str, restaurant: &str) -> Vec<LineItem> {
        self.catalog.extract(raw_text, restaurant)
    }

    /// Runs one conversation turn, placing the order if the user just gave an address.
    ///
    /// The total in the confirmation comes from the order book, not the draft.
    #[instrument(skip(self, context), fields(state = ?context.state))]
    pub async fn handle(
        &self,
        context: ConversationContext,
        message: &str,
    ) -> Result<Reply, OrderError> {
        match conversation::respond(&self.catalog, context, message) {
            Turn::Reply(reply) => Ok(reply),
            Turn::PlaceOrder(pending) => {
                let id = self.orders.place_order(pending.draft.clone()).await?;
                let summary = self.orders.summarize(id).await?;
                Ok(pending.confirm(&id, summary.total))
            }
        }
    }

    /// Drops the client so the actor's channel closes, then waits for the actor task.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down ordering service...");
        drop(self.orders);

        if let Some(handle) = self.handle {
            if let Err(e) = handle.await {
                error!(error = %e, "Order actor task failed");
                return Err(e);
            }
        }

        info!("Ordering service shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::ConversationState;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::model::{Order, OrderId, OrderSummary, PaymentMethod};
    use crate::order_actor::OrderActionResult;

    fn delivery_context() -> ConversationContext {
        ConversationContext {
            state: ConversationState::Delivery,
            restaurant: Some("desi delight".to_string()),
            order: vec![LineItem::new("roti", 20, 3)],
            payment_method: Some(PaymentMethod::Upi),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_handle_places_order_through_client() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_ok(OrderId(7));
        mock.expect_action(OrderId(7)).return_ok(
            OrderActionResult::Summarize(OrderSummary {
                items: vec![LineItem::new("roti", 20, 3)],
                total: 60,
            }),
        );

        let service = OrderingService::with_client(
            Arc::new(MenuCatalog::builtin()),
            OrderClient::new(mock.client()),
        );
        let reply = service
            .handle(delivery_context(), "221B Baker Street London")
            .await
            .unwrap();

        assert_eq!(reply.context.state, ConversationState::NewOrder);
        assert_eq!(reply.context.order_id.as_deref(), Some("ORDER10007"));
        assert!(reply.message.contains("₹60"));
        assert!(reply.message.contains("via UPI"));
        mock.verify();
    }

    #[tokio::test]
    async fn test_handle_surfaces_placement_errors() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_err(FrameworkError::ActorClosed);

        let service = OrderingService::with_client(
            Arc::new(MenuCatalog::builtin()),
            OrderClient::new(mock.client()),
        );
        let result = service
            .handle(delivery_context(), "221B Baker Street London")
            .await;

        assert!(matches!(
            result,
            Err(OrderError::ActorCommunicationError(_))
        ));
    }

    #[tokio::test]
    async fn test_extract_delegates_to_catalog() {
        let service = OrderingService::new(MenuCatalog::builtin(), 4);
        let items = service.extract("2 burger", "Tasty Bites");
        assert_eq!(items, vec![LineItem::new("burger", 120, 2)]);
        assert!(service.extract("2 burger", "nowhere").is_empty());
        service.shutdown().await.unwrap();
    }
}
