//! # Order Client
//!
//! High-level API over the order book actor.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderSummary};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Validation (items, address, restaurant) happens in the actor's `on_create` hook;
/// rejections come back as the matching [`OrderError`] variant.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(restaurant = %params.restaurant, items = params.items.len()))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "place_order called");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, "Order placed");
        Ok(id)
    }

    /// Items and grand total as recorded by the order book.
    #[instrument(skip(self))]
    pub async fn summarize(&self, id: OrderId) -> Result<OrderSummary, OrderError> {
        match self
            .inner
            .perform_action(id, OrderAction::Summarize)
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Summarize(summary) => Ok(summary),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    /// Entity rejections keep their [`OrderError`] variant; everything else is a
    /// communication failure.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(source) => match source.downcast::<OrderError>() {
                Ok(order_error) => *order_error,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{
        create_mock_client, expect_action, expect_create, expect_get, MockClient,
    };
    use crate::model::LineItem;

    fn draft() -> OrderCreate {
        OrderCreate {
            restaurant: "tasty bites".to_string(),
            items: vec![LineItem::new("burger", 120, 2)],
            payment_method: None,
            address: "221B Baker Street London".to_string(),
        }
    }

    #[tokio::test]
    async fn test_place_order_forwards_draft() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let place_task = tokio::spawn(async move { order_client.place_order(draft()).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params, draft());
        responder.send(Ok(OrderId(5))).unwrap();

        assert_eq!(place_task.await.unwrap(), Ok(OrderId(5)));
    }

    #[tokio::test]
    async fn test_entity_rejection_keeps_order_error() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let place_task = tokio::spawn(async move { order_client.place_order(draft()).await });

        let (_, responder) = expect_create(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::EntityError(Box::new(OrderError::EmptyOrder))))
            .unwrap();

        assert_eq!(place_task.await.unwrap(), Err(OrderError::EmptyOrder));
    }

    #[tokio::test]
    async fn test_foreign_entity_error_is_communication_error() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let place_task = tokio::spawn(async move { order_client.place_order(draft()).await });

        let (_, responder) = expect_create(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                std::io::Error::other("disk on fire"),
            ))))
            .unwrap();

        match place_task.await.unwrap() {
            Err(OrderError::ActorCommunicationError(msg)) => assert!(msg.contains("disk on fire")),
            other => panic!("Expected ActorCommunicationError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_summarize_returns_summary() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.summarize(OrderId(2)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(2));
        assert!(matches!(action, OrderAction::Summarize));
        let summary = OrderSummary::from_items(&draft().items);
        responder
            .send(Ok(OrderActionResult::Summarize(summary.clone())))
            .unwrap();

        assert_eq!(task.await.unwrap(), Ok(summary));
    }

    #[tokio::test]
    async fn test_closed_actor_is_communication_error() {
        let (client, receiver) = create_mock_client::<Order>(1);
        drop(receiver);
        let result = OrderClient::new(client).get(OrderId(1)).await;
        assert_eq!(
            result,
            Err(OrderError::ActorCommunicationError("Actor closed".to_string()))
        );
    }

    #[tokio::test]
    async fn test_get_forwards_id_and_returns_order() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.get(OrderId(4)).await });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, OrderId(4));
        let order = Order::new(OrderId(4), draft());
        responder.send(Ok(Some(order.clone()))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(Some(order)));
    }

    #[tokio::test]
    async fn test_get_failure_is_communication_error() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId(1))
            .return_err(FrameworkError::ActorDropped);

        let result = OrderClient::new(mock.client()).get(OrderId(1)).await;
        assert_eq!(
            result,
            Err(OrderError::ActorCommunicationError(
                "Actor dropped response channel".to_string()
            ))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_summarize_unknown_order_is_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(9))
            .return_err(FrameworkError::NotFound("ORDER10009".to_string()));

        let result = OrderClient::new(mock.client()).summarize(OrderId(9)).await;
        assert_eq!(result, Err(OrderError::NotFound("ORDER10009".to_string())));
        mock.verify();
    }
}
