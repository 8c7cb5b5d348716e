use order_bot::clients::{ActorClient, OrderClient};
use order_bot::menu::MenuCatalog;
use order_bot::model::{LineItem, OrderCreate, OrderId, OrderStatus, PaymentMethod};
use order_bot::order_actor::{self, OrderError};
use std::sync::Arc;

fn spawn_order_book() -> (OrderClient, tokio::task::JoinHandle<()>) {
    let (actor, client) = order_actor::new(8);
    let handle = tokio::spawn(actor.run(Arc::new(MenuCatalog::builtin())));
    (OrderClient::new(client), handle)
}

fn draft() -> OrderCreate {
    OrderCreate {
        restaurant: "desi delight".to_string(),
        items: vec![
            LineItem::new("chicken biryani", 180, 1),
            LineItem::new("roti", 20, 3),
        ],
        payment_method: Some(PaymentMethod::DebitCard),
        address: "9 Park Lane Hyderabad".to_string(),
    }
}

#[tokio::test]
async fn test_place_and_summarize() {
    let (orders, handle) = spawn_order_book();

    let id = orders.place_order(draft()).await.unwrap();
    assert_eq!(id, OrderId(1));
    assert_eq!(id.to_string(), "ORDER10001");

    let summary = orders.summarize(id).await.unwrap();
    assert_eq!(summary.total, 240);
    assert_eq!(summary.items.len(), 2);

    let order = orders.get(id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(order.payment_method, Some(PaymentMethod::DebitCard));

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_invalid_drafts_are_rejected_without_using_ids() {
    let (orders, handle) = spawn_order_book();

    let empty = OrderCreate {
        items: Vec::new(),
        ..draft()
    };
    assert_eq!(orders.place_order(empty).await, Err(OrderError::EmptyOrder));

    let no_address = OrderCreate {
        address: "   ".to_string(),
        ..draft()
    };
    assert_eq!(
        orders.place_order(no_address).await,
        Err(OrderError::InvalidAddress)
    );

    let unknown = OrderCreate {
        restaurant: "closed kitchen".to_string(),
        ..draft()
    };
    assert_eq!(
        orders.place_order(unknown).await,
        Err(OrderError::UnknownRestaurant("closed kitchen".to_string()))
    );

    // Rejections did not advance the counter
    assert_eq!(orders.place_order(draft()).await, Ok(OrderId(1)));

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_order_is_not_found() {
    let (orders, handle) = spawn_order_book();

    assert_eq!(orders.get(OrderId(42)).await, Ok(None));
    assert_eq!(
        orders.summarize(OrderId(42)).await,
        Err(OrderError::NotFound("ORDER10042".to_string()))
    );

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_summarize_huge_order_keeps_actor_alive() {
    let (orders, handle) = spawn_order_book();

    let huge = OrderCreate {
        items: vec![
            LineItem::new("roti", u32::MAX, u32::MAX),
            LineItem::new("roti", u32::MAX, u32::MAX),
            LineItem::new("roti", u32::MAX, u32::MAX),
        ],
        ..draft()
    };
    let id = orders.place_order(huge).await.unwrap();
    assert_eq!(orders.summarize(id).await.unwrap().total, u64::MAX);

    // The actor is still serving requests
    assert_eq!(orders.place_order(draft()).await, Ok(OrderId(2)));

    drop(orders);
    handle.await.unwrap();
}
