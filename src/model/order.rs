/// A placed order held by the order book actor.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
use crate::model::LineItem;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Offset added to the sequential id when rendering order numbers.
const ORDER_NUMBER_BASE: u32 = 10_000;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ORDER{}", ORDER_NUMBER_BASE.saturating_add(self.0))
    }
}

/// Payment methods offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Upi,
    CashOnDelivery,
}

impl PaymentMethod {
    /// Offer order; detection also scans in this order.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Upi,
        PaymentMethod::CashOnDelivery,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }

    fn keyword(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit card",
            PaymentMethod::DebitCard => "debit card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::CashOnDelivery => "cash on delivery",
        }
    }

    /// Returns the first method whose name appears anywhere in `message`.
    pub fn detect(message: &str) -> Option<Self> {
        let lowered = message.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|method| lowered.contains(method.keyword()))
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|m| m.label().to_string()).collect()
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Placed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub restaurant: String,
    pub items: Vec<LineItem>,
    pub payment_method: Option<PaymentMethod>,
    pub address: String,
    pub status: OrderStatus,
}

/// Payload for placing a new order, produced by the conversation at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub restaurant: String,
    pub items: Vec<LineItem>,
    pub payment_method: Option<PaymentMethod>,
    pub address: String,
}

impl Order {
    /// Creates a new Order instance in the `Placed` state.
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            restaurant: params.restaurant,
            items: params.items,
            payment_method: params.payment_method,
            address: params.address,
            status: OrderStatus::Placed,
        }
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_items(&self.items)
    }
}

/// Items plus their grand total, as shown before checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub items: Vec<LineItem>,
    pub total: u64,
}

impl OrderSummary {
    /// The total saturates at `u64::MAX` instead of overflowing.
    pub fn from_items(items: &[LineItem]) -> Self {
        Self {
            items: items.to_vec(),
            total: items
                .iter()
                .map(LineItem::subtotal)
                .fold(0u64, u64::saturating_add),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_renders_as_order_number() {
        assert_eq!(OrderId(1).to_string(), "ORDER10001");
        assert_eq!(OrderId::from(42).to_string(), "ORDER10042");
    }

    #[test]
    fn test_payment_detection_prefers_offer_order() {
        assert_eq!(
            PaymentMethod::detect("I'll pay by UPI"),
            Some(PaymentMethod::Upi)
        );
        assert_eq!(
            PaymentMethod::detect("credit card or debit card"),
            Some(PaymentMethod::CreditCard)
        );
        assert_eq!(PaymentMethod::detect("bitcoin"), None);
    }

    #[test]
    fn test_summary_totals_price_times_quantity() {
        let items = vec![LineItem::new("burger", 120, 2), LineItem::new("pizza", 200, 1)];
        assert_eq!(OrderSummary::from_items(&items).total, 440);
        assert_eq!(OrderSummary::from_items(&[]).total, 0);
    }

    #[test]
    fn test_summary_total_saturates_on_huge_orders() {
        let huge = LineItem::new("burger", u32::MAX, u32::MAX);
        let items = vec![huge.clone(), huge.clone(), huge];
        assert_eq!(OrderSummary::from_items(&items).total, u64::MAX);
    }
}
