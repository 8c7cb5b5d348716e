use crate::model::{LineItem, PaymentMethod};
use serde::{Deserialize, Serialize};

/// Where the user is in the ordering flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Welcome,
    SelectRestaurant,
    Ordering,
    Checkout,
    Payment,
    Delivery,
    NewOrder,
}

/// Everything the flow remembers between turns.
///
/// Callers own this value: it goes into every call to
/// [`respond`](crate::conversation::respond) and comes back, updated, in the
/// [`Reply`](crate::conversation::Reply). Nothing is stored on the server side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationContext {
    pub state: ConversationState,
    pub restaurant: Option<String>,
    pub order: Vec<LineItem>,
    pub payment_method: Option<PaymentMethod>,
    pub address: Option<String>,
    pub order_id: Option<String>,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same restaurant, nothing in the basket.
    pub(crate) fn restart_order(&mut self) {
        self.order.clear();
        self.payment_method = None;
        self.address = None;
        self.order_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let context: ConversationContext = serde_json::from_str("{}").unwrap();
        assert_eq!(context, ConversationContext::default());

        let context: ConversationContext =
            serde_json::from_str(r#"{"state": "select_restaurant"}"#).unwrap();
        assert_eq!(context.state, ConversationState::SelectRestaurant);
    }
}
