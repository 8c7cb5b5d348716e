//! The chat flow that walks a user from "I'm hungry" to a placed order.
//!
//! [`respond`] is a pure function: it takes the caller's
//! [`ConversationContext`] and one message, and hands back either a [`Reply`]
//! carrying the updated context, or a [`PendingOrder`] when the user has given
//! everything needed to place an order. Placing it is the caller's job (see
//! [`OrderingService`](crate::lifecycle::OrderingService)); once the order book
//! has assigned an id, [`PendingOrder::confirm`] produces the final reply.

mod context;
pub mod intent;

pub use context::{ConversationContext, ConversationState};
pub use intent::FoodType;

use crate::menu::{MenuCatalog, MenuEntry};
use crate::model::{title_case, OrderCreate, OrderId, OrderSummary, PaymentMethod};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Fewest whitespace-separated words accepted as a delivery address.
pub const MIN_ADDRESS_WORDS: usize = 3;

const GREETING: &str = "Welcome to the food ordering assistant! What would you like to eat today?";
const APOLOGY: &str = "Sorry, there was an error processing your request. Please try again.";

/// What the user sees after one turn, plus the context to send back next time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub message: String,
    pub context: ConversationContext,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub menu: Vec<MenuEntry>,
    #[serde(default)]
    pub order_summary: Option<OrderSummary>,
}

impl Reply {
    fn new(message: impl Into<String>, context: ConversationContext) -> Self {
        Self {
            message: message.into(),
            context,
            options: Vec::new(),
            menu: Vec::new(),
            order_summary: None,
        }
    }

    fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    fn with_menu(mut self, menu: Vec<MenuEntry>) -> Self {
        self.menu = menu;
        self
    }

    fn with_summary(mut self, summary: OrderSummary) -> Self {
        self.order_summary = Some(summary);
        self
    }
}

/// Outcome of a single turn.
#[derive(Debug, Clone, PartialEq)]
pub enum Turn {
    Reply(Reply),
    /// The user confirmed an address; the draft must be placed before replying.
    PlaceOrder(PendingOrder),
}

/// A checked-out order waiting for an id from the order book.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOrder {
    pub context: ConversationContext,
    pub draft: OrderCreate,
}

impl PendingOrder {
    /// Builds the confirmation reply once the order has been placed.
    pub fn confirm(self, id: &OrderId, total: u64) -> Reply {
        let mut context = self.context;
        let order_id = id.to_string();
        let payment = context
            .payment_method
            .map(|method| method.label())
            .unwrap_or("selected payment method");
        let restaurant = context
            .restaurant
            .as_deref()
            .map(title_case)
            .unwrap_or_default();

        let message = format!(
            "Thank you! Your order (ID: {order_id}) has been placed successfully with {restaurant}. \
             Your total is ₹{total}. Payment will be made via {payment}. \
             Your food will be delivered to your address within 30-45 minutes."
        );
        context.order_id = Some(order_id);
        context.state = ConversationState::NewOrder;
        Reply::new(message, context)
    }
}

/// The opening line for a fresh session.
pub fn greeting() -> Reply {
    Reply::new(GREETING, ConversationContext::default())
}

/// Reply used when the context no longer makes sense; starts over from Welcome.
pub fn apology() -> Reply {
    Reply::new(APOLOGY, ConversationContext::default())
}

/// Advances the conversation by one user message.
pub fn respond(catalog: &MenuCatalog, context: ConversationContext, message: &str) -> Turn {
    debug!(state = ?context.state, message, "Handling message");
    match context.state {
        ConversationState::Welcome => Turn::Reply(welcome(catalog, context, message)),
        ConversationState::SelectRestaurant => {
            Turn::Reply(select_restaurant(catalog, context, message))
        }
        ConversationState::Ordering => Turn::Reply(ordering(catalog, context, message)),
        ConversationState::Checkout => Turn::Reply(checkout(context, message)),
        ConversationState::Payment => Turn::Reply(payment(context, message)),
        ConversationState::Delivery => delivery(context, message),
        ConversationState::NewOrder => Turn::Reply(new_order(catalog, context, message)),
    }
}

fn welcome(catalog: &MenuCatalog, mut context: ConversationContext, message: &str) -> Reply {
    let food_type = FoodType::classify(message);
    let options = food_type
        .restaurants(catalog)
        .into_iter()
        .map(title_case)
        .collect();
    debug!(food_type = food_type.label(), "Classified request");

    context.state = ConversationState::SelectRestaurant;
    Reply::new(
        format!(
            "I found these restaurants for {} cuisine. Which one would you like to order from?",
            food_type.label()
        ),
        context,
    )
    .with_options(options)
}

fn select_restaurant(
    catalog: &MenuCatalog,
    mut context: ConversationContext,
    message: &str,
) -> Reply {
    let selected = message.trim().to_lowercase();
    let matched = (!selected.is_empty())
        .then(|| {
            catalog
                .restaurants()
                .into_iter()
                .find(|id| selected.contains(id) || id.contains(selected.as_str()))
        })
        .flatten();

    let Some(restaurant) = matched else {
        let options = catalog.restaurants().into_iter().map(title_case).collect();
        return Reply::new(
            "I don't recognize that restaurant. Please select one from the list.",
            context,
        )
        .with_options(options);
    };

    let menu = catalog
        .get(restaurant)
        .map(|vocabulary| vocabulary.menu.entries())
        .unwrap_or_default();
    context.restaurant = Some(restaurant.to_string());
    context.state = ConversationState::Ordering;
    Reply::new(
        format!(
            "Great choice! Here's the menu from {}. What would you like to order?",
            title_case(restaurant)
        ),
        context,
    )
    .with_menu(menu)
}

fn ordering(catalog: &MenuCatalog, mut context: ConversationContext, message: &str) -> Reply {
    if intent::is_done(message) {
        if context.order.is_empty() {
            return Reply::new("Your order is empty. What would you like to order?", context);
        }
        let summary = OrderSummary::from_items(&context.order);
        context.state = ConversationState::Checkout;
        return Reply::new(
            "Here's your order summary. Would you like to proceed to checkout?",
            context,
        )
        .with_summary(summary);
    }

    let Some(vocabulary) = context.restaurant.as_deref().and_then(|id| catalog.get(id)) else {
        warn!(restaurant = ?context.restaurant, "Ordering without a known restaurant");
        return apology();
    };

    let added = vocabulary.extract(message);
    if added.is_empty() {
        return Reply::new(
            "I didn't recognize any items from our menu. Could you try again or type 'done' to finish your order?",
            context,
        );
    }

    let listed = added
        .iter()
        .map(|item| format!("{} x {}", item.quantity, title_case(&item.item)))
        .collect::<Vec<_>>()
        .join(", ");
    context.order.extend(added);
    Reply::new(
        format!("Added {listed} to your order. Anything else or type 'done' to finish?"),
        context,
    )
}

fn checkout(mut context: ConversationContext, message: &str) -> Reply {
    if intent::is_yes(message) {
        context.state = ConversationState::Payment;
        Reply::new("Great! Please choose your payment method:", context)
            .with_options(PaymentMethod::labels())
    } else if intent::is_no(message) {
        context.state = ConversationState::Ordering;
        Reply::new(
            "No problem. You can continue ordering or type 'done' when you're finished.",
            context,
        )
    } else {
        Reply::new(
            "Would you like to proceed to checkout? Please respond with yes or no.",
            context,
        )
    }
}

fn payment(mut context: ConversationContext, message: &str) -> Reply {
    match PaymentMethod::detect(message) {
        Some(method) => {
            context.payment_method = Some(method);
            context.state = ConversationState::Delivery;
            Reply::new("Please provide your delivery address.", context)
        }
        None => Reply::new(
            "Please select a valid payment method: Credit Card, Debit Card, UPI, or Cash on Delivery.",
            context,
        )
        .with_options(PaymentMethod::labels()),
    }
}

fn delivery(mut context: ConversationContext, message: &str) -> Turn {
    if message.split_whitespace().count() < MIN_ADDRESS_WORDS {
        return Turn::Reply(Reply::new(
            "Please provide a valid delivery address with street name, area, and city.",
            context,
        ));
    }

    let address = message.trim().to_string();
    context.address = Some(address.clone());
    let draft = OrderCreate {
        restaurant: context.restaurant.clone().unwrap_or_default(),
        items: context.order.clone(),
        payment_method: context.payment_method,
        address,
    };
    Turn::PlaceOrder(PendingOrder { context, draft })
}

fn new_order(catalog: &MenuCatalog, mut context: ConversationContext, message: &str) -> Reply {
    if intent::wants_new_order(message) {
        let Some(restaurant) = context.restaurant.clone() else {
            warn!("New order requested without a restaurant");
            return apology();
        };
        let Some(vocabulary) = catalog.get(&restaurant) else {
            warn!(restaurant, "New order requested for an unknown restaurant");
            return apology();
        };
        context.restart_order();
        context.state = ConversationState::Ordering;
        Reply::new(
            format!(
                "Sure! Let's start a new order with {}. What would you like to order?",
                title_case(&restaurant)
            ),
            context,
        )
        .with_menu(vocabulary.menu.entries())
    } else if intent::is_goodbye(message) {
        Reply::new(
            "Thank you for ordering with us! Feel free to start a new order anytime. Just tell me what you're looking for.",
            ConversationContext::default(),
        )
    } else {
        Reply::new(
            "Would you like to place another order or are you done for now?",
            context,
        )
        .with_options(vec!["New Order".to_string(), "Exit".to_string()])
    }
}
