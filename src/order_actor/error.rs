//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur while placing or querying orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Checkout was attempted with no line items.
    #[error("Order has no items")]
    EmptyOrder,

    /// The delivery address was blank.
    #[error("Delivery address is required")]
    InvalidAddress,

    /// The order names a restaurant that is not in the catalog.
    #[error("Unknown restaurant: {0}")]
    UnknownRestaurant(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
