//! Custom actions for the Order actor.

use crate::model::OrderSummary;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Recomputes the items and grand total from the stored order.
    Summarize,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    Summarize(OrderSummary),
}
