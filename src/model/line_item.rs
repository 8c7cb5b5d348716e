use serde::{Deserialize, Serialize};

/// One extracted `(item, price, quantity)` match.
///
/// Serializes to `{"item": .., "price": .., "quantity": ..}` so it can be
/// handed straight to a rendering layer or an order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Menu name with its first character upper-cased (e.g. `"Chicken biryani"`).
    pub item: String,
    /// Unit price from the active menu.
    pub price: u32,
    /// Always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Builds a line item from a canonical (lowercase) menu name.
    pub fn new(canonical_name: &str, price: u32, quantity: u32) -> Self {
        Self {
            item: capitalize_first(canonical_name),
            price,
            quantity,
        }
    }

    pub fn subtotal(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-cases the first character of every whitespace-separated word.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}
