//! Plain data types shared by the extractor, the conversation flow and the order book.

pub mod line_item;
pub mod order;

pub use line_item::*;
pub use order::*;
