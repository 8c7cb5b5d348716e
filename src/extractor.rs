//! # Order Extractor
//!
//! Pulls `(quantity, item, price)` triples out of free text with a single
//! left-to-right pass over whitespace tokens. At each cursor position:
//!
//! 1. a positive integer token becomes the pending quantity (default 1);
//! 2. windows of 3, 2, then 1 tokens are tried against the menu, longest first;
//! 3. failing that, the single token is tried as a menu key, then as a synonym;
//! 4. an unmatched token is skipped along with any pending quantity.
//!
//! There is no backtracking and no error path: unknown words, unknown
//! restaurants and empty input all produce an empty result.
//!
//! ```rust
//! use order_bot::extractor::extract;
//!
//! let items = extract("2 burger 1 pizza", "tasty bites");
//! assert_eq!(items[0].item, "Burger");
//! assert_eq!(items[0].quantity, 2);
//! assert_eq!(items[1].item, "Pizza");
//! ```

use crate::menu::{MenuCatalog, Vocabulary};
use crate::model::LineItem;
use tracing::{debug, trace};

/// Longest phrase ever looked up in the menu.
pub const MAX_PHRASE_WORDS: usize = 3;

/// Extracts line items using the built-in vocabulary for `restaurant_id`.
pub fn extract(raw_text: &str, restaurant_id: &str) -> Vec<LineItem> {
    MenuCatalog::builtin_shared().extract(raw_text, restaurant_id)
}

/// Lowercases and splits on whitespace runs. Punctuation is kept.
pub fn tokenize(raw_text: &str) -> Vec<String> {
    raw_text
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// A positive base-10 integer with no sign, or `None`.
///
/// Digit runs too large for `u32` are not quantities; the item that follows
/// falls back to quantity 1.
pub fn parse_quantity(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match token.parse::<u32>() {
        Ok(quantity) => Some(quantity).filter(|&quantity| quantity > 0),
        Err(_) => {
            debug!(token, "Quantity out of range, ignoring");
            None
        }
    }
}

/// A menu match: canonical name, unit price, tokens consumed.
struct Match<'v> {
    name: &'v str,
    price: u32,
    width: usize,
}

pub fn extract_items(vocabulary: &Vocabulary, raw_text: &str) -> Vec<LineItem> {
    let tokens = tokenize(raw_text);
    let mut items = Vec::new();
    let mut cursor = 0;

    while cursor < tokens.len() {
        let mut quantity = 1;
        if let Some(explicit) = parse_quantity(&tokens[cursor]) {
            quantity = explicit;
            cursor += 1;
        }

        match match_phrase(vocabulary, &tokens, cursor)
            .or_else(|| match_single(vocabulary, &tokens, cursor))
        {
            Some(found) => {
                cursor += found.width;
                items.push(LineItem::new(found.name, found.price, quantity));
            }
            None => cursor += 1,
        }
    }

    trace!(tokens = tokens.len(), matched = items.len(), "Extracted line items");
    items
}

fn match_phrase<'v>(
    vocabulary: &'v Vocabulary,
    tokens: &[String],
    cursor: usize,
) -> Option<Match<'v>> {
    (1..=MAX_PHRASE_WORDS).rev().find_map(|width| {
        let window = tokens.get(cursor..cursor + width)?;
        let (name, price) = vocabulary.menu.lookup(&window.join(" "))?;
        Some(Match { name, price, width })
    })
}

// Same lookup as a width-1 window, then the synonym table.
fn match_single<'v>(
    vocabulary: &'v Vocabulary,
    tokens: &[String],
    cursor: usize,
) -> Option<Match<'v>> {
    let token = tokens.get(cursor)?;
    let (name, price) = vocabulary.menu.lookup(token).or_else(|| {
        let canonical = vocabulary.synonyms.resolve(token, &vocabulary.menu)?;
        vocabulary.menu.lookup(canonical)
    })?;
    Some(Match { name, price, width: 1 })
}
