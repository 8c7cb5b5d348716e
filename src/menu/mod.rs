//! # Menu Vocabularies
//!
//! A [`Vocabulary`] pairs a restaurant's [`Menu`] (item name → unit price) with a
//! [`SynonymTable`] of single-word aliases. Both are built once and only read
//! afterwards; the [`MenuCatalog`] maps restaurant ids to vocabularies.
//!
//! Menu keys are stored lowercase with single spaces between words, which is
//! the exact form the extractor joins its token windows into.

pub mod catalog;
pub mod error;

pub use catalog::*;
pub use error::*;

use crate::extractor;
use crate::model::{title_case, LineItem};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lowercases and collapses whitespace runs to single spaces.
pub(crate) fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Mapping from item name to unit price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    items: HashMap<String, u32>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an item. The name is normalized first.
    pub fn insert(&mut self, name: &str, price: u32) {
        self.items.insert(normalize_name(name), price);
    }

    pub fn with_item(mut self, name: &str, price: u32) -> Self {
        self.insert(name, price);
        self
    }

    /// Exact lookup of an already-normalized key; returns the stored key and price.
    pub fn lookup(&self, name: &str) -> Option<(&str, u32)> {
        self.items
            .get_key_value(name)
            .map(|(key, price)| (key.as_str(), *price))
    }

    pub fn price(&self, name: &str) -> Option<u32> {
        self.items.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Display rows sorted by item name.
    pub fn entries(&self) -> Vec<MenuEntry> {
        let mut entries: Vec<MenuEntry> = self
            .items
            .iter()
            .map(|(name, price)| MenuEntry {
                name: title_case(name),
                price: *price,
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }
}

impl<'a> FromIterator<(&'a str, u32)> for Menu {
    fn from_iter<I: IntoIterator<Item = (&'a str, u32)>>(iter: I) -> Self {
        let mut menu = Menu::new();
        for (name, price) in iter {
            menu.insert(name, price);
        }
        menu
    }
}

/// One row of a menu as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    pub price: u32,
}

/// Single-word aliases for canonical menu names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    aliases: HashMap<String, String>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aliases shared by the built-in vocabularies.
    pub fn defaults() -> Self {
        [
            ("soda", "chocolate shake"),
            ("cola", "chocolate shake"),
            ("chips", "fries"),
            ("naan", "butter naan"),
            ("paneer", "paneer tikka"),
            ("biryani", "chicken biryani"),
            ("mojito", "mango mojito"),
        ]
        .into_iter()
        .collect()
    }

    pub fn insert(&mut self, alias: &str, canonical: &str) {
        self.aliases
            .insert(alias.trim().to_lowercase(), normalize_name(canonical));
    }

    /// Canonical name for `token`, but only when that name is on `menu`.
    pub fn resolve<'a>(&'a self, token: &str, menu: &Menu) -> Option<&'a str> {
        self.aliases
            .get(token)
            .map(String::as_str)
            .filter(|canonical| menu.contains(canonical))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for SynonymTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut table = SynonymTable::new();
        for (alias, canonical) in iter {
            table.insert(alias, canonical);
        }
        table
    }
}

/// A menu together with the synonyms that apply to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    pub menu: Menu,
    pub synonyms: SynonymTable,
}

impl Vocabulary {
    pub fn new(menu: Menu, synonyms: SynonymTable) -> Self {
        Self { menu, synonyms }
    }

    /// Extracts line items from `raw_text` against this vocabulary.
    pub fn extract(&self, raw_text: &str) -> Vec<LineItem> {
        extractor::extract_items(self, raw_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_normalizes_names() {
        let menu = Menu::new().with_item("  Cheese   Burger ", 150);
        assert_eq!(menu.price("cheese burger"), Some(150));
        assert_eq!(menu.lookup("cheese burger"), Some(("cheese burger", 150)));
        assert!(!menu.contains("Cheese Burger"));
    }

    #[test]
    fn test_entries_are_sorted_and_title_cased() {
        let menu: Menu = [("pizza", 200), ("burger", 120)].into_iter().collect();
        let names: Vec<_> = menu.entries().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Burger", "Pizza"]);
    }

    #[test]
    fn test_synonym_is_inert_when_canonical_missing() {
        let menu = Menu::new().with_item("roti", 20);
        let synonyms = SynonymTable::defaults();
        assert_eq!(synonyms.resolve("cola", &menu), None);

        let menu = menu.with_item("chocolate shake", 90);
        assert_eq!(synonyms.resolve("cola", &menu), Some("chocolate shake"));
    }
}
