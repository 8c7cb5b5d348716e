//! Restaurant id → [`Vocabulary`] registry, with the built-in menus and the
//! plain-text menu file loader.
//!
//! ## Menu file format
//!
//! ```text
//! Tasty Bites
//! Burger - 120
//! Pizza - 200
//!
//! Desi Delight
//! Roti - 20
//! ```
//!
//! Blocks are separated by blank lines. The first line of a block names the
//! restaurant; every following line containing ` - ` is an item. Other lines
//! are skipped.

use super::{normalize_name, Menu, MenuError, SynonymTable, Vocabulary};
use crate::model::LineItem;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

pub const TASTY_BITES: &str = "tasty bites";
pub const DESI_DELIGHT: &str = "desi delight";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuCatalog {
    vocabularies: HashMap<String, Vocabulary>,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two reference vocabularies.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            TASTY_BITES,
            Vocabulary::new(
                [
                    ("burger", 120),
                    ("pizza", 200),
                    ("french fries", 80),
                    ("fries", 80),
                    ("cheese burger", 150),
                    ("chicken wrap", 160),
                    ("chocolate shake", 90),
                    ("mango mojito", 70),
                ]
                .into_iter()
                .collect(),
                SynonymTable::defaults(),
            ),
        );
        catalog.insert(
            DESI_DELIGHT,
            Vocabulary::new(
                [
                    ("chicken biryani", 180),
                    ("paneer tikka", 160),
                    ("butter naan", 40),
                    ("dal makhani", 120),
                    ("jeera rice", 90),
                    ("paneer butter masala", 150),
                    ("roti", 20),
                ]
                .into_iter()
                .collect(),
                SynonymTable::defaults(),
            ),
        );
        catalog
    }

    /// Shared instance of [`MenuCatalog::builtin`].
    pub fn builtin_shared() -> &'static MenuCatalog {
        static BUILTIN: OnceLock<MenuCatalog> = OnceLock::new();
        BUILTIN.get_or_init(MenuCatalog::builtin)
    }

    /// Reads and parses a menu file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| MenuError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: MenuCatalog = content.parse()?;
        info!(
            path = %path.display(),
            restaurants = catalog.len(),
            "Loaded menus"
        );
        Ok(catalog)
    }

    /// Registers (or replaces) a restaurant's vocabulary.
    pub fn insert(&mut self, restaurant: &str, vocabulary: Vocabulary) {
        self.vocabularies
            .insert(normalize_name(restaurant), vocabulary);
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    pub fn get(&self, restaurant: &str) -> Option<&Vocabulary> {
        self.vocabularies.get(&normalize_name(restaurant))
    }

    /// Restaurant ids in sorted order.
    pub fn restaurants(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.vocabularies.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.vocabularies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabularies.is_empty()
    }

    /// Extracts line items for `restaurant`. Unknown restaurants yield nothing.
    pub fn extract(&self, raw_text: &str, restaurant: &str) -> Vec<LineItem> {
        match self.get(restaurant) {
            Some(vocabulary) => vocabulary.extract(raw_text),
            None => {
                debug!(restaurant, "Unknown restaurant, empty menu");
                Vec::new()
            }
        }
    }
}

impl FromStr for MenuCatalog {
    type Err = MenuError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let mut catalog = MenuCatalog::new();
        let mut block: Vec<&str> = Vec::new();

        for line in content.lines().chain(std::iter::once("")) {
            let line = line.trim();
            if !line.is_empty() {
                block.push(line);
                continue;
            }
            if let Some((name, items)) = block.split_first() {
                let restaurant = normalize_name(name);
                let menu = parse_items(&restaurant, items)?;
                if catalog.vocabularies.contains_key(&restaurant) {
                    warn!(%restaurant, "Duplicate restaurant block, keeping the last one");
                }
                catalog.insert(&restaurant, Vocabulary::new(menu, SynonymTable::defaults()));
            }
            block.clear();
        }

        Ok(catalog)
    }
}

fn parse_items(restaurant: &str, lines: &[&str]) -> Result<Menu, MenuError> {
    let mut menu = Menu::new();
    for line in lines {
        let Some((name, price)) = line.rsplit_once(" - ") else {
            debug!(restaurant, line, "Skipping line without price");
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(MenuError::MissingItemName {
                restaurant: restaurant.to_string(),
                line: line.to_string(),
            });
        }
        let price = price
            .trim()
            .parse::<u32>()
            .map_err(|_| MenuError::InvalidPrice {
                restaurant: restaurant.to_string(),
                line: line.to_string(),
            })?;
        menu.insert(name, price);
    }
    Ok(menu)
}
