//! Keyword heuristics for reading the user's intent.

use crate::menu::MenuCatalog;

const FAST_FOOD_KEYWORDS: &[&str] = &[
    "burger", "pizza", "fries", "wrap", "snack", "sandwich", "mojito", "fast", "quick", "shake",
    "coke", "cola",
];
const MEAL_KEYWORDS: &[&str] = &[
    "biryani", "roti", "paneer", "dal", "naan", "curry", "rice", "dinner", "lunch", "meal",
    "platter", "thali",
];

const DONE_WORDS: &[&str] = &["done", "finished", "complete", "checkout"];
const YES_WORDS: &[&str] = &["yes", "proceed", "ok", "sure", "confirm"];
const NO_WORDS: &[&str] = &["no", "cancel", "back"];
const NEW_ORDER_WORDS: &[&str] = &["new", "another", "more", "again"];
const GOODBYE_WORDS: &[&str] = &["bye", "thank", "thanks", "quit", "exit"];

/// Kind of food the user seems to be after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodType {
    FastFood,
    Meals,
    General,
}

impl FoodType {
    pub fn label(&self) -> &'static str {
        match self {
            FoodType::FastFood => "fast food",
            FoodType::Meals => "meals",
            FoodType::General => "general",
        }
    }

    /// Counts distinct fast-food and meal keywords; ties fall back to restaurant-name hints.
    pub fn classify(message: &str) -> Self {
        let lowered = message.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphabetic())
            .filter(|w| !w.is_empty())
            .collect();

        let fast = keyword_hits(&words, FAST_FOOD_KEYWORDS);
        let meals = keyword_hits(&words, MEAL_KEYWORDS);

        if fast > meals {
            FoodType::FastFood
        } else if meals > fast {
            FoodType::Meals
        } else if ["tasty", "bites"].iter().any(|hint| lowered.contains(hint)) {
            FoodType::FastFood
        } else if ["desi", "delight"].iter().any(|hint| lowered.contains(hint)) {
            FoodType::Meals
        } else {
            FoodType::General
        }
    }

    /// Restaurants serving this kind of food, or every restaurant when none match.
    pub fn restaurants<'c>(&self, catalog: &'c MenuCatalog) -> Vec<&'c str> {
        let all = catalog.restaurants();
        let hints: &[&str] = match self {
            FoodType::FastFood => &["tasty bites", "fast"],
            FoodType::Meals => &["desi delight", "meal"],
            FoodType::General => return all,
        };
        let matching: Vec<&str> = all
            .iter()
            .copied()
            .filter(|id| hints.iter().any(|hint| id.contains(hint)))
            .collect();
        if matching.is_empty() {
            all
        } else {
            matching
        }
    }
}

// "burgers" counts for "burger"; each keyword counts once.
fn keyword_hits(words: &[&str], keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| {
            words.iter().any(|word| {
                word == *keyword
                    || word
                        .strip_prefix(*keyword)
                        .is_some_and(|rest| rest == "s" || rest == "es")
            })
        })
        .count()
}

fn mentions_any(message: &str, words: &[&str]) -> bool {
    let lowered = message.to_lowercase();
    words.iter().any(|word| lowered.contains(word))
}

pub fn is_done(message: &str) -> bool {
    mentions_any(message, DONE_WORDS)
}

pub fn is_yes(message: &str) -> bool {
    mentions_any(message, YES_WORDS)
}

pub fn is_no(message: &str) -> bool {
    mentions_any(message, NO_WORDS)
}

pub fn wants_new_order(message: &str) -> bool {
    mentions_any(message, NEW_ORDER_WORDS)
}

pub fn is_goodbye(message: &str) -> bool {
    mentions_any(message, GOODBYE_WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_keyword_majority() {
        assert_eq!(FoodType::classify("I want burgers and fries"), FoodType::FastFood);
        assert_eq!(FoodType::classify("some biryani for dinner"), FoodType::Meals);
        assert_eq!(FoodType::classify("I'm hungry"), FoodType::General);
    }

    #[test]
    fn test_classify_tie_uses_restaurant_hints() {
        assert_eq!(FoodType::classify("anything from Desi Delight"), FoodType::Meals);
        assert_eq!(FoodType::classify("pizza and biryani at tasty bites"), FoodType::FastFood);
    }

    #[test]
    fn test_restaurants_for_food_type() {
        let catalog = MenuCatalog::builtin();
        assert_eq!(FoodType::FastFood.restaurants(&catalog), vec!["tasty bites"]);
        assert_eq!(FoodType::Meals.restaurants(&catalog), vec!["desi delight"]);
        assert_eq!(FoodType::General.restaurants(&catalog).len(), 2);
    }

    #[test]
    fn test_restaurants_fall_back_to_all() {
        let catalog: MenuCatalog = "Noodle Bar\nRamen - 250\n".parse().unwrap();
        assert_eq!(FoodType::FastFood.restaurants(&catalog), vec!["noodle bar"]);
    }

    #[test]
    fn test_intent_words_match_substrings() {
        assert!(is_done("I'm done"));
        assert!(is_yes("OK, go ahead"));
        assert!(is_no("go back"));
        assert!(wants_new_order("one more please"));
        assert!(is_goodbye("thanks a lot"));
        assert!(!is_done("2 burger"));
    }
}
