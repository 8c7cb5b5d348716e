use order_bot::extractor::extract;
use order_bot::menu::{Menu, MenuCatalog, SynonymTable, Vocabulary};
use order_bot::model::LineItem;

#[test]
fn test_reference_sentences() {
    assert_eq!(
        extract("2 burger 1 pizza", "tasty bites"),
        vec![LineItem::new("burger", 120, 2), LineItem::new("pizza", 200, 1)]
    );
    assert_eq!(
        extract("I want chicken biryani and 3 roti", "desi delight"),
        vec![
            LineItem::new("chicken biryani", 180, 1),
            LineItem::new("roti", 20, 3)
        ]
    );
    assert_eq!(
        extract("cola", "tasty bites"),
        vec![LineItem::new("chocolate shake", 90, 1)]
    );
    assert_eq!(
        extract("5 xyz burger", "tasty bites"),
        vec![LineItem::new("burger", 120, 1)]
    );
}

#[test]
fn test_display_names_capitalize_first_letter_only() {
    let items = extract("cheese burger and paneer butter masala", "tasty bites");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item, "Cheese burger");
    assert_eq!(items[0].price, 150);
}

#[test]
fn test_nothing_to_extract() {
    assert!(extract("", "tasty bites").is_empty());
    assert!(extract("what is the weather like", "tasty bites").is_empty());
    assert!(extract("2 burger", "unknown place").is_empty());
}

#[test]
fn test_restaurant_lookup_ignores_case_and_padding() {
    assert_eq!(extract("roti", "  Desi Delight "), vec![LineItem::new("roti", 20, 1)]);
}

#[test]
fn test_json_output_shape() {
    let json = serde_json::to_value(extract("2 burger", "tasty bites")).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "item": "Burger", "price": 120, "quantity": 2 }])
    );
}

#[test]
fn test_loaded_menu_file_with_custom_vocabulary() {
    let catalog: MenuCatalog = "Night Owl\nMasala Dosa - 90\nFilter Coffee - 30\n"
        .parse()
        .unwrap();
    assert_eq!(
        catalog.extract("2 masala dosa and 2 filter coffee", "night owl"),
        vec![
            LineItem::new("masala dosa", 90, 2),
            LineItem::new("filter coffee", 30, 2)
        ]
    );

    let mut synonyms = SynonymTable::new();
    synonyms.insert("kaapi", "filter coffee");
    let vocabulary = Vocabulary::new(
        Menu::new().with_item("filter coffee", 30),
        synonyms,
    );
    assert_eq!(vocabulary.extract("3 kaapi"), vec![LineItem::new("filter coffee", 30, 3)]);
}
