// Tests for EmojiCatalog
// Test cases:
// - JSON key order is kept, even when it is not alphabetical
// - Null and non-list category values are skipped, empty lists are kept
// - Non-object entries are skipped; wrongly typed fields read as absent
// - A later duplicate key replaces the earlier category, and drops it when unusable
// - Non-object document is a parse error
// - Duplicate category names replace entries in place
// - Serialized catalog decodes back to the same categories

use super::*;

#[test]
fn test_json_key_order_is_preserved() {
    let json = r#"{
        "zebra": [{"emoji":"🦓"}],
        "apple": [{"emoji":"🍎"}],
        "monkey": [{"emoji":"🐒"}]
    }"#;
    let catalog = EmojiCatalog::from_json_str(json).unwrap();

    let names: Vec<&str> = catalog.category_names().collect();
    assert_eq!(names, vec!["zebra", "apple", "monkey"]);
}

#[test]
fn test_malformed_categories_are_skipped() {
    let json = r#"{
        "faces": [],
        "missing": null,
        "wrong": "not a list",
        "numbers": 42,
        "nested": {"emoji":"🐶"},
        "animals": [{"emoji":"🐶"}]
    }"#;
    let catalog = EmojiCatalog::from_json_str(json).unwrap();

    let names: Vec<&str> = catalog.category_names().collect();
    assert_eq!(names, vec!["faces", "animals"]);
    assert!(catalog.category("faces").unwrap().entries.is_empty());
    assert_eq!(catalog.entry_count(), 1);
}

#[test]
fn test_malformed_entries_are_skipped() {
    let json = r#"{
        "mixed": [
            {"emoji":"😀"},
            "😁",
            null,
            {"emoji": 7},
            {"name":"no glyph"},
            {"emoji":"😂","name":"face with tears of joy"}
        ]
    }"#;
    let catalog = EmojiCatalog::from_json_str(json).unwrap();

    let entries = &catalog.category("mixed").unwrap().entries;
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].glyph(), Some("😀"));
    assert_eq!(entries[1].glyph(), None);
    assert_eq!(entries[2].glyph(), None);
    assert_eq!(entries[3].name.as_deref(), Some("face with tears of joy"));
}

#[test]
fn test_non_object_document_is_parse_error() {
    let result = EmojiCatalog::from_json_str(r#"["😀", "😁"]"#);
    assert!(matches!(result, Err(CatalogError::Parse(_))));

    let result = EmojiCatalog::from_json_str("not json");
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[test]
fn test_empty_document_is_empty_catalog() {
    let catalog = EmojiCatalog::from_json_str("{}").unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.entry_count(), 0);
}

#[test]
fn test_duplicate_category_replaces_in_place() {
    let catalog = EmojiCatalog::new()
        .with_category("faces", vec![EmojiEntry::new("😀")])
        .with_category("animals", vec![EmojiEntry::new("🐶")])
        .with_category("faces", vec![EmojiEntry::new("😎")]);

    let names: Vec<&str> = catalog.category_names().collect();
    assert_eq!(names, vec!["faces", "animals"]);
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.category("faces").unwrap().entries,
        vec![EmojiEntry::new("😎")]
    );
}

#[test]
fn test_serialized_catalog_decodes_to_same_categories() {
    let catalog = EmojiCatalog::new()
        .with_category(
            "faces",
            vec![EmojiEntry::new("😀").with_name("grinning face").with_shortcode("grinning")],
        )
        .with_category("empty", vec![])
        .with_category("animals", vec![EmojiEntry::new("🐶")]);

    let json = serde_json::to_string(&catalog).unwrap();
    let decoded = EmojiCatalog::from_json_str(&json).unwrap();

    assert_eq!(decoded, catalog);
}

#[test]
fn test_badly_typed_name_keeps_glyph() {
    let json = r#"{"faces":[{"emoji":"😀","name":5},{"emoji":"😁"}]}"#;
    let catalog = EmojiCatalog::from_json_str(json).unwrap();

    let glyphs: Vec<Option<&str>> = catalog
        .category("faces")
        .unwrap()
        .entries
        .iter()
        .map(|e| e.glyph())
        .collect();
    assert_eq!(glyphs, vec![Some("😀"), Some("😁")]);
}

#[test]
fn test_duplicate_key_with_unusable_value_drops_category() {
    let json = r#"{"faces":[{"emoji":"😀"}],"faces":null,"animals":[{"emoji":"🐶"}]}"#;
    let catalog = EmojiCatalog::from_json_str(json).unwrap();

    let names: Vec<&str> = catalog.category_names().collect();
    assert_eq!(names, vec!["animals"]);
    assert!(catalog.category("faces").is_none());
}

#[test]
fn test_duplicate_key_with_list_replaces_in_place() {
    let json = r#"{"faces":[{"emoji":"😀"}],"animals":[{"emoji":"🐶"}],"faces":[{"emoji":"😎"}]}"#;
    let catalog = EmojiCatalog::from_json_str(json).unwrap();

    let names: Vec<&str> = catalog.category_names().collect();
    assert_eq!(names, vec!["faces", "animals"]);
    assert_eq!(
        catalog.category("faces").unwrap().entries,
        vec![EmojiEntry::new("😎")]
    );
}

#[test]
fn test_remove_category() {
    let mut catalog = EmojiCatalog::new()
        .with_category("faces", vec![EmojiEntry::new("😀")])
        .with_category("animals", vec![EmojiEntry::new("🐶")]);

    let removed = catalog.remove_category("faces").unwrap();
    assert_eq!(removed.name, "faces");
    assert!(catalog.remove_category("faces").is_none());
    assert_eq!(catalog.len(), 1);
}
