//! Inventory validation and configuration tests.

use bazar_deck::{Attribute, ConfigError, DeckBuilder, DeckError, InventoryConfig, Piece};

fn piece(shape: &str, colour: &str) -> Piece {
    Piece::new(shape, colour)
}

#[test]
fn test_too_few_pieces() {
    let result = DeckBuilder::new([piece("circle", "red"), piece("square", "blue")]);
    assert_eq!(
        result.unwrap_err(),
        DeckError::InvalidInventorySize { count: 2 }
    );
}

#[test]
fn test_too_many_pieces() {
    let pieces = ["a", "b", "c", "d", "e", "f"]
        .iter()
        .zip(["1", "2", "3", "4", "5", "6"])
        .map(|(shape, colour)| piece(shape, colour));

    assert_eq!(
        DeckBuilder::new(pieces).unwrap_err(),
        DeckError::InvalidInventorySize { count: 6 }
    );
}

#[test]
fn test_shared_colour_rejected() {
    let result = DeckBuilder::new([
        piece("circle", "red"),
        piece("square", "red"),
        piece("triangle", "green"),
    ]);

    assert!(matches!(
        result,
        Err(DeckError::DuplicateAttribute {
            attribute: Attribute::Colour,
            ..
        })
    ));
}

#[test]
fn test_shared_shape_rejected() {
    let result = DeckBuilder::new([
        piece("circle", "red"),
        piece("circle", "blue"),
        piece("triangle", "green"),
    ]);

    assert!(matches!(
        result,
        Err(DeckError::DuplicateAttribute {
            attribute: Attribute::Shape,
            ..
        })
    ));
}

#[test]
fn test_size_checked_before_duplicates() {
    let result = DeckBuilder::new([piece("circle", "red"), piece("circle", "red")]);
    assert_eq!(
        result.unwrap_err(),
        DeckError::InvalidInventorySize { count: 2 }
    );
}

#[test]
fn test_builder_is_reusable() {
    let builder = DeckBuilder::new([
        piece("ghost", "white"),
        piece("bottle", "green"),
        piece("mouse", "grey"),
        piece("book", "blue"),
    ])
    .unwrap();

    let first = builder.generate_deck();
    let copy = builder.clone();

    assert_eq!(copy.generate_deck(), first);
    assert_eq!(builder.objects(), copy.objects());
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_file_round_trip() {
    let path = std::env::temp_dir().join(format!(
        "bazar-deck-inventory-{}.json",
        std::process::id()
    ));

    let config = InventoryConfig::new()
        .with_piece("ghost", "white")
        .with_piece("bottle", "green")
        .with_piece("mouse", "grey")
        .with_piece("book", "blue")
        .with_piece("armchair", "red")
        .with_seed(99);
    std::fs::write(&path, config.to_json().unwrap()).unwrap();

    let loaded = InventoryConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.to_builder().unwrap().generate_deck().len(), 60);
    assert_eq!(loaded.deal().unwrap().remaining(), 60);
}

#[test]
fn test_config_rejects_bad_inventory() {
    let config = InventoryConfig::new()
        .with_piece("ghost", "white")
        .with_piece("bottle", "green");

    let err = config.deal().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Inventory(DeckError::InvalidInventorySize { count: 2 })
    ));
    assert_eq!(err.to_string(), "Expected 3, 4, or 5 pieces, got 2");
}

#[test]
fn test_config_rejects_malformed_json() {
    let err = InventoryConfig::from_json("{ pieces: ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}
