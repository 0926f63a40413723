//! Inventory validation errors.

use thiserror::Error;

/// Which piece attribute collided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Shape,
    Colour,
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attribute::Shape => write!(f, "shape"),
            Attribute::Colour => write!(f, "colour"),
        }
    }
}

/// Errors raised when building a deck from an inventory.
///
/// Both are construction-time failures. Deck generation from a valid
/// `DeckBuilder` cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("Expected 3, 4, or 5 pieces, got {count}")]
    InvalidInventorySize { count: usize },

    #[error("At least two pieces have the same {attribute}: {value:?}")]
    DuplicateAttribute { attribute: Attribute, value: String },
}
