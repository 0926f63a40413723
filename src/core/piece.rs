//! Game pieces - the wooden tokens players grab.
//!
//! A `Piece` is identified by its shape and colour. Within a game's
//! inventory both attributes are unique keys, but that rule belongs to
//! `DeckBuilder`; a lone piece is just a value.

use serde::{Deserialize, Serialize};

/// A single game piece with a shape and a colour.
///
/// Pieces compare by value: two pieces are equal iff shape and colour
/// are both equal.
///
/// ## Example
///
/// ```
/// use bazar_deck::core::Piece;
///
/// let ghost = Piece::new("ghost", "white");
/// assert_eq!(ghost.shape(), "ghost");
/// assert_eq!(ghost.colour(), "white");
/// assert_eq!(ghost.to_string(), "white ghost");
/// assert_eq!(ghost, Piece::new("ghost", "white"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Piece {
    shape: String,
    colour: String,
}

impl Piece {
    /// Create a new piece.
    #[must_use]
    pub fn new(shape: impl Into<String>, colour: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
            colour: colour.into(),
        }
    }

    /// The piece's shape.
    #[must_use]
    pub fn shape(&self) -> &str {
        &self.shape
    }

    /// The piece's colour.
    #[must_use]
    pub fn colour(&self) -> &str {
        &self.colour
    }

    /// Stable string form, `"<colour> <shape>"`.
    ///
    /// Cards compare through these keys.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{} {}", self.colour, self.shape)
    }

    /// Does this piece share its shape or its colour with `other`?
    #[must_use]
    pub fn shares_attribute(&self, other: &Piece) -> bool {
        self.shape == other.shape || self.colour == other.colour
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.colour, self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_equality() {
        assert_eq!(Piece::new("circle", "red"), Piece::new("circle", "red"));
        assert_ne!(Piece::new("circle", "red"), Piece::new("square", "red"));
        assert_ne!(Piece::new("circle", "red"), Piece::new("circle", "blue"));
    }

    #[test]
    fn test_piece_key_and_display() {
        let piece = Piece::new("book", "blue");
        assert_eq!(piece.key(), "blue book");
        assert_eq!(format!("{}", piece), piece.key());
    }

    #[test]
    fn test_shares_attribute() {
        let red_circle = Piece::new("circle", "red");

        assert!(red_circle.shares_attribute(&Piece::new("circle", "green")));
        assert!(red_circle.shares_attribute(&Piece::new("square", "red")));
        assert!(red_circle.shares_attribute(&red_circle));
        assert!(!red_circle.shares_attribute(&Piece::new("square", "green")));
    }

    #[test]
    fn test_piece_serialization() {
        let piece = Piece::new("mouse", "grey");

        let json = serde_json::to_string(&piece).unwrap();
        assert_eq!(json, r#"{"shape":"mouse","colour":"grey"}"#);

        let deserialized: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(piece, deserialized);
    }
}
