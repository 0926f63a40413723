//! Cards - an unordered pair of pieces.
//!
//! A card shows two pieces. The pair is unordered for equality
//! (`Card(A, B) == Card(B, A)`), but the pieces are kept in the order
//! given so display and iteration stay stable.
//!
//! A card whose two positions hold the same piece is "degenerate". It is
//! a legal value, but never survives deck generation.

use serde::{Deserialize, Serialize};

use crate::core::Piece;

/// A card showing two pieces.
///
/// ## Example
///
/// ```
/// use bazar_deck::cards::Card;
/// use bazar_deck::core::Piece;
///
/// let ghost = Piece::new("ghost", "white");
/// let bottle = Piece::new("bottle", "green");
///
/// let card = Card::new(ghost.clone(), bottle.clone());
/// assert_eq!(card, Card::new(bottle, ghost));
/// assert!(!card.is_degenerate());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    content: [Piece; 2],
}

impl Card {
    /// Create a card from two pieces. The pieces are moved in, so the
    /// card owns its own copies.
    #[must_use]
    pub fn new(first: Piece, second: Piece) -> Self {
        Self {
            content: [first, second],
        }
    }

    /// Copies of the two pieces on the card, in stored order.
    #[must_use]
    pub fn content(&self) -> (Piece, Piece) {
        let [first, second] = &self.content;
        (first.clone(), second.clone())
    }

    /// The first piece, as stored.
    #[must_use]
    pub fn first(&self) -> &Piece {
        &self.content[0]
    }

    /// The second piece, as stored.
    #[must_use]
    pub fn second(&self) -> &Piece {
        &self.content[1]
    }

    /// Iterate over both pieces in stored order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.content.iter()
    }

    /// Both positions hold the same piece.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.content[0] == self.content[1]
    }

    /// Does either position hold `piece`?
    #[must_use]
    pub fn contains(&self, piece: &Piece) -> bool {
        self.content.iter().any(|p| p == piece)
    }

    /// Piece keys sorted, so both orders of the same pair agree.
    fn sorted_keys(&self) -> (String, String) {
        let a = self.content[0].key();
        let b = self.content[1].key();
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_keys() == other.sorted_keys()
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.sorted_keys().hash(state);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.content[0], self.content[1])
    }
}
