//! The choosability rule: which piece does a card point to?
//!
//! A player looking at a card grabs a piece from the inventory:
//!
//! - if a piece on the card is in the inventory exactly, grab that one;
//! - otherwise grab the piece that has nothing in common with the card,
//!   neither shape nor colour.
//!
//! A card belongs in the deck iff exactly one inventory piece qualifies.
//! This rule is kept apart from enumeration so it can be studied on its
//! own: with five pieces it admits 60 cards, roughly half of what the
//! rule is meant to yield, and the cause is not yet known.

use crate::cards::Card;
use crate::core::Piece;

/// Can `piece` be chosen from `card`?
///
/// Degenerate cards never point to anything.
///
/// ```
/// use bazar_deck::cards::Card;
/// use bazar_deck::core::Piece;
/// use bazar_deck::deck::can_choose;
///
/// let card = Card::new(Piece::new("circle", "green"), Piece::new("triangle", "red"));
///
/// assert!(can_choose(&card, &Piece::new("square", "blue")));
/// assert!(!can_choose(&card, &Piece::new("circle", "red")));
/// ```
#[must_use]
pub fn can_choose(card: &Card, piece: &Piece) -> bool {
    if card.is_degenerate() {
        return false;
    }
    if card.contains(piece) {
        return true;
    }
    card.pieces()
        .all(|on_card| on_card.colour() != piece.colour() && on_card.shape() != piece.shape())
}

/// Number of inventory pieces choosable from `card`.
#[must_use]
pub fn choosable_count(card: &Card, inventory: &[Piece]) -> usize {
    inventory.iter().filter(|piece| can_choose(card, piece)).count()
}

/// A card is valid iff exactly one inventory piece is choosable from it.
#[must_use]
pub fn is_valid_card(card: &Card, inventory: &[Piece]) -> bool {
    choosable_count(card, inventory) == 1
}

/// The single inventory piece `card` points to.
///
/// Returns `None` when no piece or more than one piece qualifies.
#[must_use]
pub fn chosen_piece<'a>(card: &Card, inventory: &'a [Piece]) -> Option<&'a Piece> {
    let mut choosable = inventory.iter().filter(|piece| can_choose(card, piece));
    let first = choosable.next()?;
    match choosable.next() {
        Some(_) => None,
        None => Some(first),
    }
}
